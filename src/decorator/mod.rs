//! # Decorator
//!
//! Add behaviour to an object without changing its type or inheriting from
//! it.
//!
//! - [`dynamic`]: boxed decorators stacked at runtime
//! - [`generic`]: zero-cost wrappers that still expose the inner shape
//! - [`functional`]: logging around a closure
//! - [`flower`]: colour decorators that avoid repeating themselves

pub mod dynamic;
pub mod flower;
pub mod functional;
pub mod generic;

use crate::catalog::{Family, Showcase};
use crate::config::DemoConfig;
use crate::error::Result;

pub fn showcases() -> Vec<Showcase> {
    vec![
        Showcase::new(
            "decorator-dynamic",
            Family::Decorator,
            "Coloured and transparent shapes composed at runtime",
            dynamic_demo,
        ),
        Showcase::new(
            "decorator-generic",
            Family::Decorator,
            "Static decorators that keep the inner API",
            generic_demo,
        ),
        Showcase::new(
            "decorator-functional",
            Family::Decorator,
            "Logging decorator around functions",
            functional_demo,
        ),
        Showcase::new(
            "decorator-flower",
            Family::Decorator,
            "Red and blue flower decorators",
            flower_demo,
        ),
    ]
}

fn dynamic_demo(_config: &DemoConfig) -> Result<Vec<String>> {
    use dynamic::{Circle, ColouredShape, Shape, Square, TransparentShape};

    let circle = Circle::new(1.0);
    let red_square = ColouredShape::new(Square::new(4.0), "red");
    let red_square_line = red_square.describe();
    let transparent = TransparentShape::new(red_square, 200);
    Ok(vec![circle.describe(), red_square_line, transparent.describe()])
}

fn generic_demo(_config: &DemoConfig) -> Result<Vec<String>> {
    use dynamic::{Circle, Shape};
    use generic::{Coloured, Transparent};

    let mut green_circle = Transparent::new(200, Coloured::new("green", Circle::new(1.5)));
    green_circle.resize(10.0);
    Ok(vec![green_circle.describe()])
}

fn functional_demo(_config: &DemoConfig) -> Result<Vec<String>> {
    use functional::Logger;

    let mut greeter = Logger::new("GreeterFunction", |name: &str| format!("Hello, {name}!"));
    let greeting = greeter.call("Steve");

    let mut add4 = Logger::new("add4", |(a, b, c, d): (f64, f64, f64, f64)| a + b + c + d);
    let sum = add4.call((1.0, 2.0, 3.0, 4.0));

    let mut lines = greeter.trail().to_vec();
    lines.insert(1, greeting);
    lines.extend(add4.trail().iter().cloned());
    lines.push(format!("The result is {sum}"));
    Ok(lines)
}

fn flower_demo(_config: &DemoConfig) -> Result<Vec<String>> {
    use flower::{BlueFlower, Flower, RedFlower, Rose};

    let rose = Rose;
    let red_rose = RedFlower::new(&rose);
    let red_red_rose = RedFlower::new(&red_rose);
    let blue_red_rose = BlueFlower::new(&red_rose);
    Ok(vec![
        rose.describe(),
        red_rose.describe(),
        red_red_rose.describe(),
        blue_red_rose.describe(),
    ])
}
