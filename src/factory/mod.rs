//! # Factory
//!
//! - [`point`]: factory methods, a separate factory type, and the
//!   single-constructor alternative they replace
//! - [`drinks`]: abstract factory and functional factory registries
//! - [`person`]: a stateful factory issuing ids

pub mod drinks;
pub mod person;
pub mod point;

use crate::catalog::{Family, Showcase};
use crate::config::DemoConfig;
use crate::error::Result;
use std::f64::consts::FRAC_PI_2;

pub fn showcases() -> Vec<Showcase> {
    vec![
        Showcase::new(
            "factory-point",
            Family::Factory,
            "Cartesian and polar factory methods",
            point_demo,
        ),
        Showcase::new(
            "factory-drinks",
            Family::Factory,
            "Abstract and functional hot drink factories",
            drinks_demo,
        ),
        Showcase::new(
            "factory-person",
            Family::Factory,
            "Person factory issuing sequential ids",
            person_demo,
        ),
    ]
}

fn point_demo(_config: &DemoConfig) -> Result<Vec<String>> {
    use point::Point;

    let p1 = Point::new_polar(1.0, FRAC_PI_2);
    let p2 = Point::FACTORY.new_cartesian(2.0, 0.0);
    Ok(vec![format!("{p1} + {p2} = {}", p1 + p2)])
}

fn drinks_demo(config: &DemoConfig) -> Result<Vec<String>> {
    use drinks::{DrinkFactory, FunctionalDrinkFactory};

    let mut lines = Vec::new();
    let factory = DrinkFactory::new();
    for name in ["tea", "coffee"] {
        lines.push(factory.make_drink(name)?.instructions);
    }

    let functional = FunctionalDrinkFactory::new(config.tea_volume_ml, config.coffee_volume_ml);
    for name in ["coffee", "tea"] {
        lines.push(functional.make_drink(name)?.instructions);
    }
    Ok(lines)
}

fn person_demo(_config: &DemoConfig) -> Result<Vec<String>> {
    let mut factory = person::PersonFactory::new();
    Ok(["Henry", "Felix"]
        .into_iter()
        .map(|name| factory.create_person(name).to_string())
        .collect())
}
