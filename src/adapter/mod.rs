//! # Adapter
//!
//! Get the interface you want from the interface you were given.
//!
//! - [`geometry`]: lines and circles adapted onto a point plotter
//! - [`square`]: a square standing in for a rectangle

pub mod geometry;
pub mod square;

use crate::catalog::{Family, Showcase};
use crate::config::DemoConfig;
use crate::error::Result;

pub fn showcases() -> Vec<Showcase> {
    vec![
        Showcase::new(
            "adapter-geometry",
            Family::Adapter,
            "Lines and circles as point sets",
            geometry_demo,
        ),
        Showcase::new(
            "adapter-square",
            Family::Adapter,
            "Square to rectangle adapter",
            square_demo,
        ),
    ]
}

fn geometry_demo(_config: &DemoConfig) -> Result<Vec<String>> {
    use geometry::{CircleShape, LineShape, PointShape};
    use itertools::Itertools;

    let line = LineShape::new((0, 0), (4, 2));
    let circle = CircleShape::new((200, 200), 100);
    Ok(vec![
        format!(
            "line (0,0)-(4,2): {}",
            line.points().iter().map(|(x, y)| format!("({x},{y})")).join(" ")
        ),
        format!("circle at (200,200) r=100: {} points", circle.len()),
    ])
}

fn square_demo(_config: &DemoConfig) -> Result<Vec<String>> {
    use square::{Rectangle, Square, SquareToRectangleAdapter};

    let rectangle = SquareToRectangleAdapter::from(Square::new(5));
    Ok(vec![format!("Area = {}", rectangle.area())])
}
