//! # Bridge
//!
//! - [`renderer`]: circles drawn through an interchangeable renderer
//! - [`named`]: shapes by name times renderers, without a class per pair
//! - [`pimpl`]: a type bridged to its hidden implementation

pub mod named;
pub mod pimpl;
pub mod renderer;

use crate::catalog::{Family, Showcase};
use crate::config::DemoConfig;
use crate::error::Result;

pub fn showcases() -> Vec<Showcase> {
    vec![
        Showcase::new(
            "bridge-renderer",
            Family::Bridge,
            "Circle drawn through a raster renderer",
            renderer_demo,
        ),
        Showcase::new(
            "bridge-shapes",
            Family::Bridge,
            "Triangles and squares with pixel and line renderers",
            named_demo,
        ),
        Showcase::new(
            "bridge-pimpl",
            Family::Bridge,
            "Greeting through a hidden implementation",
            pimpl_demo,
        ),
    ]
}

fn renderer_demo(_config: &DemoConfig) -> Result<Vec<String>> {
    use renderer::{Circle, RasterRenderer, Shape};

    let renderer = RasterRenderer;
    let mut circle = Circle::new(&renderer, 5.0, 5.0, 5.0);
    let before = circle.draw();
    circle.resize(2.0);
    Ok(vec![before, circle.draw()])
}

fn named_demo(_config: &DemoConfig) -> Result<Vec<String>> {
    use named::{RasterRenderer, ShapeRenderer, Square, Triangle, VectorRenderer};

    let renderers: [&dyn ShapeRenderer; 2] = [&RasterRenderer, &VectorRenderer];
    let mut lines = Vec::new();
    for renderer in renderers {
        lines.push(Triangle::new(renderer).to_string());
        lines.push(Square::new(renderer).to_string());
    }
    Ok(lines)
}

fn pimpl_demo(_config: &DemoConfig) -> Result<Vec<String>> {
    Ok(vec![pimpl::Person::new("Sebastian").greet()])
}
