use std::fmt;

pub trait ShapeRenderer {
    fn render(&self, shape_name: &str) -> String;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct RasterRenderer;

impl ShapeRenderer for RasterRenderer {
    fn render(&self, shape_name: &str) -> String {
        format!("Drawing {shape_name} as pixels")
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct VectorRenderer;

impl ShapeRenderer for VectorRenderer {
    fn render(&self, shape_name: &str) -> String {
        format!("Drawing {shape_name} as lines")
    }
}

/// A named shape bridged to its renderer.
pub struct NamedShape<'r> {
    name: &'static str,
    renderer: &'r dyn ShapeRenderer,
}

impl NamedShape<'_> {
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl fmt::Display for NamedShape<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.renderer.render(self.name))
    }
}

pub struct Triangle;

impl Triangle {
    #[allow(clippy::new_ret_no_self)]
    pub fn new(renderer: &dyn ShapeRenderer) -> NamedShape<'_> {
        NamedShape {
            name: "Triangle",
            renderer,
        }
    }
}

pub struct Square;

impl Square {
    #[allow(clippy::new_ret_no_self)]
    pub fn new(renderer: &dyn ShapeRenderer) -> NamedShape<'_> {
        NamedShape {
            name: "Square",
            renderer,
        }
    }
}
