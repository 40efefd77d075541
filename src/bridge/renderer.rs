//! Shapes and renderers vary independently: a shape holds a reference to
//! whichever renderer it was given instead of being subclassed per renderer.

pub trait Renderer {
    fn render_circle(&self, x: f64, y: f64, radius: f64) -> String;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct VectorRenderer;

impl Renderer for VectorRenderer {
    fn render_circle(&self, _x: f64, _y: f64, radius: f64) -> String {
        format!("Vector-rendering a circle of radius {radius}")
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct RasterRenderer;

impl Renderer for RasterRenderer {
    fn render_circle(&self, _x: f64, _y: f64, radius: f64) -> String {
        format!("Raster-rendering a circle of radius {radius}")
    }
}

pub trait Shape {
    fn draw(&self) -> String;
    fn resize(&mut self, factor: f64);
}

pub struct Circle<'r> {
    renderer: &'r dyn Renderer,
    pub x: f64,
    pub y: f64,
    pub radius: f64,
}

impl<'r> Circle<'r> {
    pub fn new(renderer: &'r dyn Renderer, x: f64, y: f64, radius: f64) -> Self {
        Circle {
            renderer,
            x,
            y,
            radius,
        }
    }
}

impl Shape for Circle<'_> {
    fn draw(&self) -> String {
        self.renderer.render_circle(self.x, self.y, self.radius)
    }

    fn resize(&mut self, factor: f64) {
        self.radius *= factor;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raster_circle_resize() {
        let renderer = RasterRenderer;
        let mut circle = Circle::new(&renderer, 5.0, 5.0, 5.0);
        assert_eq!(circle.draw(), "Raster-rendering a circle of radius 5");
        circle.resize(2.0);
        assert_eq!(circle.draw(), "Raster-rendering a circle of radius 10");
    }

    #[test]
    fn test_vector_circle() {
        let circle = Circle::new(&VectorRenderer, 0.0, 0.0, 1.5);
        assert_eq!(circle.draw(), "Vector-rendering a circle of radius 1.5");
    }
}
