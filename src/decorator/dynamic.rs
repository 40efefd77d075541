//! Decorators chosen at runtime: each wraps any boxed shape and adds to its
//! description.

/// Integral values print without a fractional part.
pub(crate) fn format_measure(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

pub trait Shape {
    fn describe(&self) -> String;
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    radius: f64,
}

impl Circle {
    pub fn new(radius: f64) -> Self {
        Circle { radius }
    }

    pub fn resize(&mut self, factor: f64) {
        self.radius *= factor;
    }
}

impl Shape for Circle {
    fn describe(&self) -> String {
        format!("Circle({})", format_measure(self.radius))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Square {
    side: f64,
}

impl Square {
    pub fn new(side: f64) -> Self {
        Square { side }
    }

    pub fn resize(&mut self, factor: f64) {
        self.side *= factor;
    }
}

impl Shape for Square {
    fn describe(&self) -> String {
        format!("Square({})", format_measure(self.side))
    }
}

pub struct ColouredShape {
    shape: Box<dyn Shape>,
    colour: String,
}

impl ColouredShape {
    pub fn new(shape: impl Shape + 'static, colour: &str) -> Self {
        ColouredShape {
            shape: Box::new(shape),
            colour: capitalize(colour),
        }
    }
}

impl Shape for ColouredShape {
    fn describe(&self) -> String {
        format!("{}{}", self.colour, self.shape.describe())
    }
}

pub struct TransparentShape {
    shape: Box<dyn Shape>,
    transparency: u8,
}

impl TransparentShape {
    pub fn new(shape: impl Shape + 'static, transparency: u8) -> Self {
        TransparentShape {
            shape: Box::new(shape),
            transparency,
        }
    }
}

impl Shape for TransparentShape {
    fn describe(&self) -> String {
        format!(
            "{} has {}",
            self.shape.describe(),
            transparency_percent(self.transparency)
        )
    }
}

pub(crate) fn transparency_percent(transparency: u8) -> String {
    format!("{:.2}% transparency", f64::from(transparency) / 255.0 * 100.0)
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
