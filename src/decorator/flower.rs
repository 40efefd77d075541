pub trait Flower {
    fn describe(&self) -> String;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Rose;

impl Flower for Rose {
    fn describe(&self) -> String {
        "A rose".to_string()
    }
}

/// A colour already present is not repeated; a second colour joins with
/// "and".
fn with_colour(base: String, colour: &str) -> String {
    if base.contains(colour) {
        base
    } else if base.contains("that is") {
        format!("{base} and {colour}")
    } else {
        format!("{base} that is {colour}")
    }
}

pub struct RedFlower<'a> {
    flower: &'a dyn Flower,
}

impl<'a> RedFlower<'a> {
    pub fn new(flower: &'a dyn Flower) -> Self {
        RedFlower { flower }
    }
}

impl Flower for RedFlower<'_> {
    fn describe(&self) -> String {
        with_colour(self.flower.describe(), "red")
    }
}

pub struct BlueFlower<'a> {
    flower: &'a dyn Flower,
}

impl<'a> BlueFlower<'a> {
    pub fn new(flower: &'a dyn Flower) -> Self {
        BlueFlower { flower }
    }
}

impl Flower for BlueFlower<'_> {
    fn describe(&self) -> String {
        with_colour(self.flower.describe(), "blue")
    }
}
