#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Square {
    pub side: i32,
}

impl Square {
    pub fn new(side: i32) -> Self {
        Square { side }
    }
}

pub trait Rectangle {
    fn width(&self) -> i32;
    fn height(&self) -> i32;

    fn area(&self) -> i64 {
        i64::from(self.width()) * i64::from(self.height())
    }
}

/// Presents a [`Square`] to code that only understands rectangles.
#[derive(Debug, Clone, Copy)]
pub struct SquareToRectangleAdapter {
    side: i32,
}

impl SquareToRectangleAdapter {
    pub fn new(square: &Square) -> Self {
        SquareToRectangleAdapter { side: square.side }
    }
}

impl From<Square> for SquareToRectangleAdapter {
    fn from(square: Square) -> Self {
        Self::new(&square)
    }
}

impl Rectangle for SquareToRectangleAdapter {
    fn width(&self) -> i32 {
        self.side
    }

    fn height(&self) -> i32 {
        self.side
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adapted_area() {
        let rectangle: Box<dyn Rectangle> = Box::new(SquareToRectangleAdapter::from(Square::new(5)));
        assert_eq!(rectangle.width(), rectangle.height());
        assert_eq!(rectangle.area(), 25);
    }

    #[test]
    fn test_large_square_area() {
        let rectangle = SquareToRectangleAdapter::new(&Square::new(i32::MAX));
        assert_eq!(rectangle.area(), i64::from(i32::MAX) * i64::from(i32::MAX));
    }
}
