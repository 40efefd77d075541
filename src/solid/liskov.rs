/// Anything with independently settable sides. Callers are entitled to assume
/// that setting one side leaves the other alone.
pub trait Resizable {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
    fn set_width(&mut self, width: u32);
    fn set_height(&mut self, height: u32);

    fn area(&self) -> u64 {
        u64::from(self.width()) * u64::from(self.height())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rectangle {
    width: u32,
    height: u32,
}

impl Rectangle {
    pub fn new(width: u32, height: u32) -> Self {
        Rectangle { width, height }
    }

    /// The substitutable way to get a square: a rectangle that happens to
    /// have equal sides.
    pub fn square(size: u32) -> Self {
        Rectangle::new(size, size)
    }

    pub fn is_square(&self) -> bool {
        self.width == self.height
    }
}

impl Resizable for Rectangle {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn set_width(&mut self, width: u32) {
        self.width = width;
    }

    fn set_height(&mut self, height: u32) {
        self.height = height;
    }
}

/// Keeps its sides equal, which breaks the [`Resizable`] contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Square {
    size: u32,
}

impl Square {
    pub fn new(size: u32) -> Self {
        Square { size }
    }
}

impl Resizable for Square {
    fn width(&self) -> u32 {
        self.size
    }

    fn height(&self) -> u32 {
        self.size
    }

    fn set_width(&mut self, width: u32) {
        self.size = width;
    }

    fn set_height(&mut self, height: u32) {
        self.size = height;
    }
}

/// Sets the height to 10 and returns `(expected, actual)` area.
pub fn process(shape: &mut dyn Resizable) -> (u64, u64) {
    let width = u64::from(shape.width());
    shape.set_height(10);
    (width * 10, shape.area())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rectangle_is_substitutable() {
        let mut rectangle = Rectangle::new(3, 4);
        assert_eq!(process(&mut rectangle), (30, 30));
    }

    #[test]
    fn test_square_breaks_expectation() {
        let mut square = Square::new(5);
        assert_eq!(process(&mut square), (50, 100));
    }

    #[test]
    fn test_area_of_largest_sides() {
        let rectangle = Rectangle::new(u32::MAX, u32::MAX);
        assert_eq!(rectangle.area(), u64::from(u32::MAX) * u64::from(u32::MAX));

        let mut wide = Rectangle::new(u32::MAX, 1);
        assert_eq!(process(&mut wide), (u64::from(u32::MAX) * 10, u64::from(u32::MAX) * 10));
    }

    #[test]
    fn test_square_rectangle_behaves() {
        let mut square = Rectangle::square(5);
        assert!(square.is_square());
        assert_eq!(process(&mut square), (50, 50));
        assert!(!square.is_square());
    }
}
