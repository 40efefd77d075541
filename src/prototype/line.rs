#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Point { x, y }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct Line {
    pub start: Box<Point>,
    pub end: Box<Point>,
}

impl Line {
    pub fn new(start: Point, end: Point) -> Self {
        Line {
            start: Box::new(start),
            end: Box::new(end),
        }
    }

    /// Fresh allocations for both end points.
    pub fn deep_copy(&self) -> Line {
        Line::new(*self.start, *self.end)
    }
}
