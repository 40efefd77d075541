//! A point-plotting interface, and adapters that turn lines and circles into
//! what it expects.

use std::collections::BTreeSet;

pub type GridPoint = (i32, i32);

/// All a point plotter knows how to draw.
pub trait PointShape {
    fn points(&self) -> &BTreeSet<GridPoint>;

    fn len(&self) -> usize {
        self.points().len()
    }

    fn is_empty(&self) -> bool {
        self.points().is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineShape {
    points: BTreeSet<GridPoint>,
}

impl LineShape {
    pub fn new(first: GridPoint, second: GridPoint) -> Self {
        LineShape {
            points: line_points(first, second),
        }
    }
}

impl PointShape for LineShape {
    fn points(&self) -> &BTreeSet<GridPoint> {
        &self.points
    }
}

fn line_points(first: GridPoint, second: GridPoint) -> BTreeSet<GridPoint> {
    let ((x1, y1), (x2, y2)) = if first.0 <= second.0 {
        (first, second)
    } else {
        (second, first)
    };

    // Undefined slope.
    if x1 == x2 {
        return (y1.min(y2)..=y1.max(y2)).map(|y| (x1, y)).collect();
    }

    let slope = (f64::from(y2) - f64::from(y1)) / (f64::from(x2) - f64::from(x1));
    let intercept = f64::from(y1) - slope * f64::from(x1);
    (x1..=x2)
        .map(|x| (x, (slope * f64::from(x) + intercept).round() as i32))
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CircleShape {
    points: BTreeSet<GridPoint>,
}

impl CircleShape {
    pub fn new(centre: GridPoint, radius: u16) -> Self {
        CircleShape {
            points: circle_points(centre, radius),
        }
    }
}

impl PointShape for CircleShape {
    fn points(&self) -> &BTreeSet<GridPoint> {
        &self.points
    }
}

fn circle_points((cx, cy): GridPoint, radius: u16) -> BTreeSet<GridPoint> {
    let r = i64::from(radius);
    let rsq = (r * r) as f64;
    let mut points = BTreeSet::new();

    // Sweep both axes so the steep parts of each quadrant have no gaps.
    for a in 0..=r {
        let b = (rsq - (a * a) as f64).sqrt().round() as i64;
        for (dx, dy) in [(a, b), (b, a)] {
            for (sx, sy) in [(1, 1), (-1, 1), (1, -1), (-1, -1)] {
                // Points past the edge of the grid are dropped.
                if let Some(point) = offset((cx, cy), sx * dx, sy * dy) {
                    points.insert(point);
                }
            }
        }
    }
    points
}

fn offset((x, y): GridPoint, dx: i64, dy: i64) -> Option<GridPoint> {
    let x = i32::try_from(i64::from(x) + dx).ok()?;
    let y = i32::try_from(i64::from(y) + dy).ok()?;
    Some((x, y))
}
