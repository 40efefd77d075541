use std::fmt;
use std::ops::Add;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointKind {
    Cartesian,
    Polar,
}

/// Fields are private: construction goes through the named factory methods
/// or [`PointFactory`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    /// Factory object kept on the type itself.
    pub const FACTORY: PointFactory = PointFactory;

    pub fn new_cartesian(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    pub fn new_polar(rho: f64, theta: f64) -> Self {
        Point {
            x: rho * theta.cos(),
            y: rho * theta.sin(),
        }
    }

    /// The single-constructor variant: `a` and `b` mean different things
    /// depending on `kind`, which is exactly what named factories avoid.
    pub fn from_coordinates(a: f64, b: f64, kind: PointKind) -> Self {
        match kind {
            PointKind::Cartesian => Point::new_cartesian(a, b),
            PointKind::Polar => Point::new_polar(a, b),
        }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, other: Point) -> Point {
        Point::new_cartesian(self.x + other.x, self.y + other.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", trim_float(self.x), trim_float(self.y))
    }
}

/// Prints near-integral values without noise, e.g. `cos(pi/2)`.
fn trim_float(value: f64) -> String {
    let rounded = (value * 1e6).round() / 1e6;
    if rounded == 0.0 {
        "0".to_string()
    } else {
        rounded.to_string()
    }
}

/// A separate factory type. It knows how to make points but carries no
/// state, so one shared value is enough.
#[derive(Debug, Clone, Copy, Default)]
pub struct PointFactory;

impl PointFactory {
    pub fn new_cartesian(&self, x: f64, y: f64) -> Point {
        Point::new_cartesian(x, y)
    }

    pub fn new_polar(&self, rho: f64, theta: f64) -> Point {
        Point::new_polar(rho, theta)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_polar_plus_cartesian() {
        let p1 = Point::new_polar(1.0, FRAC_PI_2);
        let p2 = Point::new_cartesian(2.0, 0.0);
        assert_eq!(format!("{p1} + {p2} = {}", p1 + p2), "(0,1) + (2,0) = (2,1)");
    }

    #[test]
    fn test_factory_object_matches_methods() {
        let a = Point::FACTORY.new_polar(2.0, 0.0);
        let b = Point::new_cartesian(2.0, 0.0);
        assert_eq!(a, b);
    }

    #[test]
    fn test_kind_switch() {
        let polar = Point::from_coordinates(1.0, FRAC_PI_2, PointKind::Polar);
        assert!(polar.x().abs() < 1e-9);
        assert!((polar.y() - 1.0).abs() < 1e-9);

        let cartesian = Point::from_coordinates(3.0, 4.0, PointKind::Cartesian);
        assert_eq!((cartesian.x(), cartesian.y()), (3.0, 4.0));
    }

    #[test]
    fn test_display_keeps_fractions() {
        assert_eq!(Point::new_cartesian(1.5, -0.25).to_string(), "(1.5,-0.25)");
    }
}
