use std::ops::Mul;

/// A step between two squares, as used by piece movement patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Scaling a unit direction gives the n-th square along a ray.
impl Mul<i32> for Coord {
    type Output = Coord;

    #[inline]
    fn mul(self, rhs: i32) -> Coord {
        Coord::new(self.x * rhs, self.y * rhs)
    }
}

/// Offsets to the 8 neighbouring squares.
pub const KING_STEPS: [Coord; 8] = [
    Coord { x: -1, y: -1 },
    Coord { x: -1, y: 0 },
    Coord { x: -1, y: 1 },
    Coord { x: 0, y: -1 },
    Coord { x: 0, y: 1 },
    Coord { x: 1, y: -1 },
    Coord { x: 1, y: 0 },
    Coord { x: 1, y: 1 },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn king_steps_are_distinct_neighbours() {
        for (i, d) in KING_STEPS.iter().enumerate() {
            assert!(d.x.abs() <= 1 && d.y.abs() <= 1);
            assert_ne!(*d, Coord::new(0, 0));
            assert!(!KING_STEPS[i + 1..].contains(d));
        }
    }

    #[test]
    fn scaling_walks_along_the_ray() {
        assert_eq!(Coord::new(1, -1) * 3, Coord::new(3, -3));
        assert_eq!(Coord::new(0, 1) * 1, Coord::new(0, 1));
    }
}
