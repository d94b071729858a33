use crate::primitive::{matrix4::Matrix4, point::Point, vector::Vector};

/// Ephemeral origin + normalized direction pair.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Ray {
    origin: Point,
    direction: Vector,
}

impl Ray {
    pub fn new(origin: Point, direction: Vector) -> Self {
        Self { origin, direction }
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn direction(&self) -> Vector {
        self.direction
    }

    pub fn position(&self, t: f64) -> Point {
        self.origin + self.direction * t
    }

    /// Maps the ray into another coordinate frame: the origin as a point,
    /// the direction as a vector. The direction is renormalized since the
    /// matrix may scale it.
    pub fn transformed(&self, matrix: &Matrix4) -> Self {
        Self::new(*matrix * self.origin, (*matrix * self.direction).normalize())
    }
}
