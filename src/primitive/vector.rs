use std::ops;

use super::tuple::Tuple;
use crate::approx_eq::ApproxEq;

#[derive(Copy, Clone, Debug, Default)]
pub struct Vector {
    x: f64,
    y: f64,
    z: f64,
}

impl Tuple for Vector {
    fn new(x: f64, y: f64, z: f64) -> Self {
        Vector { x, y, z }
    }

    fn x(&self) -> f64 {
        self.x
    }

    fn y(&self) -> f64 {
        self.y
    }

    fn z(&self) -> f64 {
        self.z
    }

    fn w(&self) -> f64 {
        0.
    }
}

impl Vector {
    pub fn zero() -> Self {
        Self::new(0., 0., 0.)
    }

    pub fn magnitude(&self) -> f64 {
        self.dot(*self).sqrt()
    }

    /// Normalizing a zero-length vector yields the zero vector
    /// instead of NaN components.
    pub fn normalize(&self) -> Self {
        let len = self.magnitude();
        if len == 0. {
            return Self::zero();
        }
        *self / len
    }

    pub fn dot(&self, rhs: Self) -> f64 {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z
    }

    pub fn cross(&self, rhs: Self) -> Self {
        Self::new(
            self.y * rhs.z - self.z * rhs.y,
            self.z * rhs.x - self.x * rhs.z,
            self.x * rhs.y - self.y * rhs.x,
        )
    }

    /// Mirror reflection about a surface normal.
    pub fn reflect(&self, normal: Vector) -> Self {
        *self - normal * 2. * self.dot(normal)
    }
}

impl ApproxEq for Vector {
    fn approx_eq(&self, rhs: &Self) -> bool {
        self.x.approx_eq(&rhs.x) && self.y.approx_eq(&rhs.y) && self.z.approx_eq(&rhs.z)
    }
}

impl PartialEq for Vector {
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq(other)
    }
}

impl ops::Add for Vector {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl ops::Sub for Vector {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl ops::Neg for Vector {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl ops::Mul<f64> for Vector {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl ops::Div<f64> for Vector {
    type Output = Self;

    fn div(self, rhs: f64) -> Self::Output {
        Self::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_approx_eq;

    #[test]
    fn magnitude() {
        assert_eq!(Vector::new(1., 0., 0.).magnitude(), 1.);
        assert_approx_eq!(Vector::new(1., 2., 3.).magnitude(), 14_f64.sqrt());
    }

    #[test]
    fn normalize() {
        assert_eq!(Vector::new(4., 0., 0.).normalize(), Vector::new(1., 0., 0.));
        assert_approx_eq!(Vector::new(1., 2., 3.).normalize().magnitude(), 1.);
    }

    #[test]
    fn normalize_zero_vector() {
        assert_eq!(Vector::zero().normalize(), Vector::zero());
    }

    #[test]
    fn dot() {
        assert_eq!(Vector::new(1., 2., 3.).dot(Vector::new(2., 3., 4.)), 20.);
    }

    #[test]
    fn cross() {
        let a = Vector::new(1., 2., 3.);
        let b = Vector::new(2., 3., 4.);

        assert_eq!(a.cross(b), Vector::new(-1., 2., -1.));
        assert_eq!(b.cross(a), Vector::new(1., -2., 1.));
    }

    #[test]
    fn reflect_at_45_degrees() {
        let v = Vector::new(1., -1., 0.);
        let normal = Vector::new(0., 1., 0.);

        assert_eq!(v.reflect(normal), Vector::new(1., 1., 0.));
    }

    #[test]
    fn reflect_off_slanted_surface() {
        let v = Vector::new(0., -1., 0.);
        let normal = Vector::new(std::f64::consts::FRAC_1_SQRT_2, std::f64::consts::FRAC_1_SQRT_2, 0.);

        assert_eq!(v.reflect(normal), Vector::new(1., 0., 0.));
    }
}
