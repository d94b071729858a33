use std::ops;

use crate::approx_eq::ApproxEq;

#[derive(Copy, Clone, Debug, Default)]
pub struct Color {
    r: f64,
    g: f64,
    b: f64,
}

impl Color {
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    pub fn black() -> Self {
        Self::new(0., 0., 0.)
    }

    pub fn white() -> Self {
        Self::new(1., 1., 1.)
    }

    pub fn r(&self) -> f64 {
        self.r
    }

    pub fn g(&self) -> f64 {
        self.g
    }

    pub fn b(&self) -> f64 {
        self.b
    }

    fn channel_to_byte(v: f64) -> u8 {
        // scale, clamp, truncate
        (v * 255.).clamp(0., 255.) as u8
    }

    pub fn to_bytes(&self) -> [u8; 3] {
        [
            Self::channel_to_byte(self.r),
            Self::channel_to_byte(self.g),
            Self::channel_to_byte(self.b),
        ]
    }
}

impl ApproxEq for Color {
    fn approx_eq(&self, rhs: &Self) -> bool {
        self.r.approx_eq(&rhs.r) && self.g.approx_eq(&rhs.g) && self.b.approx_eq(&rhs.b)
    }
}

impl PartialEq for Color {
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq(other)
    }
}

impl ops::Add for Color {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.r + rhs.r, self.g + rhs.g, self.b + rhs.b)
    }
}

/// Component-wise product, used to filter light through material colors.
impl ops::Mul for Color {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self::new(self.r * rhs.r, self.g * rhs.g, self.b * rhs.b)
    }
}

impl ops::Mul<f64> for Color {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        Self::new(self.r * rhs, self.g * rhs, self.b * rhs)
    }
}

impl ops::Div<f64> for Color {
    type Output = Self;

    fn div(self, rhs: f64) -> Self::Output {
        Self::new(self.r / rhs, self.g / rhs, self.b / rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add() {
        assert_eq!(
            Color::new(0.9, 0.6, 0.75) + Color::new(0.7, 0.1, 0.25),
            Color::new(1.6, 0.7, 1.0)
        );
    }

    #[test]
    fn component_mul() {
        assert_eq!(
            Color::new(1., 0.2, 0.4) * Color::new(0.9, 1., 0.1),
            Color::new(0.9, 0.2, 0.04)
        );
    }

    #[test]
    fn scalar_mul_and_div() {
        assert_eq!(Color::new(0.2, 0.3, 0.4) * 2., Color::new(0.4, 0.6, 0.8));
        assert_eq!(Color::new(0.2, 0.3, 0.4) / 2., Color::new(0.1, 0.15, 0.2));
    }

    #[test]
    fn to_bytes_clamps_out_of_range_channels() {
        assert_eq!(Color::new(1.5, -0.3, 0.5).to_bytes(), [255, 0, 127]);
        assert_eq!(Color::black().to_bytes(), [0, 0, 0]);
        assert_eq!(Color::white().to_bytes(), [255, 255, 255]);
    }
}
