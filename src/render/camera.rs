use crate::primitive::{point::Point, vector::Vector};

use super::{canvas::Canvas, ray::Ray};

/// Pinhole camera at `eye` looking toward `center`.
///
/// The orthonormal basis is built once: `w` points from the scene toward
/// the eye, `u = normalize(up x w)` and `v = w x u`, which
/// re-orthogonalizes the supplied up vector against the view direction.
#[derive(Clone, Debug, PartialEq)]
pub struct Camera {
    eye: Point,
    center: Point,
    up: Vector,
    fov_y: f64,
    width: usize,
    height: usize,

    u: Vector,
    v: Vector,
    w: Vector,
    tan_half_fov_x: f64,
    tan_half_fov_y: f64,
}

impl Camera {
    /// `fov_y` is the vertical field of view in radians; the horizontal
    /// one is derived from the aspect ratio.
    pub fn new(eye: Point, center: Point, up: Vector, fov_y: f64, width: usize, height: usize) -> Self {
        assert!(width > 0 && height > 0);

        let w = (eye - center).normalize();
        let u = up.cross(w).normalize();
        let v = w.cross(u);

        let tan_half_fov_y = (fov_y / 2.).tan();
        let tan_half_fov_x = tan_half_fov_y * width as f64 / height as f64;

        Self {
            eye,
            center,
            up,
            fov_y,
            width,
            height,
            u,
            v,
            w,
            tan_half_fov_x,
            tan_half_fov_y,
        }
    }

    /// Same camera pose re-targeted at another resolution.
    pub fn with_resolution(&self, width: usize, height: usize) -> Self {
        Self::new(self.eye, self.center, self.up, self.fov_y, width, height)
    }

    /// Same camera pose with another vertical field of view (radians).
    pub fn with_fov_y(&self, fov_y: f64) -> Self {
        Self::new(self.eye, self.center, self.up, fov_y, self.width, self.height)
    }

    /// Ray through the center of pixel (i, j); j counts from the top of
    /// the view.
    pub fn ray_for_pixel(&self, i: f64, j: f64) -> Ray {
        let half_width = self.width as f64 / 2.;
        let half_height = self.height as f64 / 2.;

        let alpha = self.tan_half_fov_x * (i + 0.5 - half_width) / half_width;
        let beta = self.tan_half_fov_y * (half_height - (j + 0.5)) / half_height;

        let direction = (self.u * alpha + self.v * beta - self.w).normalize();
        Ray::new(self.eye, direction)
    }

    pub fn canvas(&self) -> Canvas {
        Canvas::new(self.width, self.height)
    }

    pub fn eye(&self) -> Point {
        self.eye
    }

    pub fn fov_y(&self) -> f64 {
        self.fov_y
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }
}
