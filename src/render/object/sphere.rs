use crate::{
    primitive::{point::Point, vector::Vector},
    render::ray::Ray,
};

/// Sphere described in its own local space; the owning object's
/// transform places it in the world.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Sphere {
    center: Point,
    radius: f64,
}

impl Sphere {
    pub fn new(center: Point, radius: f64) -> Self {
        Self { center, radius }
    }

    pub fn unit() -> Self {
        Self::new(Point::zero(), 1.)
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Nearest local-space intersection in front of the ray origin.
    pub fn local_hit(&self, ray: &Ray) -> Option<Point> {
        let center_to_origin = ray.origin() - self.center;

        let a = ray.direction().dot(ray.direction());
        let b = 2. * ray.direction().dot(center_to_origin);
        let c = center_to_origin.dot(center_to_origin) - self.radius * self.radius;

        let discriminant = b * b - 4. * a * c;
        if discriminant < 0. || a == 0. {
            return None;
        }

        let delta_sqrt = discriminant.sqrt();
        let root1 = (-b - delta_sqrt) / (2. * a);
        let root2 = (-b + delta_sqrt) / (2. * a);

        // smaller positive root; from inside the sphere only root2 is positive
        let t = if root1 > 0. { root1 } else { root2 };
        if t < 0. {
            return None;
        }
        Some(ray.position(t))
    }

    /// Local-space normal, radially out from the center. Unnormalized;
    /// the owning object normalizes after the inverse-transpose mapping.
    pub fn local_normal_at(&self, local_point: Point) -> Vector {
        local_point - self.center
    }
}
