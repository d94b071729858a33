use crate::{
    approx_eq::EPSILON,
    primitive::{point::Point, vector::Vector},
    render::ray::Ray,
};

/// Triangle with local-space vertices and a cached face normal.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Triangle {
    a: Point,
    b: Point,
    c: Point,
    normal: Vector,
}

impl Triangle {
    pub fn new(a: Point, b: Point, c: Point) -> Self {
        let normal = (b - a).cross(c - a).normalize();
        Self { a, b, c, normal }
    }

    pub fn normal(&self) -> Vector {
        self.normal
    }

    /// Ray-plane intersection followed by an inside test: the hit point is
    /// inside when the cross product of each edge with the vector to the
    /// hit point agrees in direction with the face normal.
    pub fn local_hit(&self, ray: &Ray) -> Option<Point> {
        let denominator = ray.direction().dot(self.normal);
        if denominator.abs() < EPSILON {
            // ray parallel to the triangle plane
            return None;
        }

        let t = (self.a.to_vector().dot(self.normal)
            - ray.origin().to_vector().dot(self.normal))
            / denominator;
        if t < 0. {
            return None;
        }

        let hit_point = ray.position(t);
        let edge_checks = [
            (self.b - self.a).cross(hit_point - self.a),
            (self.c - self.b).cross(hit_point - self.b),
            (self.a - self.c).cross(hit_point - self.c),
        ];
        let inside = edge_checks
            .iter()
            .all(|cross| cross.dot(self.normal) >= -EPSILON);

        inside.then_some(hit_point)
    }
}
