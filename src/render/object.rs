pub mod sphere;
pub mod triangle;

use crate::primitive::{matrix4::Matrix4, point::Point, vector::Vector};

use self::{sphere::Sphere, triangle::Triangle};
use super::{material::Material, ray::Ray};

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Shape {
    Sphere(Sphere),
    Triangle(Triangle),
}

/// Result of a successful hit test: world-space distance from the ray
/// origin and the world-space intersection point.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Hit {
    pub distance: f64,
    pub point: Point,
}

/// A renderable object: local-space shape plus material and
/// model-to-world transform. The inverse and inverse-transpose are
/// computed once at construction since they are needed per ray.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Object {
    shape: Shape,
    material: Material,
    transformation: Matrix4,
    inverse: Matrix4,
    inverse_transpose: Matrix4,
}

impl Object {
    /// Returns `None` when the transformation is not invertible, since
    /// rays could not be mapped into the object's local space.
    pub fn new(shape: Shape, material: Material, transformation: Matrix4) -> Option<Self> {
        let inverse = transformation.inverse()?;
        Some(Self {
            shape,
            material,
            transformation,
            inverse,
            inverse_transpose: inverse.transpose(),
        })
    }

    pub fn with_shape(shape: Shape) -> Self {
        Self::with_shape_material(shape, Material::default())
    }

    pub fn with_shape_material(shape: Shape, material: Material) -> Self {
        Self {
            shape,
            material,
            transformation: Matrix4::identity(),
            inverse: Matrix4::identity(),
            inverse_transpose: Matrix4::identity(),
        }
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn material(&self) -> &Material {
        &self.material
    }

    pub fn transformation(&self) -> &Matrix4 {
        &self.transformation
    }

    /// Intersects the world-space ray with this object.
    ///
    /// The ray is mapped into local space by the inverse transform, the
    /// shape's local test runs there, and the local hit point is mapped
    /// back through the forward transform. The reported distance is the
    /// world-space distance from the ray origin to the world hit point:
    /// under non-uniform scaling the local ray parameter does not
    /// correspond to world distance.
    pub fn hit_test(&self, eye: Point, direction: Vector) -> Option<Hit> {
        let local_ray = Ray::new(eye, direction).transformed(&self.inverse);
        let local_point = match &self.shape {
            Shape::Sphere(sphere) => sphere.local_hit(&local_ray),
            Shape::Triangle(triangle) => triangle.local_hit(&local_ray),
        }?;

        let point = self.transformation * local_point;
        Some(Hit {
            distance: (point - eye).magnitude(),
            point,
        })
    }

    /// World-space surface normal at a world-space point on the object.
    /// Local normals map to world space through the inverse-transpose of
    /// the model matrix, which keeps them perpendicular to the surface
    /// under non-uniform scaling.
    pub fn normal_at(&self, world_point: Point) -> Vector {
        let local_point = self.inverse * world_point;
        let local_normal = match &self.shape {
            Shape::Sphere(sphere) => sphere.local_normal_at(local_point),
            Shape::Triangle(triangle) => triangle.normal(),
        };
        (self.inverse_transpose * local_normal).normalize()
    }
}
