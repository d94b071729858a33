use crate::primitive::{point::Point, vector::Vector};

use super::{color::Color, material::Material};

/// Constant/linear/quadratic falloff coefficients for point lights.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Attenuation {
    pub constant: f64,
    pub linear: f64,
    pub quadratic: f64,
}

impl Attenuation {
    pub fn new(constant: f64, linear: f64, quadratic: f64) -> Self {
        Self {
            constant,
            linear,
            quadratic,
        }
    }

    fn factor(&self, distance: f64) -> f64 {
        self.constant + self.linear * distance + self.quadratic * distance * distance
    }
}

/// No falloff with distance.
impl Default for Attenuation {
    fn default() -> Self {
        Self::new(1., 0., 0.)
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Light {
    Point {
        position: Point,
        color: Color,
        attenuation: Attenuation,
    },
    /// `direction` points from the surface toward the light.
    /// Directional lights are infinitely far away and never attenuate.
    Directional { direction: Vector, color: Color },
}

impl Light {
    pub fn point(position: Point, color: Color) -> Self {
        Self::Point {
            position,
            color,
            attenuation: Attenuation::default(),
        }
    }

    pub fn directional(direction: Vector, color: Color) -> Self {
        Self::Directional { direction, color }
    }

    /// Normalized direction of a shadow ray cast from `from` toward this
    /// light. For directional lights there is no finite endpoint, only a
    /// direction.
    pub fn direction_from(&self, from: Point) -> Vector {
        match self {
            Light::Point { position, .. } => (*position - from).normalize(),
            Light::Directional { direction, .. } => direction.normalize(),
        }
    }

    /// Blinn-Phong contribution of this light at a surface point,
    /// excluding the ambient and emissive terms which are independent of
    /// any light.
    pub fn illuminate(
        &self,
        hit_point: Point,
        direction_to_eye: Vector,
        material: &Material,
        normal: Vector,
    ) -> Color {
        let (direction_to_light, incoming) = match self {
            Light::Point {
                position,
                color,
                attenuation,
            } => {
                let to_light = *position - hit_point;
                let distance = to_light.magnitude();
                (to_light.normalize(), *color / attenuation.factor(distance))
            }
            Light::Directional { direction, color } => (direction.normalize(), *color),
        };

        let half_vector = (direction_to_light + direction_to_eye).normalize();
        let diffuse = material.diffuse * normal.dot(direction_to_light).max(0.);
        let specular = material.specular * normal.dot(half_vector).max(0.).powf(material.shininess);

        incoming * (diffuse + specular)
    }
}
