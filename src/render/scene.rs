use crate::primitive::{point::Point, vector::Vector};

use super::{
    camera::Camera,
    light::Light,
    object::{Hit, Object},
};

/// Offset applied to shadow ray origins so a surface does not
/// occlude itself at distance ~0.
const SHADOW_OFFSET: f64 = 1e-3;

/// Everything the tracer reads: camera, objects and lights. Built once
/// by the scene-file parser and immutable during rendering.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    camera: Camera,
    objects: Vec<Object>,
    lights: Vec<Light>,
}

impl Scene {
    pub fn new(camera: Camera) -> Self {
        Self {
            camera,
            objects: Vec::new(),
            lights: Vec::new(),
        }
    }

    pub fn with_objects_lights(camera: Camera, objects: Vec<Object>, lights: Vec<Light>) -> Self {
        Self {
            camera,
            objects,
            lights,
        }
    }

    pub fn add_object(&mut self, object: Object) {
        self.objects.push(object);
    }

    pub fn add_light(&mut self, light: Light) {
        self.lights.push(light);
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn set_camera(&mut self, camera: Camera) {
        self.camera = camera;
    }

    pub fn objects(&self) -> &[Object] {
        &self.objects
    }

    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    /// Nearest positive-distance hit over all objects. Linear scan with a
    /// strict minimum, so ties go to the earliest object in the list.
    pub fn nearest_hit(&self, eye: Point, direction: Vector) -> Option<(&Object, Hit)> {
        let mut nearest: Option<(&Object, Hit)> = None;

        for object in &self.objects {
            let Some(hit) = object.hit_test(eye, direction) else {
                continue;
            };
            if hit.distance <= 0. {
                continue;
            }
            if nearest.as_ref().is_none_or(|(_, n)| hit.distance < n.distance) {
                nearest = Some((object, hit));
            }
        }
        nearest
    }

    /// Whether anything blocks the light from `point`.
    ///
    /// The test is deliberately unbounded: an object anywhere along the
    /// shadow ray occludes, even when it lies beyond a point light.
    pub fn is_occluded(&self, point: Point, light: &Light) -> bool {
        let direction = light.direction_from(point);
        let origin = point + direction * SHADOW_OFFSET;

        self.objects
            .iter()
            .any(|object| object.hit_test(origin, direction).is_some())
    }
}
