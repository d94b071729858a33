use derive_builder::Builder;

use crate::primitive::{point::Point, vector::Vector};

use super::{canvas::Canvas, color::Color, object::Object, scene::Scene};

/// Recursive ray tracer. Casts one ray per pixel and follows specular
/// reflections up to `max_depth` bounces.
#[derive(PartialEq, Debug, Clone, Builder)]
pub struct Raytracer {
    /// Number of reflective bounces a camera ray may take.
    /// 0 disables reflections entirely.
    #[builder(default = "Raytracer::DEFAULT_MAX_DEPTH")]
    max_depth: usize,
    #[builder(default = "false")]
    use_progress_bar: bool,
}

impl Default for Raytracer {
    fn default() -> Self {
        Self {
            max_depth: Self::DEFAULT_MAX_DEPTH,
            use_progress_bar: false,
        }
    }
}

impl Raytracer {
    pub const DEFAULT_MAX_DEPTH: usize = 5;

    pub fn with_max_depth(max_depth: usize) -> Self {
        Self {
            max_depth,
            use_progress_bar: false,
        }
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Renders the scene through its camera into a canvas whose row 0 is
    /// the top of the image. View row j maps straight onto canvas row j:
    /// both count from the top.
    pub fn render(&self, scene: &Scene) -> Canvas {
        let camera = scene.camera();
        let mut image = camera.canvas();

        let progressbar = self.use_progress_bar.then(|| {
            let style = indicatif::ProgressStyle::with_template(
                "{spinner:.green} [{elapsed_precise}] {wide_bar:.cyan/blue} pixels shaded: {human_pos}/{human_len} ({eta})",
            )
            .expect("progress bar template must be valid");
            indicatif::ProgressBar::new((camera.width() * camera.height()) as u64).with_style(style)
        });

        image.set_each_pixel(
            |x, y| {
                let ray = camera.ray_for_pixel(x as f64, y as f64);
                self.trace_ray(scene, ray.origin(), ray.direction(), 0)
            },
            progressbar,
        );
        image
    }

    /// One trace step: nearest hit, local shading, then a reflection
    /// bounce weighted by the surface's specular color while
    /// `depth < max_depth`. Misses contribute black.
    fn trace_ray(&self, scene: &Scene, eye: Point, direction: Vector, depth: usize) -> Color {
        let Some((object, hit)) = scene.nearest_hit(eye, direction) else {
            return Color::black();
        };

        let normal = object.normal_at(hit.point);
        let direction_to_eye = (eye - hit.point).normalize();
        let mut color = self.shade_hit(scene, object, hit.point, direction_to_eye, normal);

        if depth < self.max_depth {
            let direction_from_eye = (hit.point - eye).normalize();
            let reflect_direction = direction_from_eye.reflect(normal);
            let reflected = self.trace_ray(scene, hit.point, reflect_direction, depth + 1);
            color = color + object.material().specular * reflected;
        }
        color
    }

    /// Local Phong color: ambient and emissive terms plus every light
    /// that is not occluded.
    fn shade_hit(
        &self,
        scene: &Scene,
        object: &Object,
        hit_point: Point,
        direction_to_eye: Vector,
        normal: Vector,
    ) -> Color {
        let material = object.material();
        let mut color = material.ambient + material.emission;

        for light in scene.lights() {
            if scene.is_occluded(hit_point, light) {
                continue;
            }
            color = color + light.illuminate(hit_point, direction_to_eye, material, normal);
        }
        color
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::FRAC_PI_4;

    use super::*;
    use crate::{
        primitive::tuple::Tuple,
        render::{
            camera::Camera,
            light::Light,
            material::Material,
            object::{sphere::Sphere, triangle::Triangle, Shape},
        },
    };

    fn single_sphere_scene() -> Scene {
        let camera = Camera::new(
            Point::new(0., 0., 5.),
            Point::zero(),
            Vector::new(0., 1., 0.),
            FRAC_PI_4,
            4,
            4,
        );
        let material = Material {
            diffuse: Color::new(0.8, 0.8, 0.8),
            ..Default::default()
        };
        let mut scene = Scene::new(camera);
        scene.add_object(Object::with_shape_material(
            Shape::Sphere(Sphere::unit()),
            material,
        ));
        scene.add_light(Light::point(Point::new(0., 0., 5.), Color::white()));
        scene
    }

    #[test]
    fn miss_shades_black() {
        let scene = Scene::new(single_sphere_scene().camera().clone());
        let tracer = Raytracer::default();

        assert_eq!(
            tracer.trace_ray(&scene, Point::zero(), Vector::new(0., 0., -1.), 0),
            Color::black()
        );
    }

    #[test]
    fn zero_max_depth_gives_pure_local_color() {
        let scene = single_sphere_scene();
        let local_only = Raytracer::with_max_depth(0);
        let eye = scene.camera().eye();

        let color = local_only.trace_ray(&scene, eye, Vector::new(0., 0., -1.), 0);

        // head-on light, diffuse only, no reflection term
        assert_eq!(color, Color::new(0.8, 0.8, 0.8));
    }

    #[test]
    fn reflection_is_weighted_by_specular_color() {
        // a mirror sphere looking back at an emissive wall behind the eye
        let camera = single_sphere_scene().camera().clone();
        let mut scene = Scene::new(camera);
        scene.add_object(Object::with_shape_material(
            Shape::Sphere(Sphere::unit()),
            Material {
                specular: Color::new(0.5, 0.5, 0.5),
                ..Default::default()
            },
        ));
        scene.add_object(Object::with_shape_material(
            Shape::Triangle(Triangle::new(
                Point::new(-10., -10., 6.),
                Point::new(10., -10., 6.),
                Point::new(0., 10., 6.),
            )),
            Material {
                emission: Color::new(0.4, 0.2, 0.),
                ..Default::default()
            },
        ));

        let eye = Point::new(0., 0., 5.);
        let direction = Vector::new(0., 0., -1.);

        // the camera ray hits the sphere at (0,0,1) and reflects straight
        // back through the wall at z = 6
        assert_eq!(
            Raytracer::with_max_depth(0).trace_ray(&scene, eye, direction, 0),
            Color::black()
        );
        assert_eq!(
            Raytracer::with_max_depth(1).trace_ray(&scene, eye, direction, 0),
            Color::new(0.2, 0.1, 0.)
        );
    }

    #[test]
    fn emission_and_ambient_shade_without_lights() {
        let camera = single_sphere_scene().camera().clone();
        let mut scene = Scene::new(camera);
        scene.add_object(Object::with_shape_material(
            Shape::Sphere(Sphere::unit()),
            Material {
                ambient: Color::new(0.1, 0.2, 0.3),
                emission: Color::new(0.05, 0., 0.),
                ..Default::default()
            },
        ));

        let color = Raytracer::default().trace_ray(
            &scene,
            Point::new(0., 0., 5.),
            Vector::new(0., 0., -1.),
            0,
        );

        assert_eq!(color, Color::new(0.15, 0.2, 0.3));
    }

    #[test]
    fn shadowed_point_keeps_only_ambient() {
        let camera = single_sphere_scene().camera().clone();
        let mut scene = Scene::new(camera);
        scene.add_object(Object::with_shape_material(
            Shape::Sphere(Sphere::unit()),
            Material {
                ambient: Color::new(0.1, 0.1, 0.1),
                diffuse: Color::new(0.9, 0.9, 0.9),
                ..Default::default()
            },
        ));
        scene.add_light(Light::point(Point::new(0., 0., 10.), Color::white()));

        // viewed from behind, the visible face is shadowed by the sphere
        // itself
        let color = Raytracer::with_max_depth(0).trace_ray(
            &scene,
            Point::new(0., 0., -5.),
            Vector::new(0., 0., 1.),
            0,
        );

        assert_eq!(color, Color::new(0.1, 0.1, 0.1));
    }

    #[test]
    fn center_pixels_lit_corner_pixels_black() {
        let scene = single_sphere_scene();
        let tracer = Raytracer::with_max_depth(1);

        let image = tracer.render(&scene);

        let center = image.pixel_at(1, 1);
        assert!(center.r() > 0. && center.g() > 0. && center.b() > 0.);

        for (x, y) in [(0, 0), (3, 0), (0, 3), (3, 3)] {
            assert_eq!(image.pixel_at(x, y), Color::black());
        }
    }

    #[test]
    fn geometry_above_view_axis_fills_top_rows() {
        // an emissive triangle strictly above the view axis must show up
        // in the top canvas rows, since row 0 is the top of the image
        let camera = single_sphere_scene().camera().clone();
        let mut scene = Scene::new(camera);
        let emission = Color::new(0.9, 0.4, 0.1);
        scene.add_object(Object::with_shape_material(
            Shape::Triangle(Triangle::new(
                Point::new(-6., 0.1, 0.),
                Point::new(6., 0.1, 0.),
                Point::new(0., 6., 0.),
            )),
            Material {
                emission,
                ..Default::default()
            },
        ));

        let image = Raytracer::with_max_depth(0).render(&scene);

        for x in 0..4 {
            assert_eq!(image.pixel_at(x, 0), emission);
            assert_eq!(image.pixel_at(x, 1), emission);
            assert_eq!(image.pixel_at(x, 2), Color::black());
            assert_eq!(image.pixel_at(x, 3), Color::black());
        }
    }

    #[test]
    fn rendering_twice_is_bit_identical() {
        let scene = single_sphere_scene();
        let tracer = Raytracer::with_max_depth(2);

        let first = tracer.render(&scene);
        let second = tracer.render(&scene);

        assert_eq!(first.as_rgb_bytes(), second.as_rgb_bytes());
    }

    #[test]
    fn builder_defaults() {
        let tracer = RaytracerBuilder::default().build().unwrap();

        assert_eq!(tracer.max_depth(), Raytracer::DEFAULT_MAX_DEPTH);
        assert_eq!(tracer, Raytracer::default());
    }
}
