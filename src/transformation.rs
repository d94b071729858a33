use crate::primitive::{matrix4::Matrix4, vector::Vector};

#[rustfmt::skip]
pub fn translation_matrix(x: f64, y: f64, z: f64) -> Matrix4 {
    Matrix4::new([
        1., 0., 0., x,
        0., 1., 0., y,
        0., 0., 1., z,
        0., 0., 0., 1.,
    ])
}

#[rustfmt::skip]
pub fn scaling_matrix(x: f64, y: f64, z: f64) -> Matrix4 {
    Matrix4::new([
        x, 0., 0., 0.,
        0., y, 0., 0.,
        0., 0., z, 0.,
        0., 0., 0., 1.,
    ])
}

/// Rotation about an arbitrary axis (Rodrigues' formula):
/// `R = cos(a)*I + (1-cos(a))*aa^T + sin(a)*[a]x`
#[rustfmt::skip]
pub fn rotation_matrix(axis: Vector, radians: f64) -> Matrix4 {
    use crate::primitive::tuple::Tuple;

    let a = axis.normalize();
    let (x, y, z) = (a.x(), a.y(), a.z());
    let cos_r = radians.cos();
    let sin_r = radians.sin();
    let k = 1. - cos_r;

    Matrix4::new([
        cos_r + k * x * x,     k * x * y - sin_r * z, k * x * z + sin_r * y, 0.,
        k * y * x + sin_r * z, cos_r + k * y * y,     k * y * z - sin_r * x, 0.,
        k * z * x - sin_r * y, k * z * y + sin_r * x, cos_r + k * z * z,     0.,
        0.,                    0.,                    0.,                    1.,
    ])
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, FRAC_1_SQRT_2};

    use super::*;
    use crate::primitive::{point::Point, tuple::Tuple};

    #[test]
    fn translate_point() {
        let transform = translation_matrix(5., -3., 2.);

        assert_eq!(transform * Point::new(-3., 4., 5.), Point::new(2., 1., 7.));
    }

    #[test]
    fn scale_point_and_vector() {
        let transform = scaling_matrix(2., 3., 4.);

        assert_eq!(transform * Point::new(-4., 6., 8.), Point::new(-8., 18., 32.));
        assert_eq!(
            transform * Vector::new(-4., 6., 8.),
            Vector::new(-8., 18., 32.)
        );
    }

    #[test]
    fn rotate_around_x_axis() {
        let half_quarter = rotation_matrix(Vector::new(1., 0., 0.), FRAC_PI_4);
        let full_quarter = rotation_matrix(Vector::new(1., 0., 0.), FRAC_PI_2);
        let point = Point::new(0., 1., 0.);

        assert_eq!(
            half_quarter * point,
            Point::new(0., FRAC_1_SQRT_2, FRAC_1_SQRT_2)
        );
        assert_eq!(full_quarter * point, Point::new(0., 0., 1.));
    }

    #[test]
    fn rotate_around_diagonal_axis() {
        // a third of a turn around (1,1,1) cycles the coordinate axes
        let rotation = rotation_matrix(
            Vector::new(1., 1., 1.),
            2. * std::f64::consts::FRAC_PI_3,
        );

        assert_eq!(rotation * Point::new(1., 0., 0.), Point::new(0., 1., 0.));
        assert_eq!(rotation * Point::new(0., 1., 0.), Point::new(0., 0., 1.));
    }

    #[test]
    fn rotation_axis_is_normalized_by_constructor() {
        let rotation = rotation_matrix(Vector::new(0., 0., 10.), FRAC_PI_2);

        assert_eq!(rotation * Point::new(0., 1., 0.), Point::new(-1., 0., 0.));
    }
}
