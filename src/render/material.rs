use super::color::Color;

/// Surface material of an object. Attached once at scene construction
/// and immutable during tracing.
///
/// Channel values are non-negative but may exceed 1; colors are only
/// clamped when the final pixel is converted to bytes.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct Material {
    pub ambient: Color,
    pub diffuse: Color,
    pub specular: Color,
    pub emission: Color,
    pub shininess: f64,
}

impl Material {
    pub fn matte_with_color(diffuse: Color) -> Self {
        Self {
            diffuse,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_material_is_black() {
        let material = Material::default();

        assert_eq!(material.ambient, Color::black());
        assert_eq!(material.diffuse, Color::black());
        assert_eq!(material.specular, Color::black());
        assert_eq!(material.emission, Color::black());
        assert_eq!(material.shininess, 0.);
    }
}
