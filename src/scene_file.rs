//! Parser for the line-oriented scene description format: one command
//! per line (`size`, `camera`, `sphere`, `vertex`/`tri`, material and
//! light state, transforms with a push/pop stack), `#` comments.

use std::fmt::Display;

use crate::{
    primitive::{matrix4::Matrix4, point::Point, tuple::Tuple, vector::Vector},
    render::{
        camera::Camera,
        color::Color,
        light::{Attenuation, Light},
        material::Material,
        object::{sphere::Sphere, triangle::Triangle, Object, Shape},
        scene::Scene,
    },
    transformation::{rotation_matrix, scaling_matrix, translation_matrix},
};

#[derive(Debug, PartialEq)]
pub enum SceneParseError {
    /// A command had fewer values than it requires.
    MissingValue { line: usize, command: String },
    InvalidNumber { line: usize, value: String },
    /// `size` with a zero or negative dimension.
    InvalidSize { line: usize },
    VertexOutOfRange { line: usize, index: usize },
    /// `popTransform` with nothing left to pop.
    EmptyTransformStack { line: usize },
    /// The accumulated transform cannot be inverted, so rays could not
    /// be mapped into the object's local space.
    NonInvertibleTransform { line: usize },
    /// The file never declared a camera; the scene cannot be traced.
    MissingCamera,
}

impl Display for SceneParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingValue { line, command } => {
                write!(f, "line {line}: not enough values for `{command}`")
            }
            Self::InvalidNumber { line, value } => {
                write!(f, "line {line}: `{value}` is not a valid number")
            }
            Self::InvalidSize { line } => {
                write!(f, "line {line}: image dimensions must be positive")
            }
            Self::VertexOutOfRange { line, index } => {
                write!(f, "line {line}: vertex index {index} is out of range")
            }
            Self::EmptyTransformStack { line } => {
                write!(f, "line {line}: popTransform on an empty stack")
            }
            Self::NonInvertibleTransform { line } => {
                write!(f, "line {line}: object transform is not invertible")
            }
            Self::MissingCamera => write!(f, "scene file declares no camera"),
        }
    }
}

type ParseResult<T> = Result<T, SceneParseError>;

fn next_value(
    iter: &mut std::str::SplitWhitespace,
    line: usize,
    command: &str,
) -> ParseResult<f64> {
    let value = iter.next().ok_or_else(|| SceneParseError::MissingValue {
        line,
        command: command.to_string(),
    })?;
    value.parse().map_err(|_| SceneParseError::InvalidNumber {
        line,
        value: value.to_string(),
    })
}

fn next_index(
    iter: &mut std::str::SplitWhitespace,
    line: usize,
    command: &str,
) -> ParseResult<usize> {
    let value = iter.next().ok_or_else(|| SceneParseError::MissingValue {
        line,
        command: command.to_string(),
    })?;
    value.parse().map_err(|_| SceneParseError::InvalidNumber {
        line,
        value: value.to_string(),
    })
}

fn values<const N: usize>(
    iter: &mut std::str::SplitWhitespace,
    line: usize,
    command: &str,
) -> ParseResult<[f64; N]> {
    let mut out = [0.; N];
    for value in &mut out {
        *value = next_value(iter, line, command)?;
    }
    Ok(out)
}

/// Parser output: the scene plus render settings the file may override.
pub struct ParsedScene {
    pub scene: Scene,
    pub max_depth: Option<usize>,
}

struct CameraConfig {
    eye: Point,
    center: Point,
    up: Vector,
    fov_y: f64,
}

pub struct SceneParser {
    vertices: Vec<Point>,
    material: Material,
    attenuation: Attenuation,
    transform_stack: Vec<Matrix4>,

    objects: Vec<Object>,
    lights: Vec<Light>,
    camera: Option<CameraConfig>,
    size: Option<(usize, usize)>,
    max_depth: Option<usize>,
    ignored: usize,
}

impl SceneParser {
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            material: Material::default(),
            attenuation: Attenuation::default(),
            transform_stack: vec![Matrix4::identity()],
            objects: Vec::new(),
            lights: Vec::new(),
            camera: None,
            size: None,
            max_depth: None,
            ignored: 0,
        }
    }

    /// Number of unrecognized commands that were skipped.
    pub fn ignored(&self) -> usize {
        self.ignored
    }

    pub fn parse_str(
        source: &str,
        default_width: usize,
        default_height: usize,
    ) -> ParseResult<ParsedScene> {
        let mut parser = Self::new();
        for (id, line) in source.lines().enumerate() {
            parser.parse_line(line.trim(), id + 1)?;
        }
        parser.finish(default_width, default_height)
    }

    fn finish(self, default_width: usize, default_height: usize) -> ParseResult<ParsedScene> {
        let config = self.camera.ok_or(SceneParseError::MissingCamera)?;
        let (width, height) = self.size.unwrap_or((default_width, default_height));

        let camera = Camera::new(
            config.eye,
            config.center,
            config.up,
            config.fov_y,
            width,
            height,
        );
        Ok(ParsedScene {
            scene: Scene::with_objects_lights(camera, self.objects, self.lights),
            max_depth: self.max_depth,
        })
    }

    fn current_transform(&self) -> Matrix4 {
        self.transform_stack
            .last()
            .copied()
            .unwrap_or_else(Matrix4::identity)
    }

    fn right_multiply(&mut self, matrix: Matrix4) {
        if let Some(top) = self.transform_stack.last_mut() {
            *top = *top * matrix;
        }
    }

    fn add_object(&mut self, shape: Shape, line: usize) -> ParseResult<()> {
        let object = Object::new(shape, self.material, self.current_transform())
            .ok_or(SceneParseError::NonInvertibleTransform { line })?;
        self.objects.push(object);
        Ok(())
    }

    fn parse_line(&mut self, line: &str, line_no: usize) -> ParseResult<()> {
        if line.is_empty() || line.starts_with('#') {
            return Ok(());
        }

        let mut iter = line.split_whitespace();
        let Some(command) = iter.next() else {
            return Ok(());
        };

        match command {
            "size" => {
                let v: [f64; 2] = values(&mut iter, line_no, command)?;
                if v[0] < 1. || v[1] < 1. {
                    return Err(SceneParseError::InvalidSize { line: line_no });
                }
                self.size = Some((v[0] as usize, v[1] as usize));
            }
            "camera" => {
                let v: [f64; 10] = values(&mut iter, line_no, command)?;
                self.camera = Some(CameraConfig {
                    eye: Point::new(v[0], v[1], v[2]),
                    center: Point::new(v[3], v[4], v[5]),
                    up: Vector::new(v[6], v[7], v[8]),
                    fov_y: v[9].to_radians(),
                });
            }
            "maxdepth" => {
                self.max_depth = Some(next_value(&mut iter, line_no, command)? as usize);
            }

            "ambient" => {
                let v: [f64; 3] = values(&mut iter, line_no, command)?;
                self.material.ambient = Color::new(v[0], v[1], v[2]);
            }
            "diffuse" => {
                let v: [f64; 3] = values(&mut iter, line_no, command)?;
                self.material.diffuse = Color::new(v[0], v[1], v[2]);
            }
            "specular" => {
                let v: [f64; 3] = values(&mut iter, line_no, command)?;
                self.material.specular = Color::new(v[0], v[1], v[2]);
            }
            "emission" => {
                let v: [f64; 3] = values(&mut iter, line_no, command)?;
                self.material.emission = Color::new(v[0], v[1], v[2]);
            }
            "shininess" => {
                self.material.shininess = next_value(&mut iter, line_no, command)?;
            }

            "point" => {
                let v: [f64; 6] = values(&mut iter, line_no, command)?;
                self.lights.push(Light::Point {
                    position: Point::new(v[0], v[1], v[2]),
                    color: Color::new(v[3], v[4], v[5]),
                    attenuation: self.attenuation,
                });
            }
            "directional" => {
                let v: [f64; 6] = values(&mut iter, line_no, command)?;
                self.lights.push(Light::directional(
                    Vector::new(v[0], v[1], v[2]),
                    Color::new(v[3], v[4], v[5]),
                ));
            }
            "attenuation" => {
                let v: [f64; 3] = values(&mut iter, line_no, command)?;
                self.attenuation = Attenuation::new(v[0], v[1], v[2]);
            }

            "maxverts" | "maxvertnorms" => {
                // vertex pools grow dynamically, the hints are not needed
            }
            "vertex" => {
                let v: [f64; 3] = values(&mut iter, line_no, command)?;
                self.vertices.push(Point::new(v[0], v[1], v[2]));
            }
            "tri" => {
                // vertex indices are integers; negative or fractional
                // values are malformed, not index 0
                let mut vertex = || -> ParseResult<Point> {
                    let index = next_index(&mut iter, line_no, command)?;
                    self.vertices
                        .get(index)
                        .copied()
                        .ok_or(SceneParseError::VertexOutOfRange {
                            line: line_no,
                            index,
                        })
                };
                let triangle = Triangle::new(vertex()?, vertex()?, vertex()?);
                self.add_object(Shape::Triangle(triangle), line_no)?;
            }
            "sphere" => {
                let v: [f64; 4] = values(&mut iter, line_no, command)?;
                let sphere = Sphere::new(Point::new(v[0], v[1], v[2]), v[3]);
                self.add_object(Shape::Sphere(sphere), line_no)?;
            }

            "translate" => {
                let v: [f64; 3] = values(&mut iter, line_no, command)?;
                self.right_multiply(translation_matrix(v[0], v[1], v[2]));
            }
            "scale" => {
                let v: [f64; 3] = values(&mut iter, line_no, command)?;
                self.right_multiply(scaling_matrix(v[0], v[1], v[2]));
            }
            "rotate" => {
                let v: [f64; 4] = values(&mut iter, line_no, command)?;
                self.right_multiply(rotation_matrix(
                    Vector::new(v[0], v[1], v[2]),
                    v[3].to_radians(),
                ));
            }
            "pushTransform" => {
                self.transform_stack.push(self.current_transform());
            }
            "popTransform" => {
                if self.transform_stack.len() <= 1 {
                    return Err(SceneParseError::EmptyTransformStack { line: line_no });
                }
                self.transform_stack.pop();
            }

            unknown => {
                eprintln!("line {line_no}: unknown command `{unknown}`, skipping");
                self.ignored += 1;
            }
        }
        Ok(())
    }
}

impl Default for SceneParser {
    fn default() -> Self {
        Self::new()
    }
}
