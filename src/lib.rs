pub mod approx_eq;

pub mod primitive {
    pub mod matrix4;
    pub mod point;
    pub mod tuple;
    pub mod vector;
}

pub mod transformation;

pub mod render {
    pub mod camera;
    pub mod canvas;
    pub mod color;
    pub mod light;
    pub mod material;
    pub mod object;
    pub mod ray;
    pub mod raytracer;
    pub mod scene;
}

pub mod scene_file;
