/// Common interface for points (w = 1) and vectors (w = 0),
/// so both can be multiplied by a 4x4 matrix.
pub trait Tuple {
    fn new(x: f64, y: f64, z: f64) -> Self;

    fn x(&self) -> f64;
    fn y(&self) -> f64;
    fn z(&self) -> f64;
    fn w(&self) -> f64;
}
