use std::ops;

use super::tuple::Tuple;
use crate::approx_eq::ApproxEq;

/// Row-major 4x4 affine matrix.
#[derive(Copy, Clone, Debug)]
pub struct Matrix4 {
    data: [f64; 16],
}

impl Matrix4 {
    pub fn new(data: [f64; 16]) -> Self {
        Self { data }
    }

    #[rustfmt::skip]
    pub fn identity() -> Self {
        Self::new([
            1., 0., 0., 0.,
            0., 1., 0., 0.,
            0., 0., 1., 0.,
            0., 0., 0., 1.,
        ])
    }

    pub fn transpose(&self) -> Self {
        let mut res = *self;

        res.data.swap(1, 4);
        res.data.swap(2, 8);
        res.data.swap(3, 12);
        res.data.swap(6, 9);
        res.data.swap(7, 13);
        res.data.swap(11, 14);

        res
    }

    /// Gauss-Jordan elimination with partial pivoting.
    /// Returns `None` for singular matrices.
    pub fn inverse(&self) -> Option<Matrix4> {
        let mut work = *self;
        let mut res = Matrix4::identity();

        for col in 0..4 {
            let pivot_row = (col..4)
                .max_by(|&a, &b| {
                    work[(a, col)]
                        .abs()
                        .partial_cmp(&work[(b, col)].abs())
                        .unwrap_or(std::cmp::Ordering::Equal)
                })
                .unwrap_or(col);
            if work[(pivot_row, col)] == 0. {
                return None;
            }
            if pivot_row != col {
                work.swap_rows(pivot_row, col);
                res.swap_rows(pivot_row, col);
            }

            let pivot = work[(col, col)];
            for c in 0..4 {
                work[(col, c)] /= pivot;
                res[(col, c)] /= pivot;
            }

            for row in 0..4 {
                if row == col {
                    continue;
                }
                let factor = work[(row, col)];
                for c in 0..4 {
                    work[(row, c)] -= factor * work[(col, c)];
                    res[(row, c)] -= factor * res[(col, c)];
                }
            }
        }
        Some(res)
    }

    fn swap_rows(&mut self, a: usize, b: usize) {
        for col in 0..4 {
            self.data.swap(a * 4 + col, b * 4 + col);
        }
    }
}

impl PartialEq for Matrix4 {
    fn eq(&self, other: &Matrix4) -> bool {
        self.data
            .iter()
            .zip(other.data.iter())
            .all(|(a, b)| a.approx_eq(b))
    }
}

impl ops::Index<(usize, usize)> for Matrix4 {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        debug_assert!(row < 4 && col < 4);
        &self.data[row * 4 + col]
    }
}

impl ops::IndexMut<(usize, usize)> for Matrix4 {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        debug_assert!(row < 4 && col < 4);
        &mut self.data[row * 4 + col]
    }
}

impl ops::Mul for Matrix4 {
    type Output = Self;

    fn mul(self, rhs: Matrix4) -> Self::Output {
        let mut out = Matrix4::new([0.; 16]);
        for row in 0..4 {
            for col in 0..4 {
                out[(row, col)] = (0..4).map(|k| self[(row, k)] * rhs[(k, col)]).sum();
            }
        }
        out
    }
}

impl<T> ops::Mul<T> for Matrix4
where
    T: Tuple,
{
    type Output = T;

    fn mul(self, rhs: T) -> Self::Output {
        T::new(
            self[(0, 0)] * rhs.x() + self[(0, 1)] * rhs.y() + self[(0, 2)] * rhs.z() + self[(0, 3)] * rhs.w(),
            self[(1, 0)] * rhs.x() + self[(1, 1)] * rhs.y() + self[(1, 2)] * rhs.z() + self[(1, 3)] * rhs.w(),
            self[(2, 0)] * rhs.x() + self[(2, 1)] * rhs.y() + self[(2, 2)] * rhs.z() + self[(2, 3)] * rhs.w(),
        )
    }
}
