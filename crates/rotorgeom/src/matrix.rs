//! Homogeneous 4x4 transform matrices
//!
//! Matrices are stored row-major and indexed `m[row][col]`.
//! An affine transform keeps its rotation and scale in the upper-left 3x3 block,
//! its translation in the last column of the first three rows,
//! and `[0, 0, 0, 1]` in its last row.
//!
//! Products read right-to-left: in `a * b`, `b` is applied to a column vector first.
//! Composing a parent transform with a child's local transform therefore
//! appends the child on the right, `parent * local`.

use core::iter::Product;
use core::ops::{Index, IndexMut, Mul};

use crate::re3::Vector;
use crate::scalar::*;

#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct Matrix<T>(pub [[T; 4]; 4]);

impl<T: Ring> Matrix<T> {
    /// The multiplicative identity, equal to a translation by zero
    pub fn identity() -> Matrix<T> {
        let o = T::zero();
        Matrix::translation(o, o, o)
    }

    /// Translation by `(dx, dy, dz)`
    pub fn translation(dx: T, dy: T, dz: T) -> Matrix<T> {
        let (o, l) = (T::zero(), T::one());
        Matrix([
            [l, o, o, dx],
            [o, l, o, dy],
            [o, o, l, dz],
            [o, o, o, l],
        ])
    }

    /// Non-uniform scale along the three axes
    pub fn scale(x: T, y: T, z: T) -> Matrix<T> {
        let (o, l) = (T::zero(), T::one());
        Matrix([
            [x, o, o, o],
            [o, y, o, o],
            [o, o, z, o],
            [o, o, o, l],
        ])
    }

    /// Translation by the given vector
    pub fn translation_by(v: Vector<T>) -> Matrix<T> {
        Matrix::translation(v.x, v.y, v.z)
    }

    /// Scale by the components of the given vector
    pub fn scale_by(v: Vector<T>) -> Matrix<T> {
        Matrix::scale(v.x, v.y, v.z)
    }

    /// Fold a sequence of matrices into one, starting from the identity
    ///
    /// The result is `((I * m0) * m1) * m2 …`, so the last matrix
    /// is the first one applied to a vector.
    /// An empty sequence yields the identity.
    pub fn product_of<I: IntoIterator<Item = Matrix<T>>>(matrices: I) -> Matrix<T> {
        matrices
            .into_iter()
            .fold(Matrix::identity(), |acc, next| acc * next)
    }

    /// Apply the upper-left 3x3 block to a direction
    ///
    /// Translation and the homogeneous row are ignored (the vector is taken to have w = 0),
    /// so this must not be used to move positions.
    pub fn mul_direction(&self, v: Vector<T>) -> Vector<T> {
        let m = &self.0;
        Vector {
            x: m[0][0] * v.x + m[0][1] * v.y + m[0][2] * v.z,
            y: m[1][0] * v.x + m[1][1] * v.y + m[1][2] * v.z,
            z: m[2][0] * v.x + m[2][1] * v.y + m[2][2] * v.z,
        }
    }

    /// Apply the full matrix to a homogeneous column vector `[x, y, z, w]`
    pub fn mul_homogeneous(&self, p: [T; 4]) -> [T; 4] {
        core::array::from_fn(|row| {
            (0..4).fold(T::zero(), |sum, i| sum + self.0[row][i] * p[i])
        })
    }

    /// Apply the full matrix to a point (w = 1) and drop the resulting w
    pub fn mul_point(&self, p: Vector<T>) -> Vector<T> {
        let [x, y, z, _] = self.mul_homogeneous([p.x, p.y, p.z, T::one()]);
        Vector { x, y, z }
    }

    /// Flatten column by column, `flat[i] = m[i % 4][i / 4]`
    ///
    /// This is the layout expected by a non-transposed `mat4` shader uniform.
    pub fn to_column_major(&self) -> [T; 16] {
        core::array::from_fn(|i| self.0[i % 4][i / 4])
    }
}

impl<T: Ring> Mul for Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, r: Matrix<T>) -> Matrix<T> {
        Matrix(core::array::from_fn(|row| {
            core::array::from_fn(|col| {
                (0..4).fold(T::zero(), |sum, i| sum + self.0[row][i] * r.0[i][col])
            })
        }))
    }
}

impl<T: Ring> Product for Matrix<T> {
    fn product<I: Iterator<Item = Matrix<T>>>(iter: I) -> Matrix<T> {
        Matrix::product_of(iter)
    }
}

impl<T> Index<usize> for Matrix<T> {
    type Output = [T; 4];
    fn index(&self, row: usize) -> &[T; 4] {
        &self.0[row]
    }
}

impl<T> IndexMut<usize> for Matrix<T> {
    fn index_mut(&mut self, row: usize) -> &mut [T; 4] {
        &mut self.0[row]
    }
}
