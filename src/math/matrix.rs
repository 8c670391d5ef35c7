use std::ops::{Index, Mul};

use super::{approx_eq, Tuple, SINGULAR_DETERMINANT};

/// A 2x2 matrix; the base case of cofactor expansion.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Matrix2 {
    rows: [[f64; 2]; 2],
}

impl Matrix2 {
    pub fn new(rows: [[f64; 2]; 2]) -> Self {
        Self { rows }
    }

    pub fn determinant(&self) -> f64 {
        let m = &self.rows;
        m[0][0] * m[1][1] - m[0][1] * m[1][0]
    }
}

/// A 3x3 matrix, only ever produced as a submatrix of a [`Matrix4`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Matrix3 {
    rows: [[f64; 3]; 3],
}

impl Matrix3 {
    pub fn new(rows: [[f64; 3]; 3]) -> Self {
        Self { rows }
    }

    /// Drop one row and one column.
    pub fn submatrix(&self, row: usize, col: usize) -> Matrix2 {
        let mut out = [[0.; 2]; 2];
        for (i, r) in (0..3).filter(|&r| r != row).enumerate() {
            for (j, c) in (0..3).filter(|&c| c != col).enumerate() {
                out[i][j] = self.rows[r][c];
            }
        }
        Matrix2::new(out)
    }

    pub fn minor(&self, row: usize, col: usize) -> f64 {
        self.submatrix(row, col).determinant()
    }

    pub fn cofactor(&self, row: usize, col: usize) -> f64 {
        let minor = self.minor(row, col);
        if (row + col) % 2 == 0 {
            minor
        } else {
            -minor
        }
    }

    /// Laplace expansion along row 0.
    pub fn determinant(&self) -> f64 {
        (0..3).map(|c| self.rows[0][c] * self.cofactor(0, c)).sum()
    }
}

/// A row-major 4x4 transformation matrix.
#[derive(Clone, Copy, Debug)]
pub struct Matrix4 {
    rows: [[f64; 4]; 4],
}

impl Matrix4 {
    #[rustfmt::skip]
    pub const IDENTITY: Matrix4 = Matrix4 {
        rows: [
            [1., 0., 0., 0.],
            [0., 1., 0., 0.],
            [0., 0., 1., 0.],
            [0., 0., 0., 1.],
        ],
    };

    pub fn new(rows: [[f64; 4]; 4]) -> Self {
        Self { rows }
    }

    pub fn identity() -> Self {
        Self::IDENTITY
    }

    pub fn transpose(&self) -> Self {
        let mut out = [[0.; 4]; 4];
        for (r, row) in self.rows.iter().enumerate() {
            for (c, value) in row.iter().enumerate() {
                out[c][r] = *value;
            }
        }
        Self::new(out)
    }

    /// Drop one row and one column.
    pub fn submatrix(&self, row: usize, col: usize) -> Matrix3 {
        let mut out = [[0.; 3]; 3];
        for (i, r) in (0..4).filter(|&r| r != row).enumerate() {
            for (j, c) in (0..4).filter(|&c| c != col).enumerate() {
                out[i][j] = self.rows[r][c];
            }
        }
        Matrix3::new(out)
    }

    pub fn minor(&self, row: usize, col: usize) -> f64 {
        self.submatrix(row, col).determinant()
    }

    pub fn cofactor(&self, row: usize, col: usize) -> f64 {
        let minor = self.minor(row, col);
        if (row + col) % 2 == 0 {
            minor
        } else {
            -minor
        }
    }

    /// Laplace expansion along row 0.
    pub fn determinant(&self) -> f64 {
        (0..4).map(|c| self.rows[0][c] * self.cofactor(0, c)).sum()
    }

    pub fn is_invertible(&self) -> bool {
        self.determinant().abs() > SINGULAR_DETERMINANT
    }

    /// The transposed cofactor matrix divided by the determinant, or `None`
    /// when the matrix is singular (see [`SINGULAR_DETERMINANT`]).
    pub fn inverse(&self) -> Option<Self> {
        let det = self.determinant();
        if det.abs() <= SINGULAR_DETERMINANT {
            return None;
        }

        let mut out = [[0.; 4]; 4];
        for (r, row) in out.iter_mut().enumerate() {
            for (c, value) in row.iter_mut().enumerate() {
                // swapped indices transpose the cofactor matrix in place
                *value = self.cofactor(c, r) / det;
            }
        }
        Some(Self::new(out))
    }
}

impl Default for Matrix4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl PartialEq for Matrix4 {
    fn eq(&self, other: &Self) -> bool {
        self.rows
            .iter()
            .flatten()
            .zip(other.rows.iter().flatten())
            .all(|(a, b)| approx_eq(*a, *b))
    }
}

impl Index<(usize, usize)> for Matrix4 {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.rows[row][col]
    }
}

impl Mul for Matrix4 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        let a = self.rows;
        let b = rhs.rows;
        let mut o = [[0.; 4]; 4];

        for i in 0..4 {
            for j in 0..4 {
                for k in 0..4 {
                    o[i][j] += a[i][k] * b[k][j];
                }
            }
        }

        Self::new(o)
    }
}

impl Mul<Tuple> for Matrix4 {
    type Output = Tuple;

    fn mul(self, rhs: Tuple) -> Self::Output {
        let row = |r: [f64; 4]| r[0] * rhs.x + r[1] * rhs.y + r[2] * rhs.z + r[3] * rhs.w;
        Tuple::new(
            row(self.rows[0]),
            row(self.rows[1]),
            row(self.rows[2]),
            row(self.rows[3]),
        )
    }
}
