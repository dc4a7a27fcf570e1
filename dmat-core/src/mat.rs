use std::fmt::{Debug, Display};
use std::ops::Index;
use delegate::delegate;
use itertools::iproduct;
use log::trace;
use nalgebra::DMatrix;
use crate::MatType;
use crate::err::{MatError, MatResult, ensure, malformed};

/// An immutable dense matrix of `f64` entries.
///
/// Shapes are always at least `1 x 1`, and every operation returns
/// a freshly allocated matrix.
#[derive(Clone, PartialEq)]
pub struct Mat {
    inner: DMatrix<f64>
}

impl MatType for Mat {
    fn shape(&self) -> (usize, usize) {
        (self.inner.nrows(), self.inner.ncols())
    }
}

impl Mat {
    /// Copies the given rows into a new matrix.
    ///
    /// Fails with `MalformedShape` if there are no rows,
    /// the first row is empty, or the rows are ragged.
    pub fn new<R>(rows: &[R]) -> MatResult<Self>
    where R: AsRef<[f64]> {
        let Some(first) = rows.first() else {
            return malformed!("no rows")
        };

        let m = rows.len();
        let n = first.as_ref().len();
        ensure!(n > 0, "empty first row");

        let lens = rows.iter().map(|r| r.as_ref().len());
        if let Some((i, l)) = lens.enumerate().find(|&(_, l)| l != n) {
            return malformed!("row {i} has length {l}, expected {n}")
        }

        let data = rows.iter().flat_map(|r| r.as_ref().iter().cloned());
        let inner = DMatrix::from_row_iterator(m, n, data);
        Ok(Self::from_inner(inner))
    }

    /// Builds a matrix from row-major `data`.
    pub fn from_data<I>(shape: (usize, usize), data: I) -> MatResult<Self>
    where I: IntoIterator<Item = f64> {
        let (m, n) = shape;
        ensure!(m > 0 && n > 0, "zero-sized shape {shape:?}");

        let Some(len) = m.checked_mul(n) else {
            return malformed!("shape {shape:?} is too large")
        };

        let data: Vec<_> = data.into_iter().collect();
        ensure!(data.len() == len, "{} entries for shape {shape:?}", data.len());

        let inner = DMatrix::from_row_slice(m, n, &data);
        Ok(Self::from_inner(inner))
    }

    // scratch storage for results, never exposed before it is filled.
    fn zero(shape: (usize, usize)) -> Self {
        Self::from_inner(DMatrix::zeros(shape.0, shape.1))
    }

    fn from_inner(inner: DMatrix<f64>) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &DMatrix<f64> {
        &self.inner
    }

    pub fn into_inner(self) -> DMatrix<f64> {
        self.inner
    }

    /// Returns the entry at `(row, col)`,
    /// or `IndexOutOfBounds` if either coordinate is out of range.
    pub fn get(&self, row: usize, col: usize) -> MatResult<f64> {
        if self.contains((row, col)) {
            Ok(self.inner[(row, col)])
        } else {
            Err(MatError::IndexOutOfBounds { index: (row, col), shape: self.shape() })
        }
    }

    pub fn row_vec(&self, i: usize) -> Vec<f64> {
        self.inner.row(i).iter().cloned().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        let (m, n) = self.shape();
        iproduct!(0..m, 0..n).map(move |(i, j)|
            (i, j, self.inner[(i, j)])
        )
    }

    /// Matrix product `self * other`.
    ///
    /// Each entry is accumulated left to right as a plain `f64` sum.
    pub fn mul(&self, other: &Mat) -> MatResult<Mat> {
        trace!("mul: {:?} x {:?}", self.shape(), other.shape());

        if self.cols() != other.rows() {
            return Err(MatError::DimensionMismatch {
                op: "mul",
                lhs: self.shape(),
                rhs: other.shape()
            })
        }

        let (m, l, n) = (self.rows(), self.cols(), other.cols());
        let (a, b) = (&self.inner, &other.inner);

        let inner = DMatrix::from_fn(m, n, |i, j|
            (0..l).fold(0.0, |acc, k| acc + a[(i, k)] * b[(k, j)])
        );

        Ok(Self::from_inner(inner))
    }

    /// Entry-wise sum of two matrices of the same shape.
    pub fn add(&self, other: &Mat) -> MatResult<Mat> {
        trace!("add: {:?} + {:?}", self.shape(), other.shape());

        if !self.has_shape_of(other) {
            return Err(MatError::DimensionMismatch {
                op: "add",
                lhs: self.shape(),
                rhs: other.shape()
            })
        }

        let (m, n) = self.shape();
        let mut res = Self::zero((m, n));

        for (j, i) in iproduct!(0..n, 0..m) {
            res.inner[(i, j)] = self.inner[(i, j)] + other.inner[(i, j)];
        }

        Ok(res)
    }

    pub fn transpose(&self) -> Mat {
        trace!("transpose: {:?}", self.shape());
        Self::from_inner(self.inner.transpose())
    }
}

impl TryFrom<DMatrix<f64>> for Mat {
    type Error = MatError;

    fn try_from(inner: DMatrix<f64>) -> MatResult<Self> {
        let shape = inner.shape();
        ensure!(shape.0 > 0 && shape.1 > 0, "zero-sized shape {shape:?}");
        Ok(Self::from_inner(inner))
    }
}

impl From<Mat> for DMatrix<f64> {
    fn from(value: Mat) -> Self {
        value.into_inner()
    }
}

impl Index<(usize, usize)> for Mat {
    type Output = f64;
    delegate! {
        to self.inner {
            fn index(&self, index: (usize, usize)) -> &f64;
        }
    }
}

impl Display for Mat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rows = (0..self.rows()).map(|i| self.row_vec(i));
        f.write_str(&dmat::util::format::nested(rows))
    }
}

impl Debug for Mat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}
