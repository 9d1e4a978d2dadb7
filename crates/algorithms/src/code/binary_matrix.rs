//! Dense binary matrices over GF(2)
//!
//! Rows are [`BitString`]s, so vector-matrix products read the same way as
//! the code-based formulas `c = m * G + e`.

use cwcrypt_api::BitString;
use rand::{CryptoRng, Rng, RngCore};
use zeroize::Zeroize;

use crate::error::{validate, Error, Result};

/// Row-major binary matrix
#[derive(Clone, Debug, PartialEq, Eq, Zeroize)]
pub struct BinaryMatrix {
    rows: Vec<BitString>,
    cols: usize,
}

impl BinaryMatrix {
    /// All-zero matrix
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows: vec![BitString::zeros(cols); rows],
            cols,
        }
    }

    /// Identity matrix
    pub fn identity(size: usize) -> Self {
        let mut m = Self::zeros(size, size);
        for i in 0..size {
            m.rows[i] = (0..size).map(|j| (i == j) as u8).collect();
        }
        m
    }

    /// Matrix with independent uniform entries
    pub fn random<R: RngCore + CryptoRng>(rows: usize, cols: usize, rng: &mut R) -> Self {
        Self {
            rows: (0..rows)
                .map(|_| (0..cols).map(|_| rng.gen::<u8>()).collect())
                .collect(),
            cols,
        }
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Row `index`
    pub fn row(&self, index: usize) -> Option<&BitString> {
        self.rows.get(index)
    }

    /// Entry at `(row, col)`, zero outside the matrix
    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.rows.get(row).map_or(0, |r| r.bit_or_zero(col))
    }

    /// Set the entry at `(row, col)`
    pub fn set(&mut self, row: usize, col: usize, bit: u8) -> Result<()> {
        let rows = self.rows.len();
        let target = self.rows.get_mut(row).ok_or(Error::Shape {
            context: "BinaryMatrix::set row",
            expected: rows,
            actual: row,
        })?;
        Ok(target.set(col, bit)?)
    }

    /// Row vector times matrix, `v * M`.
    ///
    /// Every row is visited whatever the bits of `v`.
    pub fn vec_mul(&self, v: &BitString) -> Result<BitString> {
        validate::length("vector-matrix product", v.len(), self.rows())?;

        let mut out = BitString::zeros(self.cols);
        for (bit, row) in v.iter().zip(&self.rows) {
            let masked: BitString = row.iter().map(|b| b & bit).collect();
            out.xor_assign(&masked)?;
        }
        Ok(out)
    }

    /// Matrix product `self * other`
    pub fn mul(&self, other: &BinaryMatrix) -> Result<BinaryMatrix> {
        validate::length("matrix product", other.rows(), self.cols)?;
        Ok(Self {
            rows: self
                .rows
                .iter()
                .map(|row| other.vec_mul(row))
                .collect::<Result<_>>()?,
            cols: other.cols,
        })
    }

    /// Move column `j` to column `perm[j]`
    pub fn permute_columns(&self, perm: &[usize]) -> Result<BinaryMatrix> {
        validate::length("column permutation", perm.len(), self.cols)?;

        let mut out = Self::zeros(self.rows(), self.cols);
        for (i, row) in self.rows.iter().enumerate() {
            for (j, &target) in perm.iter().enumerate() {
                out.rows[i].set(target, row.bit_or_zero(j))?;
            }
        }
        Ok(out)
    }

    /// Inverse by Gauss-Jordan elimination, `None` for a singular matrix
    pub fn inverse(&self) -> Option<BinaryMatrix> {
        let size = self.rows();
        if size != self.cols {
            return None;
        }

        let mut work = self.rows.clone();
        let mut inv = Self::identity(size).rows;

        for col in 0..size {
            let pivot = (col..size).find(|&r| work[r].bit_or_zero(col) == 1)?;
            work.swap(col, pivot);
            inv.swap(col, pivot);

            for r in 0..size {
                if r != col && work[r].bit_or_zero(col) == 1 {
                    let (pivot_work, pivot_inv) = (work[col].clone(), inv[col].clone());
                    work[r].xor_assign(&pivot_work).ok()?;
                    inv[r].xor_assign(&pivot_inv).ok()?;
                }
            }
        }

        work.zeroize();
        Some(Self {
            rows: inv,
            cols: size,
        })
    }
}
