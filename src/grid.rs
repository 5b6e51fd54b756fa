use std::fmt::Display;
use std::ops::Index;
use std::slice::ChunksExact;

use join_string::Join;

use crate::{cmp_number_ref, Number};

/// Dense two-dimensional array of numbers in row-major order.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    data: Vec<Number>,
}

impl Grid {
    /// `data.len()` must equal `rows * cols`.
    #[inline]
    pub(crate) fn from_parts(rows: usize, cols: usize, data: Vec<Number>) -> Self {
        debug_assert_eq!(data.len(), rows * cols);
        Self { rows, cols, data }
    }

    /// Builds a grid by calling `f(row, col)` for every cell, row by row.
    pub(crate) fn from_fn(rows: usize, cols: usize, mut f: impl FnMut(usize, usize) -> Number) -> Self {
        let mut data = Vec::with_capacity(rows * cols);
        for row in 0..rows {
            for col in 0..cols {
                data.push(f(row, col));
            }
        }

        Self::from_parts(rows, cols, data)
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[Number] {
        &self.data
    }

    #[inline]
    pub fn into_vec(self) -> Vec<Number> {
        self.data
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<Number> {
        if row < self.rows && col < self.cols {
            Some(self.data[row * self.cols + col])
        } else {
            None
        }
    }

    #[inline]
    pub fn row(&self, row: usize) -> Option<&[Number]> {
        if row < self.rows {
            let start = row * self.cols;
            Some(&self.data[start..start + self.cols])
        } else {
            None
        }
    }

    #[inline]
    pub fn iter_rows(&self) -> ChunksExact<'_, Number> {
        // chunks_exact panics on 0
        self.data.chunks_exact(self.cols.max(1))
    }

    pub fn column(&self, col: usize) -> impl Iterator<Item = Number> + '_ {
        let cols = self.cols;
        let rows = if col < cols { self.rows } else { 0 };
        (0..rows).map(move |row| self.data[row * cols + col])
    }

    #[inline]
    pub fn min(&self) -> Option<Number> {
        self.data.iter().cloned().min_by(cmp_number_ref)
    }

    #[inline]
    pub fn max(&self) -> Option<Number> {
        self.data.iter().cloned().max_by(cmp_number_ref)
    }

    /// One `Vec` per row, the shape plotting code usually expects.
    pub fn to_nested(&self) -> Vec<Vec<Number>> {
        self.iter_rows().map(Vec::from).collect()
    }
}

impl Index<(usize, usize)> for Grid {
    type Output = Number;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        assert!(row < self.rows && col < self.cols, "grid index ({row}, {col}) out of bounds for shape ({}, {})", self.rows, self.cols);
        &self.data[row * self.cols + col]
    }
}

impl Display for Grid {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.iter_rows().map(|row| format!("[{}]", row.iter().join(", "))).join(", "))
    }
}

impl From<Grid> for Vec<Vec<Number>> {
    #[inline]
    fn from(grid: Grid) -> Self {
        grid.to_nested()
    }
}
