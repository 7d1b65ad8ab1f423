//! Row-windowed dense matrix.

use std::ops::Range;

use crate::{Element, Error};

/// A dense matrix that materializes only a contiguous range of its rows.
///
/// The matrix has the shape `total_rows × cols`, but storage exists only for
/// the rows in `window`. Accessors take absolute row numbers in the full
/// matrix's index space; touching a row outside the window is an
/// [`Error::OutOfBounds`].
///
/// # Example
///
/// ```
/// use matrix_chunk::Matrix;
///
/// let mut m = Matrix::<f64>::allocate(10, 3, 4..6)?;
/// m.set(5, 2, 1.5)?;
/// assert_eq!(m.get(5, 2)?, 1.5);
/// assert!(m.get(3, 0).is_err());
/// # Ok::<(), matrix_chunk::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T> {
    total_rows: usize,
    cols: usize,
    window: Range<usize>,
    data: Vec<T>,
}

impl<T: Element> Matrix<T> {
    /// Allocates zeroed storage for rows `window` of a `total_rows × cols` matrix.
    pub fn allocate(total_rows: usize, cols: usize, window: Range<usize>) -> Result<Self, Error> {
        Self::check_window(total_rows, &window)?;
        let len = Self::storage_len(cols, &window)?;
        let mut data = Vec::new();
        data.try_reserve_exact(len).map_err(|_| Error::OutOfMemory {
            rows: window.len(),
            cols,
        })?;
        data.resize(len, T::zero());

        tracing::debug!(
            total_rows,
            cols,
            start = window.start,
            end = window.end,
            "allocated window"
        );
        Ok(Self {
            total_rows,
            cols,
            window,
            data,
        })
    }

    /// Builds a window from values pulled one at a time, row-major.
    ///
    /// Storage grows as values arrive, so a header that promises more data
    /// than the source holds never commits the full window up front. Errors
    /// from `next` are passed through.
    pub(crate) fn try_collect<F>(
        total_rows: usize,
        cols: usize,
        window: Range<usize>,
        mut next: F,
    ) -> Result<Self, Error>
    where
        F: FnMut() -> Result<T, Error>,
    {
        Self::check_window(total_rows, &window)?;
        let len = Self::storage_len(cols, &window)?;
        let mut data = Vec::new();
        while data.len() < len {
            let value = next()?;
            if data.len() == data.capacity() {
                data.try_reserve(1).map_err(|_| Error::OutOfMemory {
                    rows: window.len(),
                    cols,
                })?;
            }
            data.push(value);
        }

        Ok(Self {
            total_rows,
            cols,
            window,
            data,
        })
    }

    fn check_window(total_rows: usize, window: &Range<usize>) -> Result<(), Error> {
        if window.start > window.end || window.end > total_rows {
            return Err(Error::InvalidWindow {
                start: window.start,
                end: window.end,
                rows: total_rows,
            });
        }
        Ok(())
    }

    fn storage_len(cols: usize, window: &Range<usize>) -> Result<usize, Error> {
        let rows = window.len();
        rows.checked_mul(cols).ok_or(Error::OutOfMemory { rows, cols })
    }

    /// Builds a fully materialized matrix from a list of rows.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, Error> {
        let total_rows = rows.len();
        let cols = rows.first().map_or(0, |row| row.len());

        let mut matrix = Self::allocate(total_rows, cols, 0..total_rows)?;
        for (r, row) in rows.into_iter().enumerate() {
            if row.len() != cols {
                return Err(Error::RaggedRow {
                    row: r,
                    expected: cols,
                    found: row.len(),
                });
            }
            matrix.row_mut(r)?.copy_from_slice(&row);
        }
        Ok(matrix)
    }

    pub fn get(&self, row: usize, col: usize) -> Result<T, Error> {
        let idx = self.offset(row, col)?;
        Ok(self.data[idx])
    }

    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<(), Error> {
        let idx = self.offset(row, col)?;
        self.data[idx] = value;
        Ok(())
    }

    /// Returns the elements of absolute row `row`.
    pub fn row(&self, row: usize) -> Result<&[T], Error> {
        let start = self.row_offset(row)?;
        Ok(&self.data[start..start + self.cols])
    }

    pub fn row_mut(&mut self, row: usize) -> Result<&mut [T], Error> {
        let start = self.row_offset(row)?;
        Ok(&mut self.data[start..start + self.cols])
    }

    /// Iterates over the materialized rows as `(absolute_row, elements)`.
    pub fn rows(&self) -> impl Iterator<Item = (usize, &[T])> + '_ {
        let start = self.window.start;
        self.window.clone().map(move |row| {
            let offset = (row - start) * self.cols;
            (row, &self.data[offset..offset + self.cols])
        })
    }
}

impl<T> Matrix<T> {
    pub fn total_rows(&self) -> usize {
        self.total_rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Range of materialized rows.
    pub fn window(&self) -> Range<usize> {
        self.window.clone()
    }

    pub fn window_start(&self) -> usize {
        self.window.start
    }

    pub fn window_end(&self) -> usize {
        self.window.end
    }

    /// Returns `true` if every row of the matrix is materialized.
    pub fn is_full(&self) -> bool {
        self.window.start == 0 && self.window.end == self.total_rows
    }

    fn out_of_bounds(&self, row: usize, col: usize) -> Error {
        Error::OutOfBounds {
            row,
            col,
            start: self.window.start,
            end: self.window.end,
            cols: self.cols,
        }
    }

    fn offset(&self, row: usize, col: usize) -> Result<usize, Error> {
        if !self.window.contains(&row) || col >= self.cols {
            return Err(self.out_of_bounds(row, col));
        }
        Ok((row - self.window.start) * self.cols + col)
    }

    fn row_offset(&self, row: usize) -> Result<usize, Error> {
        if !self.window.contains(&row) {
            return Err(self.out_of_bounds(row, 0));
        }
        Ok((row - self.window.start) * self.cols)
    }
}
