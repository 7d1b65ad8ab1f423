//! Row-windowed matrix multiplication.

use std::path::Path;

use crate::{Element, Error, Matrix, reader};

/// Multiplies the materialized rows of `left` by the full matrix `right`.
///
/// The result has `left.total_rows()` rows and `right.cols()` columns, and
/// owns the same row window as `left`. Each cell is a plain left-to-right
/// sum of products.
///
/// # Errors
///
/// [`Error::DimensionMismatch`] if `left.cols() != right.total_rows()`, and
/// [`Error::PartialOperand`] if `right` is not fully materialized.
pub fn multiply<T: Element>(left: &Matrix<T>, right: &Matrix<T>) -> Result<Matrix<T>, Error> {
    if left.cols() != right.total_rows() {
        return Err(Error::DimensionMismatch(
            left.total_rows(),
            left.cols(),
            right.total_rows(),
            right.cols(),
        ));
    }
    if !right.is_full() {
        return Err(Error::PartialOperand {
            start: right.window_start(),
            end: right.window_end(),
            rows: right.total_rows(),
        });
    }

    let cols = right.cols();
    let mut result = Matrix::allocate(left.total_rows(), cols, left.window())?;

    for (row, lhs) in left.rows() {
        let out = result.row_mut(row)?;
        for (col, cell) in out.iter_mut().enumerate() {
            *cell = dot(lhs, right, col)?;
        }
    }

    tracing::info!(
        rows = left.total_rows(),
        inner = left.cols(),
        cols,
        start = left.window_start(),
        end = left.window_end(),
        "multiplied chunk"
    );
    Ok(result)
}

/// Reads worker `id`'s chunk of `left`, the whole of `right`, and multiplies them.
pub fn multiply_chunk<T: Element>(
    left: impl AsRef<Path>,
    right: impl AsRef<Path>,
    id: usize,
    workers: usize,
) -> Result<Matrix<T>, Error> {
    let left = reader::read_chunk(left, id, workers)?;
    let right = reader::read_full(right)?;
    multiply(&left, &right)
}

fn dot<T: Element>(lhs: &[T], right: &Matrix<T>, col: usize) -> Result<T, Error> {
    let mut sum = T::zero();
    for (k, &a) in lhs.iter().enumerate() {
        sum = sum + a * right.get(k, col)?;
    }
    Ok(sum)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix(rows: Vec<Vec<f64>>) -> Matrix<f64> {
        Matrix::from_rows(rows).unwrap()
    }

    #[test]
    fn test_square_product() {
        let a = matrix(vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
        let b = matrix(vec![vec![5.0, 6.0], vec![7.0, 8.0]]);

        let c = multiply(&a, &b).unwrap();
        assert_eq!(c, matrix(vec![vec![19.0, 22.0], vec![43.0, 50.0]]));
    }

    #[test]
    fn test_rectangular_product() {
        let a = matrix(vec![vec![1.0, 0.0, 2.0], vec![0.0, 1.0, -1.0]]);
        let b = matrix(vec![vec![1.0], vec![2.0], vec![3.0]]);

        let c = multiply(&a, &b).unwrap();
        assert_eq!(c.total_rows(), 2);
        assert_eq!(c.cols(), 1);
        assert_eq!(c.row(0).unwrap(), &[7.0]);
        assert_eq!(c.row(1).unwrap(), &[-1.0]);
    }

    #[test]
    fn test_result_inherits_left_window() {
        let mut a = Matrix::<f64>::allocate(5, 2, 3..4).unwrap();
        a.set(3, 0, 2.0).unwrap();
        a.set(3, 1, 3.0).unwrap();
        let b = matrix(vec![vec![1.0, 10.0], vec![100.0, 1000.0]]);

        let c = multiply(&a, &b).unwrap();
        assert_eq!(c.total_rows(), 5);
        assert_eq!(c.window(), 3..4);
        assert_eq!(c.row(3).unwrap(), &[302.0, 3020.0]);
        assert!(c.row(0).is_err());
    }

    #[test]
    fn test_dimension_mismatch() {
        let a = matrix(vec![vec![1.0; 3]; 2]);
        let b = matrix(vec![vec![1.0; 2]; 4]);

        assert!(matches!(
            multiply(&a, &b),
            Err(Error::DimensionMismatch(2, 3, 4, 2))
        ));
    }

    #[test]
    fn test_partial_right_operand() {
        let a = matrix(vec![vec![1.0; 4]; 2]);
        let b = Matrix::<f64>::allocate(4, 2, 0..2).unwrap();

        assert!(matches!(
            multiply(&a, &b),
            Err(Error::PartialOperand { start: 0, end: 2, rows: 4 })
        ));
    }

    #[test]
    fn test_empty_window_product() {
        let a = Matrix::<f64>::allocate(2, 2, 2..2).unwrap();
        let b = matrix(vec![vec![1.0, 2.0], vec![3.0, 4.0]]);

        let c = multiply(&a, &b).unwrap();
        assert_eq!(c.window(), 2..2);
        assert_eq!(c.rows().count(), 0);
    }

    #[test]
    fn test_summation_order() {
        // 1e16 + 1 - 1e16 in increasing k loses the 1
        let a = matrix(vec![vec![1e16, 1.0, -1e16]]);
        let b = matrix(vec![vec![1.0], vec![1.0], vec![1.0]]);

        let c = multiply(&a, &b).unwrap();
        assert_eq!(c.get(0, 0).unwrap(), 0.0);
    }
}
