//! Zigzag matrix generation.
//!
//! JPEG entropy coding orders the coefficients of a block along a zigzag
//! path that starts in the top-left corner and sweeps the anti-diagonals in
//! alternating directions. [`zigzag`] numbers the cells of an `n × n` matrix
//! in that order.
//!
//! ```text
//!  0  1  5  6
//!  2  4  7 12
//!  3  8 11 13
//!  9 10 14 15
//! ```

use thiserror::Error;

/// Errors raised by matrix generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MatrixError {
    /// A zero-sized matrix has no path to number.
    #[error("matrix dimension must be at least 1")]
    EmptyDimension,
}

/// Build the `n × n` zigzag matrix, numbered `0..n²`.
///
/// Even anti-diagonals are walked upwards (row decreasing), odd ones
/// downwards.
///
/// # Errors
///
/// Returns [`MatrixError::EmptyDimension`] when `n` is zero.
pub fn zigzag(n: usize) -> Result<Vec<Vec<usize>>, MatrixError> {
    if n == 0 {
        return Err(MatrixError::EmptyDimension);
    }

    let mut matrix = vec![vec![0; n]; n];
    let (mut row, mut col) = (0, 0);

    for step in 0..n * n {
        matrix[row][col] = step;

        if (row + col) % 2 == 0 {
            // Moving up and to the right.
            if col + 1 == n {
                row += 1;
            } else if row == 0 {
                col += 1;
            } else {
                row -= 1;
                col += 1;
            }
        } else if row + 1 == n {
            col += 1;
        } else if col == 0 {
            row += 1;
        } else {
            row += 1;
            col -= 1;
        }
    }

    Ok(matrix)
}

/// Render a matrix with right-aligned columns, one row per line.
#[must_use]
pub fn render(matrix: &[Vec<usize>]) -> String {
    let width = matrix
        .iter()
        .flatten()
        .max()
        .map_or(1, |max| max.to_string().len());

    matrix
        .iter()
        .map(|row| {
            row.iter()
                .map(|cell| format!("{cell:>width$}"))
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}
