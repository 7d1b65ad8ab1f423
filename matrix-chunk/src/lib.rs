//! Row-chunked matrix multiplication over text matrix files.
//!
//! `matrix-chunk` splits the rows of a left matrix A among `N` workers. Each
//! worker loads only its own contiguous chunk of A, loads the whole right
//! matrix B, and computes the matching rows of C = A × B. Running every id in
//! `0..N` and stacking the outputs by row yields the full product.
//!
//! # Components
//!
//! - [`plan`]: which rows worker `id` of `N` owns
//! - [`Matrix`]: storage for a row window, indexed by absolute row number
//! - [`read_chunk`] / [`read_full`]: text format reader
//! - [`multiply`]: product restricted to the left operand's window
//! - [`render`]: bracketed text output
//!
//! # Example
//!
//! ```no_run
//! use matrix_chunk::{multiply, read_chunk, read_full, Matrix};
//!
//! fn main() -> Result<(), matrix_chunk::Error> {
//!     // worker 1 of 4
//!     let a: Matrix<f64> = read_chunk("a.txt", 1, 4)?;
//!     let b: Matrix<f64> = read_full("b.txt")?;
//!
//!     let c = multiply(&a, &b)?;
//!     print!("{c}");
//!     Ok(())
//! }
//! ```

mod chunk;
mod config;
mod element;
mod error;
mod matrix;
mod multiply;
mod reader;
mod render;

pub use chunk::{chunks, plan};
pub use config::{Config, PRECISION_ENV, USAGE};
pub use element::{Element, Precision};
pub use error::Error;
pub use matrix::Matrix;
pub use multiply::{multiply, multiply_chunk};
pub use reader::{STDIN_PATH, read_chunk, read_chunk_from, read_full};
pub use render::render;
