//! Bracketed text rendering of a matrix window.

use std::fmt;
use std::io::{self, Write};

use crate::{Element, Matrix};

/// Writes the materialized rows of `matrix` as `[ [ a, b, ],\n[ c, d, ],\n]\n`.
///
/// Every value is printed with six decimals and followed by `", "`, and every
/// row, the last included, is followed by `",\n"`.
pub fn render<T: Element, W: Write>(matrix: &Matrix<T>, mut out: W) -> io::Result<()> {
    write!(out, "{matrix}")?;
    out.flush()
}

impl<T: Element> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[ ")?;
        for (_, row) in self.rows() {
            f.write_str("[ ")?;
            for value in row {
                write_value(f, *value)?;
                f.write_str(", ")?;
            }
            f.write_str("],\n")?;
        }
        f.write_str("]\n")
    }
}

// `%f` spelling: NaN prints as `nan`, infinities already print as `inf`.
fn write_value<T: Element>(f: &mut fmt::Formatter<'_>, value: T) -> fmt::Result {
    if value.is_nan() {
        let sign = if value.is_sign_negative() { "-" } else { "" };
        return write!(f, "{sign}nan");
    }
    write!(f, "{value:.6}")
}
