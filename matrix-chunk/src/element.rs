//! Element types and precision selection.

use std::fmt::{Debug, Display};
use std::str::FromStr;

use num_traits::Float;

use crate::Error;

/// A floating-point matrix element that can be parsed from and written to text.
pub trait Element:
    Float + FromStr + Display + Debug + Default + Send + Sync + 'static
{
}

impl<T> Element for T where
    T: Float + FromStr + Display + Debug + Default + Send + Sync + 'static
{
}

/// Element width used when reading and multiplying matrices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Precision {
    Single,
    #[default]
    Double,
}

impl FromStr for Precision {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "f32" | "single" => Ok(Precision::Single),
            "f64" | "double" => Ok(Precision::Double),
            other => Err(Error::Argument(format!(
                "unknown precision `{other}`, expected f32 or f64"
            ))),
        }
    }
}
