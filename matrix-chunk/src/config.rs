//! Command-line configuration.

use std::env;
use std::ffi::{OsStr, OsString};
use std::path::PathBuf;

use crate::{Error, Precision, reader::STDIN_PATH};

/// Environment variable selecting the element precision.
pub const PRECISION_ENV: &str = "MATRIX_CHUNK_PRECISION";

pub const USAGE: &str = "\
Usage: matrix-chunk <id> <N> <file A> <file B>
  <id>      worker number (0..N-1)
  <N>       total number of workers
  <file A>  left matrix, only rows of chunk <id> are loaded
  <file B>  right matrix, loaded whole

Use `-` for a file to read it from standard input.
Set MATRIX_CHUNK_PRECISION=f32 to compute in single precision.";

/// Settings for one worker invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub id: usize,
    pub workers: usize,
    pub left: PathBuf,
    pub right: PathBuf,
    pub precision: Precision,
}

impl Config {
    /// Builds the configuration from the process arguments and environment.
    pub fn from_env() -> Result<Self, Error> {
        let precision = env::var_os(PRECISION_ENV)
            .map(|value| {
                value.into_string().map_err(|value| {
                    Error::Argument(format!(
                        "{PRECISION_ENV} is not valid UTF-8: `{}`",
                        value.to_string_lossy()
                    ))
                })
            })
            .transpose()?;
        Self::parse(env::args_os(), precision.as_deref())
    }

    /// Parses `args` (program name first) and an optional precision setting.
    ///
    /// File paths are taken as raw OS strings; only `id` and `N` must be
    /// valid UTF-8.
    pub fn parse<I>(args: I, precision: Option<&str>) -> Result<Self, Error>
    where
        I: IntoIterator,
        I::Item: Into<OsString>,
    {
        let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
        let [_, id, workers, left, right] = args.as_slice() else {
            return Err(Error::Usage(USAGE.to_string()));
        };

        let id = parse_count(id, "id")?;
        let workers = parse_count(workers, "N")?;
        if workers == 0 || id >= workers {
            return Err(Error::InvalidChunk { id, workers });
        }

        if left == OsStr::new(STDIN_PATH) && right == OsStr::new(STDIN_PATH) {
            return Err(Error::Argument(
                "only one matrix can be read from standard input".to_string(),
            ));
        }

        let precision = match precision {
            Some(value) => value.parse()?,
            None => Precision::default(),
        };

        Ok(Self {
            id,
            workers,
            left: PathBuf::from(left),
            right: PathBuf::from(right),
            precision,
        })
    }
}

fn parse_count(value: &OsStr, name: &str) -> Result<usize, Error> {
    value.to_str().and_then(|v| v.parse().ok()).ok_or_else(|| {
        Error::Argument(format!(
            "{name} must be a non-negative integer, got `{}`",
            value.to_string_lossy()
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        let config = Config::parse(["matrix-chunk", "1", "4", "a.txt", "b.txt"], None).unwrap();
        assert_eq!(
            config,
            Config {
                id: 1,
                workers: 4,
                left: PathBuf::from("a.txt"),
                right: PathBuf::from("b.txt"),
                precision: Precision::Double,
            }
        );
    }

    #[test]
    fn test_precision() {
        let config = Config::parse(["m", "0", "1", "a", "b"], Some("f32")).unwrap();
        assert_eq!(config.precision, Precision::Single);

        assert!(matches!(
            Config::parse(["m", "0", "1", "a", "b"], Some("half")),
            Err(Error::Argument(_))
        ));
    }

    #[test]
    fn test_wrong_arity() {
        let err = Config::parse(["m", "0", "1", "a"], None).unwrap_err();
        assert!(matches!(err, Error::Usage(_)));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_id_out_of_range() {
        let err = Config::parse(["m", "4", "4", "a", "b"], None).unwrap_err();
        assert!(matches!(err, Error::InvalidChunk { id: 4, workers: 4 }));
        assert_eq!(err.exit_code(), 1);

        assert!(matches!(
            Config::parse(["m", "0", "0", "a", "b"], None),
            Err(Error::InvalidChunk { .. })
        ));
    }

    #[test]
    fn test_non_numeric() {
        assert!(matches!(
            Config::parse(["m", "x", "2", "a", "b"], None),
            Err(Error::Argument(_))
        ));
        assert!(matches!(
            Config::parse(["m", "0", "-2", "a", "b"], None),
            Err(Error::Argument(_))
        ));
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_arguments() {
        use std::os::unix::ffi::OsStringExt;

        let path = OsString::from_vec(b"a\xff.txt".to_vec());
        let config = Config::parse(
            [OsString::from("m"), "0".into(), "1".into(), path.clone(), "b".into()],
            None,
        )
        .unwrap();
        assert_eq!(config.left, PathBuf::from(path));

        let id = OsString::from_vec(b"\xff".to_vec());
        assert!(matches!(
            Config::parse([OsString::from("m"), id, "1".into(), "a".into(), "b".into()], None),
            Err(Error::Argument(_))
        ));
    }

    #[test]
    fn test_both_from_stdin() {
        assert!(matches!(
            Config::parse(["m", "0", "1", "-", "-"], None),
            Err(Error::Argument(_))
        ));
    }
}
