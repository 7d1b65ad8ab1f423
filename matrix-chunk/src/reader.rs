//! Text matrix reader.
//!
//! The format is a `<rows> <cols>` header followed by `rows * cols`
//! whitespace-separated values in row-major order. Line breaks carry no
//! meaning; rows are delimited purely by count.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

use crate::{Element, Error, Matrix, chunk};

/// Path that selects standard input instead of a file.
pub const STDIN_PATH: &str = "-";

/// Reads the rows of `path` assigned to worker `id` out of `workers`.
///
/// Rows before the chunk are parsed and dropped, rows after it are never
/// read. A worker with no assigned rows gets an empty window at the end of
/// the matrix.
pub fn read_chunk<T: Element>(
    path: impl AsRef<Path>,
    id: usize,
    workers: usize,
) -> Result<Matrix<T>, Error> {
    let path = path.as_ref();
    let name = path.display().to_string();

    if path == Path::new(STDIN_PATH) {
        let stdin = io::stdin();
        return read_chunk_from(stdin.lock(), &name, id, workers);
    }

    let file = File::open(path).map_err(|e| Error::io(&name, e))?;
    read_chunk_from(BufReader::new(file), &name, id, workers)
}

/// Reads every row of `path`.
pub fn read_full<T: Element>(path: impl AsRef<Path>) -> Result<Matrix<T>, Error> {
    read_chunk(path, 0, 1)
}

/// Reads the chunk of worker `id` from an already opened source.
///
/// `source` names the input in error messages.
pub fn read_chunk_from<T: Element, R: BufRead>(
    reader: R,
    source: &str,
    id: usize,
    workers: usize,
) -> Result<Matrix<T>, Error> {
    let mut tokens = Tokens::new(reader, source);

    let rows: usize = tokens.parse("row count")?;
    let cols: usize = tokens.parse("column count")?;

    let Some(window) = chunk::plan(rows, id, workers)? else {
        tracing::info!(source, rows, cols, id, workers, "no rows assigned");
        return Matrix::allocate(rows, cols, rows..rows);
    };

    tokens.required = window.end.saturating_mul(cols).saturating_add(2);

    let skipped = window.start.saturating_mul(cols);
    for _ in 0..skipped {
        tokens.parse::<T>("number")?;
    }

    let matrix = Matrix::try_collect(rows, cols, window.clone(), || tokens.parse("number"))?;

    tracing::info!(
        source,
        rows,
        cols,
        start = window.start,
        end = window.end,
        "read matrix chunk"
    );
    Ok(matrix)
}

/// Whitespace-separated token stream over a buffered reader.
///
/// Bytes are consumed only up to the end of the last token handed out, so
/// nothing past the final requested value is pulled from the source.
struct Tokens<'a, R> {
    reader: R,
    source: &'a str,
    token: Vec<u8>,
    line_no: usize,
    token_line: usize,
    consumed: usize,
    required: usize,
}

impl<'a, R: BufRead> Tokens<'a, R> {
    fn new(reader: R, source: &'a str) -> Self {
        Self {
            reader,
            source,
            token: Vec::new(),
            line_no: 1,
            token_line: 1,
            consumed: 0,
            required: 2,
        }
    }

    /// Parses the next token as `V`.
    fn parse<V: FromStr>(&mut self, expected: &'static str) -> Result<V, Error> {
        if !self.next_token()? {
            return Err(self.truncated());
        }
        std::str::from_utf8(&self.token)
            .ok()
            .and_then(|token| token.parse().ok())
            .ok_or_else(|| Error::Parse {
                path: self.source.to_string(),
                line: self.token_line,
                expected,
                token: String::from_utf8_lossy(&self.token).into_owned(),
            })
    }

    /// Loads the next token into `self.token`; `false` at end of input.
    fn next_token(&mut self) -> Result<bool, Error> {
        self.token.clear();

        loop {
            let buf = self
                .reader
                .fill_buf()
                .map_err(|e| Error::io(self.source, e))?;
            if buf.is_empty() {
                return Ok(false);
            }
            let skip = buf.iter().take_while(|b| b.is_ascii_whitespace()).count();
            self.line_no += buf[..skip].iter().filter(|&&b| b == b'\n').count();
            let found = skip < buf.len();
            self.reader.consume(skip);
            if found {
                break;
            }
        }

        self.token_line = self.line_no;
        loop {
            let buf = self
                .reader
                .fill_buf()
                .map_err(|e| Error::io(self.source, e))?;
            if buf.is_empty() {
                break;
            }
            let len = buf.iter().take_while(|b| !b.is_ascii_whitespace()).count();
            self.token.extend_from_slice(&buf[..len]);
            let ended = len < buf.len();
            self.reader.consume(len);
            if ended {
                break;
            }
        }

        self.consumed += 1;
        Ok(true)
    }

    fn truncated(&self) -> Error {
        Error::Truncated {
            path: self.source.to_string(),
            expected: self.required,
            found: self.consumed,
        }
    }
}
