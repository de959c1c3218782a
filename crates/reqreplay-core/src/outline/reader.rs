//! Trimmed line reader with a single push-back slot.

use std::io::BufRead;

use super::error::ParseError;

/// Yields trimmed lines from a buffered stream. One line may be pushed back
/// so a sub-parser can hand a line it does not own to its caller.
pub struct LineReader<R> {
    inner: R,
    pushed_back: Option<(usize, String)>,
    line_no: usize,
    /// Line number of the line most recently returned by `next_line`.
    current: usize,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            pushed_back: None,
            line_no: 0,
            current: 0,
        }
    }

    /// Next trimmed line, or `None` at end of input. Bytes that are not valid
    /// UTF-8 become U+FFFD rather than failing the read.
    pub fn next_line(&mut self) -> Result<Option<String>, ParseError> {
        if let Some((no, line)) = self.pushed_back.take() {
            self.current = no;
            return Ok(Some(line));
        }

        let mut buf = Vec::new();
        let n = self
            .inner
            .read_until(b'\n', &mut buf)
            .map_err(|source| ParseError::Read { source })?;
        if n == 0 {
            return Ok(None);
        }
        self.line_no += 1;
        self.current = self.line_no;
        Ok(Some(String::from_utf8_lossy(&buf).trim().to_string()))
    }

    /// Return `line` to the front of the stream. At most one line may be
    /// pending; the grammar never needs more than one line of lookahead.
    pub fn push_back(&mut self, line: String) {
        debug_assert!(self.pushed_back.is_none(), "second push-back before read");
        self.pushed_back = Some((self.current, line));
    }

    /// 1-based number of the line last returned (0 before the first read).
    pub fn line_no(&self) -> usize {
        self.current
    }
}
