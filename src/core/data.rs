//! Value ingest: numbers separated by commas, whitespace or newlines.
//!
//! `#` starts a comment that runs to the end of the line, so annotated data
//! files can be piped in unchanged.

use std::io::{BufRead, BufReader, Read};

use crate::core::error::{ParseErrorKind, ParseValuesError};

const BUF_CAP: usize = 64 * 1024;

#[inline]
fn is_separator(b: u8) -> bool {
    b == b',' || b == b';' || b.is_ascii_whitespace()
}

/// Replace U+2212 MINUS SIGN (`E2 88 92`) with an ASCII hyphen in place.
#[inline]
pub fn normalize_unicode_minus(buf: &mut Vec<u8>) {
    let (mut r, mut w) = (0, 0);
    while r < buf.len() {
        if r + 2 < buf.len() && buf[r] == 0xE2 && buf[r + 1] == 0x88 && buf[r + 2] == 0x92 {
            buf[w] = b'-';
            r += 3;
        } else {
            buf[w] = buf[r];
            r += 1;
        }
        w += 1;
    }
    buf.truncate(w);
}

#[inline]
fn parse_value(bytes: &[u8], line: usize) -> Result<f64, ParseValuesError> {
    let text = || String::from_utf8_lossy(bytes).into_owned();
    let val = lexical_core::parse::<f64>(bytes).map_err(|_| ParseValuesError {
        line,
        kind: ParseErrorKind::BadNumber { text: text() },
    })?;
    if val.is_finite() {
        Ok(val)
    } else {
        Err(ParseValuesError {
            line,
            kind: ParseErrorKind::NonFinite { text: text() },
        })
    }
}

/// Parse every number in `src`, in order of appearance.
///
/// # Errors
/// Fails on the first token that is not a finite number, on I/O errors, and
/// when the input holds no numbers at all.
pub fn read_values<R: Read>(src: R) -> Result<Vec<f64>, ParseValuesError> {
    let mut rdr = BufReader::with_capacity(BUF_CAP, src);
    let mut buf = Vec::<u8>::with_capacity(256);
    let mut values = Vec::new();
    let mut line_no = 0usize;

    loop {
        buf.clear();
        let n = rdr.read_until(b'\n', &mut buf).map_err(|e| ParseValuesError {
            line: line_no,
            kind: ParseErrorKind::Io(e),
        })?;
        if n == 0 {
            break;
        }
        line_no += 1;

        if let Some(hash) = buf.iter().position(|&b| b == b'#') {
            buf.truncate(hash);
        }
        normalize_unicode_minus(&mut buf);

        for token in buf.split(|&b| is_separator(b)).filter(|t| !t.is_empty()) {
            values.push(parse_value(token, line_no)?);
        }
    }

    if values.is_empty() {
        return Err(ParseValuesError {
            line: line_no,
            kind: ParseErrorKind::NoValues,
        });
    }
    Ok(values)
}

/// Read values from `path`, or from stdin when `path` is `-`.
///
/// # Errors
/// See [`read_values`]; a file that cannot be opened is reported on line 0.
pub fn read_values_from_path(path: &str) -> Result<Vec<f64>, ParseValuesError> {
    if path == "-" {
        read_values(std::io::stdin().lock())
    } else {
        let file = std::fs::File::open(path).map_err(|e| ParseValuesError {
            line: 0,
            kind: ParseErrorKind::Io(e),
        })?;
        read_values(file)
    }
}
