//! Scanner API
//!
//! Public entry points for the comment-stripping scanner: an infallible
//! in-memory form and fallible reader/file forms that surface I/O and
//! decoding failures as [`StripError`].

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::scanner::error::{StripError, StripResult};
use crate::scanner::state::Scanner;

/// Read size for the streaming form.
const CHUNK_SIZE: usize = 8 * 1024;

/// Strip SQL comments from an in-memory string.
///
/// Line (`--`) and block (`/* */`) comments are removed, quoted regions
/// are preserved verbatim, blank-line runs collapse to one newline and
/// leading whitespace is dropped. Never fails, for any input.
pub fn strip_sql_comments(input: &str) -> String {
    let mut scanner = Scanner::new();
    scanner.push_str(input);
    scanner.finish()
}

/// Strip SQL comments from a reader.
///
/// The reader is consumed exactly once, forward-only, in fixed-size chunks;
/// only an incomplete UTF-8 sequence at a chunk boundary is carried over.
/// Any read failure aborts with no partial result.
pub fn strip_sql_comments_from_reader<R: Read>(mut reader: R) -> StripResult<String> {
    let mut scanner = Scanner::new();
    let mut buf = [0u8; CHUNK_SIZE];
    // Bytes held back from the previous read because they ended mid way
    // through a UTF-8 sequence. Never longer than 3 bytes.
    let mut pending: Vec<u8> = Vec::new();

    loop {
        let n = reader.read(&mut buf).map_err(|source| StripError::Io {
            path: None,
            source,
        })?;
        if n == 0 {
            break;
        }
        pending.extend_from_slice(&buf[..n]);

        let valid = match std::str::from_utf8(&pending) {
            Ok(s) => {
                scanner.push_str(s);
                pending.clear();
                continue;
            }
            Err(e) if e.error_len().is_some() => {
                return Err(StripError::Encoding { path: None });
            }
            Err(e) => e.valid_up_to(),
        };
        if valid > 0 {
            let head = std::str::from_utf8(&pending[..valid])
                .map_err(|_| StripError::Encoding { path: None })?;
            scanner.push_str(head);
            pending.drain(..valid);
        }
    }

    if !pending.is_empty() {
        // Input ended inside a multi-byte sequence.
        return Err(StripError::Encoding { path: None });
    }
    Ok(scanner.finish())
}

/// Strip SQL comments from a file.
///
/// Errors carry the offending path for caller-side reporting.
pub fn strip_sql_comments_from_file(path: impl AsRef<Path>) -> StripResult<String> {
    let path = path.as_ref();
    log::trace!("stripping SQL source {}", path.display());
    let file = File::open(path).map_err(|source| StripError::Io {
        path: Some(path.to_path_buf()),
        source,
    })?;
    strip_sql_comments_from_reader(BufReader::new(file)).map_err(|e| e.with_path(path))
}
