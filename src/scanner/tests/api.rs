//! API tests
//!
//! Reader and file entry points, including the I/O and decoding error
//! paths that the in-memory form cannot hit.

use std::io::{self, Read};

use crate::scanner::{
    strip_sql_comments, strip_sql_comments_from_file, strip_sql_comments_from_reader, StripError,
};

/// Reader yielding one byte per read call, to force multi-byte UTF-8
/// sequences across chunk boundaries.
struct ByteAtATime<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Read for ByteAtATime<'a> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.pos >= self.data.len() || buf.is_empty() {
            return Ok(0);
        }
        buf[0] = self.data[self.pos];
        self.pos += 1;
        Ok(1)
    }
}

/// Reader that fails after a successful read.
struct FailingReader {
    fed: bool,
}

impl Read for FailingReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.fed {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"));
        }
        self.fed = true;
        let data = b"select 1 ";
        buf[..data.len()].copy_from_slice(data);
        Ok(data.len())
    }
}

#[test]
fn test_reader_matches_in_memory_strip() {
    let input = "select 1 -- c\nfrom dual";
    let stripped = strip_sql_comments_from_reader(input.as_bytes()).unwrap();
    assert_eq!(stripped, strip_sql_comments(input));
}

#[test]
fn test_reader_handles_split_multibyte_chars() {
    let input = "select 'caf\u{e9} \u{2603}' -- d\u{e9}co\nfrom t";
    let reader = ByteAtATime {
        data: input.as_bytes(),
        pos: 0,
    };
    let stripped = strip_sql_comments_from_reader(reader).unwrap();
    assert_eq!(stripped, strip_sql_comments(input));
}

#[test]
fn test_reader_rejects_invalid_utf8() {
    let bytes: &[u8] = b"select 1 \xff\xfe from t";
    let err = strip_sql_comments_from_reader(bytes).unwrap_err();
    assert!(matches!(err, StripError::Encoding { path: None }));
}

#[test]
fn test_reader_rejects_truncated_utf8_at_eof() {
    // First two bytes of a three-byte sequence.
    let bytes: &[u8] = b"select '\xe2\x98";
    let err = strip_sql_comments_from_reader(bytes).unwrap_err();
    assert!(matches!(err, StripError::Encoding { .. }));
}

#[test]
fn test_reader_io_error_aborts_without_partial_result() {
    let err = strip_sql_comments_from_reader(FailingReader { fed: false }).unwrap_err();
    match err {
        StripError::Io { path, source } => {
            assert!(path.is_none());
            assert_eq!(source.kind(), io::ErrorKind::BrokenPipe);
        }
        other => panic!("expected Io, got {other:?}"),
    }
}

#[test]
fn test_file_strip_round_trip() {
    let tmp = tempfile::TempDir::new().unwrap();
    let path = tmp.path().join("query.sql");
    std::fs::write(&path, "/* header */\nselect 1 from dual\n").unwrap();

    let stripped = strip_sql_comments_from_file(&path).unwrap();
    assert_eq!(stripped, "select 1 from dual\n");
}

#[test]
fn test_missing_file_error_carries_path() {
    let tmp = tempfile::TempDir::new().unwrap();
    let path = tmp.path().join("absent.sql");

    let err = strip_sql_comments_from_file(&path).unwrap_err();
    assert_eq!(err.path(), Some(path.as_path()));
    match err {
        StripError::Io { source, .. } => {
            assert_eq!(source.kind(), io::ErrorKind::NotFound);
        }
        other => panic!("expected Io, got {other:?}"),
    }
}

#[test]
fn test_invalid_utf8_file_error_carries_path() {
    let tmp = tempfile::TempDir::new().unwrap();
    let path = tmp.path().join("latin1.sql");
    std::fs::write(&path, b"select 'caf\xe9'").unwrap();

    let err = strip_sql_comments_from_file(&path).unwrap_err();
    assert!(matches!(err, StripError::Encoding { .. }));
    assert_eq!(err.path(), Some(path.as_path()));
}
