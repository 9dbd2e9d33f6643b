// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Reading and writing documents. Files are treated as bytes, never as UTF-8, since
//! the editor maps one byte to one column.
//!
//! File format: each line's content followed by a single `\n`, including after the
//! last line. Trailing `\r` and `\n` bytes are stripped from each line when reading, so
//! files with CRLF line endings are saved back with LF.

use std::{io::Write, path::Path};

use crate::{CommonResult, EditorErrorCouldNot, SaveErrorCouldNot};

pub trait DocumentStorage {
    /// Reads the whole file at `path` and splits it into lines.
    ///
    /// # Errors
    ///
    /// Returns [`EditorErrorCouldNot::OpenFile`] if the file can't be read. This is
    /// fatal: there is no partial load.
    fn read_lines(&self, path: &Path) -> CommonResult<Vec<Vec<u8>>>;

    /// Replaces the contents of the file at `path` (creating it if needed) with `bytes`.
    /// Returns the number of bytes written.
    ///
    /// # Errors
    ///
    /// Returns [`SaveErrorCouldNot`] if the file can't be created or written to.
    fn write_bytes(&self, path: &Path, bytes: &[u8]) -> Result<usize, SaveErrorCouldNot>;
}

/// [`DocumentStorage`] on the local file system.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalFileStorage;

impl DocumentStorage for LocalFileStorage {
    fn read_lines(&self, path: &Path) -> CommonResult<Vec<Vec<u8>>> {
        let bytes = std::fs::read(path).map_err(|source| EditorErrorCouldNot::OpenFile {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(split_into_lines(&bytes))
    }

    fn write_bytes(&self, path: &Path, bytes: &[u8]) -> Result<usize, SaveErrorCouldNot> {
        let mut file =
            std::fs::File::create(path).map_err(|source| SaveErrorCouldNot::CreateFile {
                path: path.to_path_buf(),
                source,
            })?;

        file.write_all(bytes)
            .and_then(|()| file.flush())
            .map_err(|source| SaveErrorCouldNot::WriteBytes {
                path: path.to_path_buf(),
                source,
            })?;

        Ok(bytes.len())
    }
}

/// Splits on `\n` and strips any trailing `\r` / `\n` bytes from each line. An empty
/// input has no lines at all. A missing newline after the last line makes no
/// difference.
#[must_use]
pub fn split_into_lines(bytes: &[u8]) -> Vec<Vec<u8>> {
    bytes
        .split_inclusive(|it| *it == b'\n')
        .map(|line| {
            let end = line
                .iter()
                .rposition(|it| *it != b'\n' && *it != b'\r')
                .map_or(0, |pos| pos + 1);
            line[..end].to_vec()
        })
        .collect()
}

/// Inverse of [`split_into_lines`]: every line, including the last one, gets a `\n`.
#[must_use]
pub fn join_lines<'a>(lines: impl IntoIterator<Item = &'a [u8]>) -> Vec<u8> {
    let mut acc = Vec::new();
    for line in lines {
        acc.extend_from_slice(line);
        acc.push(b'\n');
    }
    acc
}
