// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{cell::RefCell,
          collections::HashMap,
          path::{Path, PathBuf}};

use crate::{CommonResult, DocumentStorage, EditorErrorCouldNot, SaveErrorCouldNot,
            split_into_lines};

/// In memory [`DocumentStorage`]. Set `is_read_only` to make every write fail, which is
/// how tests exercise the recoverable save failure path.
#[derive(Debug, Default)]
pub struct StorageMock {
    pub files: RefCell<HashMap<PathBuf, Vec<u8>>>,
    pub is_read_only: bool,
}

impl StorageMock {
    #[must_use]
    pub fn new_read_only() -> Self {
        Self {
            is_read_only: true,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_file(self, path: impl Into<PathBuf>, content: &[u8]) -> Self {
        self.files.borrow_mut().insert(path.into(), content.to_vec());
        self
    }

    #[must_use]
    pub fn get_file(&self, path: impl AsRef<Path>) -> Option<Vec<u8>> {
        self.files.borrow().get(path.as_ref()).cloned()
    }
}

impl DocumentStorage for StorageMock {
    fn read_lines(&self, path: &Path) -> CommonResult<Vec<Vec<u8>>> {
        match self.files.borrow().get(path) {
            Some(bytes) => Ok(split_into_lines(bytes)),
            None => Err(EditorErrorCouldNot::OpenFile {
                path: path.to_path_buf(),
                source: std::io::Error::from(std::io::ErrorKind::NotFound),
            }
            .into()),
        }
    }

    fn write_bytes(&self, path: &Path, bytes: &[u8]) -> Result<usize, SaveErrorCouldNot> {
        if self.is_read_only {
            return Err(SaveErrorCouldNot::CreateFile {
                path: path.to_path_buf(),
                source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
            });
        }
        self.files
            .borrow_mut()
            .insert(path.to_path_buf(), bytes.to_vec());
        Ok(bytes.len())
    }
}
