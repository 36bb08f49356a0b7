// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Errors from loading an index.
//!
//! The set algebra itself cannot fail; only getting counts into memory can.

use std::io;
use std::path::PathBuf;

/// Errors for building a [`MemoryIndex`](crate::MemoryIndex) from disk.
#[derive(thiserror::Error, Debug)]
pub enum IndexError {
    /// The index file could not be opened or read.
    #[error("failed to read index {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The index was not `{"term": {"doc": count}}` JSON.
    #[error("malformed index JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, IndexError>;
