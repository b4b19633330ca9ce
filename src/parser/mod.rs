//! Parser module: struct declarations and their fields.

pub mod declaration;
pub mod field;

use crate::model::Declaration;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Read and parse one declarations file.
pub fn parse_file(path: &Path) -> Result<Vec<Declaration>> {
    let content =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    declaration::extract(&content, path)
}
