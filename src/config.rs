//! Generator configuration, fixed for the duration of a run.

use crate::translate::TypeTable;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

pub const DEFAULT_SOURCE_ROOT: &str = "src";
pub const DEFAULT_DIRS: &[&str] = &["album", "artist", "search"];
pub const DEFAULT_BLACKLIST: &[&str] = &["ImageId"];
pub const DEFAULT_STUB_FILE: &str = "python_bindings/bandcamp/__init__.pyi";
pub const DEFAULT_SENTINEL: &str = "# DO NOT EDIT";

/// File inside each source dir that holds its declarations.
const DECLARATIONS_FILE: &str = "mod.rs";

/// Pipeline configuration for [`crate::stub::generate`].
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory the source dirs are resolved against
    pub source_root: PathBuf,
    /// Source dirs, scanned in this order
    pub dirs: Vec<String>,
    /// Struct names that never get a stub
    pub blacklist: BTreeSet<String>,
    /// Destination `.pyi` file
    pub stub_file: PathBuf,
    /// Lines up to and including the first one starting with this are kept
    pub sentinel: String,
    pub types: TypeTable,
    /// Emit field descriptions as property docstrings
    pub docstrings: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_root: PathBuf::from(DEFAULT_SOURCE_ROOT),
            dirs: DEFAULT_DIRS.iter().map(|d| d.to_string()).collect(),
            blacklist: DEFAULT_BLACKLIST.iter().map(|b| b.to_string()).collect(),
            stub_file: PathBuf::from(DEFAULT_STUB_FILE),
            sentinel: DEFAULT_SENTINEL.to_string(),
            types: TypeTable::default(),
            docstrings: false,
        }
    }
}

impl Config {
    /// Path of the declarations file for one source dir.
    pub fn declarations_path(&self, dir: &str) -> PathBuf {
        self.source_root.join(dir).join(DECLARATIONS_FILE)
    }

    /// Iterate declarations files in scan order.
    pub fn declarations_paths(&self) -> impl Iterator<Item = PathBuf> + '_ {
        self.dirs.iter().map(|dir| self.declarations_path(dir))
    }

    pub fn is_blacklisted(&self, name: &str) -> bool {
        self.blacklist.contains(name)
    }

    pub fn stub_file(&self) -> &Path {
        &self.stub_file
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_bindings_layout() {
        let config = Config::default();
        let paths: Vec<_> = config.declarations_paths().collect();
        assert_eq!(
            paths,
            [
                PathBuf::from("src/album/mod.rs"),
                PathBuf::from("src/artist/mod.rs"),
                PathBuf::from("src/search/mod.rs"),
            ]
        );
        assert!(config.is_blacklisted("ImageId"));
        assert!(!config.is_blacklisted("Album"));
        assert_eq!(config.stub_file(), Path::new("python_bindings/bandcamp/__init__.pyi"));
    }
}
