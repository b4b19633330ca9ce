//! Rust type expression → Python annotation, by ordered literal substitution.
//!
//! Each entry is applied with `str::replace` to the output of the previous
//! one, so order matters: `Option<` must become `Optional[` before the bare
//! `<` rule runs, and `DateTime[Utc]` must be matched as a whole before any
//! shorter name inside it is rewritten.

/// Built-in substitutions, in application order.
const DEFAULT_TYPES: &[(&str, &str)] = &[
    ("Option<", "Optional["),
    ("<", "["),
    (">", "]"),
    ("DateTime[Utc]", "datetime"),
    ("u64", "int"),
    ("u32", "int"),
    ("f32", "float"),
    ("HashMap", "dict"),
    ("Vec", "list"),
    ("String", "str"),
    ("u16", "int"),
    ("u8", "int"),
    ("usize", "int"),
    ("i64", "int"),
    ("i32", "int"),
    ("f64", "float"),
];

/// Ordered `(pattern, replacement)` table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeTable {
    entries: Vec<(String, String)>,
}

impl Default for TypeTable {
    fn default() -> Self {
        Self::from_pairs(DEFAULT_TYPES)
    }
}

impl TypeTable {
    /// Build a table from literal pairs, keeping their order.
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        Self {
            entries: pairs
                .iter()
                .map(|(from, to)| (from.to_string(), to.to_string()))
                .collect(),
        }
    }

    /// Append a substitution; it runs after every existing entry.
    pub fn push(&mut self, pattern: impl Into<String>, replacement: impl Into<String>) {
        self.entries.push((pattern.into(), replacement.into()));
    }

    /// Translate a raw Rust type into its Python annotation.
    pub fn translate(&self, ty: &str) -> String {
        self.entries
            .iter()
            .fold(ty.to_string(), |acc, (from, to)| acc.replace(from.as_str(), to))
    }
}

/// Parse a `FROM=TO` command-line mapping.
pub fn parse_mapping(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((from, to)) if !from.is_empty() => Ok((from.to_string(), to.to_string())),
        _ => Err(format!("expected FROM=TO, got `{}`", raw)),
    }
}
