//! Data model for extracted declarations.

/// A single named, typed member of a struct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    /// Raw source type, before translation
    pub ty: String,
    /// Consecutive `///` lines directly above the field, joined with `\n`
    pub description: Option<String>,
}

/// A struct-like declaration with its fields in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub name: String,
    pub fields: Vec<Field>,
}

/// A body line together with its 1-based position in the source file.
#[derive(Debug, Clone, Copy)]
pub struct SourceLine<'a> {
    pub number: usize,
    pub text: &'a str,
}
