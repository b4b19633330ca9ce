//! `.pyi` stub generation.
//!
//! The destination file is split at the sentinel line. Everything up to and
//! including that line is copied byte for byte; everything after it is
//! replaced by one `class` block per extracted struct.

use crate::config::Config;
use crate::model::{Declaration, Field};
use crate::parser;
use anyhow::{Context, Result};
use std::fs;

/// Result of rendering the stub file in memory.
#[derive(Debug)]
pub struct Generated {
    /// Destination content before the run
    pub original: String,
    /// Destination content after the run
    pub content: String,
    /// Number of `class` blocks written
    pub classes: usize,
}

impl Generated {
    pub fn is_current(&self) -> bool {
        self.original == self.content
    }
}

/// Split `text` after the first line that starts with `sentinel`.
///
/// Returns the preserved prefix (line endings intact) and whether the
/// sentinel was found. Without a sentinel the whole text is the prefix.
pub fn split_prefix<'a>(text: &'a str, sentinel: &str) -> (&'a str, bool) {
    let mut end = 0;
    for line in text.split_inclusive('\n') {
        end += line.len();
        if line.starts_with(sentinel) {
            return (&text[..end], true);
        }
    }
    (text, false)
}

/// Render the generated region for `decls`, skipping blacklisted names.
pub fn render_declarations(decls: &[Declaration], config: &Config) -> String {
    let mut out = String::new();
    for decl in decls.iter().filter(|d| !config.is_blacklisted(&d.name)) {
        render_class(&mut out, decl, config);
    }
    out
}

fn render_class(out: &mut String, decl: &Declaration, config: &Config) {
    out.push_str(&format!("class {}:\n", decl.name));
    for field in &decl.fields {
        render_property(out, field, config);
    }
    out.push('\n');
}

fn render_property(out: &mut String, field: &Field, config: &Config) {
    let py_type = config.types.translate(&field.ty);
    out.push_str("    @property\n");
    match field.description.as_deref() {
        Some(desc) if config.docstrings => {
            out.push_str(&format!("    def {}(self) -> {}:\n", field.name, py_type));
            out.push_str(&format!("        \"\"\"{}\"\"\"\n", docstring_body(desc)));
            out.push_str("        ...\n");
        }
        _ => out.push_str(&format!("    def {}(self) -> {}: ...\n", field.name, py_type)),
    }
}

/// Escape for a `"""` literal and indent continuation lines to its column.
fn docstring_body(desc: &str) -> String {
    desc.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .lines()
        .enumerate()
        .map(|(i, line)| {
            if i == 0 || line.is_empty() {
                line.to_string()
            } else {
                format!("        {}", line)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Load every configured source dir and extract its declarations, in order.
pub fn collect_declarations(config: &Config) -> Result<Vec<Declaration>> {
    let mut decls = Vec::new();
    for path in config.declarations_paths() {
        decls.extend(parser::parse_file(&path)?);
    }
    Ok(decls)
}

/// Build the new stub file content without touching the filesystem.
pub fn generate(config: &Config) -> Result<Generated> {
    let stub_path = config.stub_file();
    let original = fs::read_to_string(stub_path)
        .with_context(|| format!("failed to read {}", stub_path.display()))?;

    let (prefix, found) = split_prefix(&original, &config.sentinel);
    if !found {
        eprintln!(
            "warning: sentinel `{}` not found in {}; leaving it unchanged",
            config.sentinel,
            stub_path.display()
        );
        return Ok(Generated {
            content: original.clone(),
            original,
            classes: 0,
        });
    }

    let decls = collect_declarations(config)?;
    let region = render_declarations(&decls, config);
    let classes = decls.iter().filter(|d| !config.is_blacklisted(&d.name)).count();

    let mut content = String::with_capacity(prefix.len() + region.len() + 1);
    content.push_str(prefix);
    if !prefix.ends_with('\n') && !region.is_empty() {
        content.push('\n');
    }
    content.push_str(&region);

    Ok(Generated {
        original,
        content,
        classes,
    })
}

/// Regenerate the stub file in place.
///
/// The new content is fully built before the file is opened for writing, so
/// a parse error leaves the destination untouched.
pub fn regenerate(config: &Config) -> Result<Generated> {
    let generated = generate(config)?;
    if !generated.is_current() {
        let stub_path = config.stub_file();
        fs::write(stub_path, &generated.content)
            .with_context(|| format!("failed to write {}", stub_path.display()))?;
    }
    Ok(generated)
}
