//! Struct declaration scanner.
//!
//! Line-oriented, not a grammar: a `pub struct Name {` line opens a
//! declaration and the first following line that starts with `}` closes it.
//! Brace nesting is not tracked, so field types must stay on one line (the
//! field extractor rejects unbalanced generics).

use crate::model::{Declaration, SourceLine};
use crate::parser::field;
use anyhow::Result;
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

static RE_STRUCT_OPEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bpub struct\b(.*)$").unwrap());

/// A declaration whose closing line has not been seen yet.
struct Open<'a> {
    name: String,
    line: usize,
    body: Vec<SourceLine<'a>>,
}

/// Extract all `pub struct` declarations from `input`, in source order.
pub fn extract(input: &str, path: &Path) -> Result<Vec<Declaration>> {
    let mut declarations = Vec::new();
    let mut open: Option<Open> = None;

    for (i, text) in input.lines().enumerate() {
        let number = i + 1;

        if let Some(caps) = RE_STRUCT_OPEN.captures(text) {
            let rest = caps[1].trim();
            let Some(name) = rest.strip_suffix('{').map(str::trim) else {
                eprintln!(
                    "warning: {}:{}: skipping struct without a field body: `{}`",
                    path.display(),
                    number,
                    text.trim()
                );
                continue;
            };
            if let Some(prev) = open.take() {
                eprintln!(
                    "warning: {}:{}: struct `{}` opened before `{}` (line {}) was closed; discarding `{}`",
                    path.display(),
                    number,
                    name,
                    prev.name,
                    prev.line,
                    prev.name
                );
            }
            open = Some(Open {
                name: name.to_string(),
                line: number,
                body: Vec::new(),
            });
            continue;
        }

        let Some(current) = open.as_mut() else {
            continue;
        };

        if text.starts_with('}') {
            let Some(done) = open.take() else { continue };
            let fields = field::extract(&done.body, path)?;
            declarations.push(Declaration {
                name: done.name,
                fields,
            });
        } else {
            current.body.push(SourceLine { number, text });
        }
    }

    if let Some(unclosed) = open {
        eprintln!(
            "warning: {}:{}: struct `{}` is never closed; dropping it",
            path.display(),
            unclosed.line,
            unclosed.name
        );
    }

    Ok(declarations)
}
