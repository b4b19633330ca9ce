//! Field extraction from the body of a single struct.
//!
//! Works line by line, one field per line:
//! - `///` lines accumulate into the description of the next field
//! - `//` comments and `#[...]` attributes are skipped
//! - blank lines are skipped
//! - anything else is `[pub] name: type,`

use crate::model::{Field, SourceLine};
use anyhow::{bail, Context, Result};
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

static RE_VISIBILITY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^pub(\s*\([^)]*\))?\s+").unwrap());

/// Extraction state between lines. A fresh `Field` is built on every
/// transition back to `AwaitingField`, so no state leaks between fields.
enum State {
    AwaitingField,
    InDoc { description: String },
}

impl State {
    fn take_description(self) -> Option<String> {
        match self {
            State::AwaitingField => None,
            State::InDoc { description } => Some(description),
        }
    }
}

/// Extract the fields of one struct body, in source order.
pub fn extract(lines: &[SourceLine], path: &Path) -> Result<Vec<Field>> {
    let mut fields = Vec::new();
    let mut state = State::AwaitingField;

    for line in lines {
        let text = line.text.trim();

        if let Some(doc) = text.strip_prefix("///") {
            let doc = doc.trim();
            state = match state {
                State::AwaitingField => State::InDoc {
                    description: doc.to_string(),
                },
                State::InDoc { mut description } => {
                    description.push('\n');
                    description.push_str(doc);
                    State::InDoc { description }
                }
            };
            continue;
        }

        if text.is_empty() || text.starts_with("//") || text.starts_with('#') {
            continue;
        }

        let (name, ty) =
            split_field(text).with_context(|| format!("{}:{}", path.display(), line.number))?;
        fields.push(Field {
            name,
            ty,
            description: std::mem::replace(&mut state, State::AwaitingField).take_description(),
        });
    }

    // A trailing doc comment with no field below it is dropped.
    Ok(fields)
}

/// Split a trimmed `[pub] name: type,` line into its name and raw type.
fn split_field(text: &str) -> Result<(String, String)> {
    // Visibility goes first: `pub(in a::b)` has colons of its own.
    let unqualified = RE_VISIBILITY.replace(text, "");
    let Some((name, ty)) = unqualified.split_once(':') else {
        bail!("expected `name: type` in field line `{}`", text);
    };

    let name = name.trim().to_string();
    let ty = strip_line_comment(ty).trim();
    let ty = ty.strip_suffix(',').unwrap_or(ty).trim().to_string();

    if name.is_empty() {
        bail!("missing field name in `{}`", text);
    }
    if ty.is_empty() {
        bail!("missing field type in `{}`", text);
    }
    if !brackets_balanced(&ty) {
        bail!(
            "unbalanced `<`/`>` in type `{}` (generic types must fit on one line)",
            ty
        );
    }

    Ok((name, ty))
}

/// Drop an end-of-line `// comment` after the type.
fn strip_line_comment(ty: &str) -> &str {
    match ty.find("//") {
        Some(pos) => &ty[..pos],
        None => ty,
    }
}

/// Angle brackets must close on the same line; `->` does not count.
fn brackets_balanced(ty: &str) -> bool {
    let mut depth: i32 = 0;
    let mut prev = '\0';
    for c in ty.chars() {
        match c {
            '<' => depth += 1,
            '>' if prev != '-' => {
                depth -= 1;
                if depth < 0 {
                    return false;
                }
            }
            _ => {}
        }
        prev = c;
    }
    depth == 0
}
