//! Template engine for `{variable}` substitution in prompt text.
//!
//! The engine is fail-safe: an undefined variable is an error rather than a
//! silent empty substitution, so a typo in a template never reaches the
//! model. `{{` and `}}` render literal braces.

use std::collections::HashMap;
use std::fmt;

/// Error type for template rendering failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// A variable was referenced but not provided.
    UndefinedVariable {
        /// The name of the undefined variable.
        name: String,
    },
    /// A `{` was opened without a matching `}` (this also covers the empty
    /// `{}` placeholder, which names no variable).
    UnmatchedBrace {
        /// The byte position of the offending `{`.
        position: usize,
    },
}

impl fmt::Display for TemplateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateError::UndefinedVariable { name } => {
                write!(f, "undefined variable '{}' in template", name)
            }
            TemplateError::UnmatchedBrace { position } => {
                write!(f, "unmatched or empty '{{' at position {} in template", position)
            }
        }
    }
}

impl std::error::Error for TemplateError {}

/// Render a template string by substituting `{variable}` placeholders.
pub fn render_template(
    template: &str,
    variables: &HashMap<String, String>,
) -> Result<String, TemplateError> {
    let mut result = String::with_capacity(template.len());
    let mut chars = template.char_indices().peekable();

    while let Some((pos, ch)) = chars.next() {
        if ch == '{' {
            if let Some((_, '{')) = chars.peek() {
                chars.next();
                result.push('{');
                continue;
            }

            let mut name = String::new();
            loop {
                match chars.next() {
                    Some((_, '}')) => break,
                    Some((_, c)) => name.push(c),
                    None => return Err(TemplateError::UnmatchedBrace { position: pos }),
                }
            }

            let name = name.trim();
            if name.is_empty() {
                return Err(TemplateError::UnmatchedBrace { position: pos });
            }

            match variables.get(name) {
                Some(value) => result.push_str(value),
                None => {
                    return Err(TemplateError::UndefinedVariable {
                        name: name.to_string(),
                    });
                }
            }
        } else if ch == '}' {
            if let Some((_, '}')) = chars.peek() {
                chars.next();
            }
            result.push('}');
        } else {
            result.push(ch);
        }
    }

    Ok(result)
}

/// Helper to build a variables map from key-value pairs.
pub fn vars<I, K, V>(pairs: I) -> HashMap<String, String>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}
