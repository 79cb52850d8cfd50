//! Identifier checks for emitted names.

use crate::error::{GenError, Result};

// Words that may not be used as a binding name in a module.
const RESERVED: &[&str] = &[
    "await", "break", "case", "catch", "class", "const", "continue", "debugger", "default",
    "delete", "do", "else", "enum", "export", "extends", "false", "finally", "for", "function",
    "if", "implements", "import", "in", "instanceof", "interface", "let", "new", "null",
    "package", "private", "protected", "public", "return", "static", "super", "switch", "this",
    "throw", "true", "try", "typeof", "var", "void", "while", "with", "yield",
];

/// Whether `name` can be written unquoted as a property key.
pub fn is_identifier_name(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first.is_alphabetic() || first == '_' || first == '$')
        && chars.all(|ch| ch.is_alphanumeric() || ch == '_' || ch == '$')
}

/// Whether `name` can be used as a binding (variable, class, import alias).
fn is_binding_name(name: &str) -> bool {
    is_identifier_name(name) && !RESERVED.contains(&name)
}

/// Require an identifier name usable as an unquoted key.
pub fn ensure_identifier_name(name: &str) -> Result<()> {
    if is_identifier_name(name) {
        Ok(())
    } else {
        Err(GenError::invalid_identifier(name))
    }
}

/// Require a name usable as a binding.
pub fn ensure_binding_name(name: &str) -> Result<()> {
    if is_binding_name(name) {
        Ok(())
    } else if is_identifier_name(name) {
        Err(GenError::invalid_identifier_with_suggestion(
            name,
            format!("'{name}' is a reserved word"),
        ))
    } else {
        Err(GenError::invalid_identifier(name))
    }
}
