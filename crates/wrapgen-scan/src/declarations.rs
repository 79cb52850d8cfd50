//! Declaration-level facts recovered from `.d.ts` files.
//!
//! Only structural information is kept: names, the `extends` edge, public
//! properties and the leading documentation text. Nothing here is type-checked.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Declared type of a property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum PropertyType {
    /// The property is typed as a single literal (`readonly name: "NoSuchKey"`).
    /// Holds the literal's value, without quotes for string literals.
    Literal(String),
    /// Any other type, as written in the declaration.
    Declared(String),
}

impl PropertyType {
    /// Textual form of the type (literal value or declared type text).
    pub fn as_str(&self) -> &str {
        match self {
            Self::Literal(value) | Self::Declared(value) => value,
        }
    }

    pub fn is_literal(&self) -> bool {
        matches!(self, Self::Literal(_))
    }
}

/// A public property of a class or interface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyDecl {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: PropertyType,
}

impl PropertyDecl {
    pub fn new(name: impl Into<String>, ty: PropertyType) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

/// A class declaration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassDecl {
    /// Class name, `None` for anonymous default-exported classes.
    pub name: Option<String>,
    /// Text of the `extends` target expression, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extends: Option<String>,
    /// Public, non-static properties in declaration order.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub properties: Vec<PropertyDecl>,
    /// Every comment attached to the declaration, joined with newlines.
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub docs: String,
}

impl ClassDecl {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Whether the class name ends with `suffix`.
    pub fn name_ends_with(&self, suffix: &str) -> bool {
        self.name().is_some_and(|name| name.ends_with(suffix))
    }
}

/// An interface declaration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterfaceDecl {
    pub name: String,
    /// Text of the first `extends` heritage clause, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extends: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub properties: Vec<PropertyDecl>,
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub docs: String,
}

impl InterfaceDecl {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// Declarations found in one source file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeclarationFile {
    pub path: PathBuf,
    pub classes: Vec<ClassDecl>,
    pub interfaces: Vec<InterfaceDecl>,
}

impl DeclarationFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            classes: Vec::new(),
            interfaces: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty() && self.interfaces.is_empty()
    }
}
