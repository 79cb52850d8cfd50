//! Exception model derived from classes extending an exception.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::declarations::{ClassDecl, PropertyDecl, PropertyType};

/// An exception class declared by a package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExceptionDescriptor {
    /// Class name without trailing `Exception` / `Error` (`NoSuchKey`).
    pub base_name: String,
    pub class_name: String,
    /// Text of the `extends` target.
    pub extends_from: String,
    pub properties: Vec<PropertyDecl>,
}

impl ExceptionDescriptor {
    /// Runtime discriminant of the exception: the literal value of its `name`
    /// property when declared as a literal, the class name otherwise.
    pub fn discriminant(&self) -> &str {
        self.properties
            .iter()
            .find(|prop| prop.name == "name")
            .and_then(|prop| match &prop.ty {
                PropertyType::Literal(value) => Some(value.as_str()),
                PropertyType::Declared(_) => None,
            })
            .unwrap_or(&self.class_name)
    }
}

/// Derive the deduplicated exception list of a package.
///
/// `service_exception_suffix` excludes the package's own base exception
/// (`S3ServiceException`), which is too generic to act as a discriminant.
pub fn extract_exceptions(
    classes: &[ClassDecl],
    service_exception_suffix: &str,
) -> Vec<ExceptionDescriptor> {
    let mut seen = FxHashSet::default();
    classes
        .iter()
        .filter_map(|class| exception_from_class(class, service_exception_suffix))
        .filter(|exception| seen.insert(exception.class_name.clone()))
        .collect()
}

fn exception_from_class(
    class: &ClassDecl,
    service_exception_suffix: &str,
) -> Option<ExceptionDescriptor> {
    let extends_from = class.extends.as_deref()?;
    if !extends_from.ends_with("Exception") {
        return None;
    }
    let class_name = class.name()?;
    if class_name.ends_with(service_exception_suffix) {
        return None;
    }

    Some(ExceptionDescriptor {
        base_name: base_name(class_name),
        class_name: class_name.to_string(),
        extends_from: extends_from.to_string(),
        properties: class.properties.clone(),
    })
}

fn base_name(class_name: &str) -> String {
    let name = class_name.strip_suffix("Exception").unwrap_or(class_name);
    let name = name.strip_suffix("Error").unwrap_or(name);
    name.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exception(name: &str, extends: &str, props: Vec<PropertyDecl>) -> ClassDecl {
        ClassDecl {
            name: Some(name.to_string()),
            extends: Some(extends.to_string()),
            properties: props,
            docs: String::new(),
        }
    }

    #[test]
    fn keeps_classes_extending_exceptions() {
        let classes = vec![
            exception("NoSuchKey", "__BaseException", vec![]),
            exception("S3ServiceException", "__ServiceException", vec![]),
            exception("GetObjectCommand", "GetObjectCommand_base", vec![]),
            ClassDecl::named("S3Client"),
        ];
        let exceptions = extract_exceptions(&classes, "ServiceException");
        let names: Vec<&str> = exceptions.iter().map(|e| e.class_name.as_str()).collect();
        assert_eq!(names, vec!["NoSuchKey"]);
        assert_eq!(exceptions[0].extends_from, "__BaseException");
    }

    #[test]
    fn strips_exception_then_error() {
        assert_eq!(base_name("InvalidRequestException"), "InvalidRequest");
        assert_eq!(base_name("InternalServerError"), "InternalServer");
        assert_eq!(base_name("NotFoundErrorException"), "NotFound");
        assert_eq!(base_name("NoSuchKey"), "NoSuchKey");
    }

    #[test]
    fn dedupes_by_class_name_first_wins() {
        let classes = vec![
            exception(
                "NoSuchKey",
                "__BaseException",
                vec![PropertyDecl::new("name", PropertyType::Literal("NoSuchKey".into()))],
            ),
            exception("NoSuchKey", "S3ServiceException", vec![]),
        ];
        let exceptions = extract_exceptions(&classes, "ServiceException");
        assert_eq!(exceptions.len(), 1);
        assert_eq!(exceptions[0].extends_from, "__BaseException");
    }

    #[test]
    fn discriminant_prefers_literal_name() {
        let literal = ExceptionDescriptor {
            base_name: "Throttling".into(),
            class_name: "ThrottlingException".into(),
            extends_from: "__BaseException".into(),
            properties: vec![PropertyDecl::new(
                "name",
                PropertyType::Literal("ThrottlingException".into()),
            )],
        };
        assert_eq!(literal.discriminant(), "ThrottlingException");

        let widened = ExceptionDescriptor {
            properties: vec![PropertyDecl::new("name", PropertyType::Declared("string".into()))],
            class_name: "Custom".into(),
            ..literal
        };
        assert_eq!(widened.discriminant(), "Custom");
    }
}
