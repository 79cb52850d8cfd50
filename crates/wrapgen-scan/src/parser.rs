//! OXC façade for reading declaration files.
//!
//! Parses one `.d.ts` (or `.ts`) source and returns the top-level class and
//! interface declarations it contains, exported or not.

use std::path::Path;

use oxc_allocator::Allocator;
use oxc_ast::ast::{
    Class, ClassElement, Comment, Declaration, ExportDefaultDeclarationKind, PropertyKey,
    Statement, TSAccessibility, TSInterfaceDeclaration, TSLiteral, TSSignature, TSType,
    TSTypeAnnotation,
};
use oxc_parser::Parser;
use oxc_span::{GetSpan, SourceType};
use rustc_hash::FxHashMap;

use crate::declarations::{ClassDecl, DeclarationFile, InterfaceDecl, PropertyDecl, PropertyType};
use crate::error::{Result, ScanError};

/// Parse a declaration file into structural facts.
///
/// The source type is inferred from `path` and falls back to TypeScript.
/// Any parser diagnostic fails the whole file.
pub fn parse_declarations(path: &Path, source: &str) -> Result<DeclarationFile> {
    let source_type = SourceType::from_path(path).unwrap_or(SourceType::ts());
    let allocator = Allocator::default();
    let parsed = Parser::new(&allocator, source, source_type).parse();

    if !parsed.errors.is_empty() {
        let diagnostics: Vec<String> = parsed.errors.iter().map(|err| err.to_string()).collect();
        return Err(ScanError::parse_error(path.to_path_buf(), &diagnostics));
    }

    let program = parsed.program;
    let comments = CommentIndex::new(program.comments.iter(), source);
    let mut file = DeclarationFile::new(path);

    for statement in program.body.iter() {
        let docs = comments.leading(statement.span().start);
        match statement {
            Statement::ExportNamedDeclaration(export) => match &export.declaration {
                Some(Declaration::ClassDeclaration(class)) => {
                    file.classes.push(class_decl(class, source, docs));
                }
                Some(Declaration::TSInterfaceDeclaration(interface)) => {
                    file.interfaces.push(interface_decl(interface, source, docs));
                }
                _ => {}
            },
            Statement::ExportDefaultDeclaration(export) => {
                if let ExportDefaultDeclarationKind::ClassDeclaration(class) = &export.declaration {
                    file.classes.push(class_decl(class, source, docs));
                }
            }
            Statement::ClassDeclaration(class) => {
                file.classes.push(class_decl(class, source, docs));
            }
            Statement::TSInterfaceDeclaration(interface) => {
                file.interfaces.push(interface_decl(interface, source, docs));
            }
            _ => {}
        }
    }

    Ok(file)
}

/// Comments grouped by the start offset of the node they are attached to.
struct CommentIndex<'s> {
    source: &'s str,
    by_node: FxHashMap<u32, Vec<(u32, u32)>>,
}

impl<'s> CommentIndex<'s> {
    fn new<'c>(comments: impl IntoIterator<Item = &'c Comment>, source: &'s str) -> Self {
        let mut by_node: FxHashMap<u32, Vec<(u32, u32)>> = FxHashMap::default();
        for comment in comments {
            by_node
                .entry(comment.attached_to)
                .or_default()
                .push((comment.span.start, comment.span.end));
        }
        Self { source, by_node }
    }

    fn leading(&self, node_start: u32) -> String {
        self.by_node
            .get(&node_start)
            .map(|spans| {
                spans
                    .iter()
                    .map(|&(start, end)| &self.source[start as usize..end as usize])
                    .collect::<Vec<_>>()
                    .join("\n")
            })
            .unwrap_or_default()
    }
}

fn class_decl(class: &Class<'_>, source: &str, docs: String) -> ClassDecl {
    let properties = class
        .body
        .body
        .iter()
        .filter_map(|element| match element {
            ClassElement::PropertyDefinition(prop)
                if !prop.r#static && is_public(prop.accessibility) =>
            {
                property_decl(&prop.key, prop.type_annotation.as_deref(), source)
            }
            _ => None,
        })
        .collect();

    ClassDecl {
        name: class.id.as_ref().map(|id| id.name.to_string()),
        extends: class
            .super_class
            .as_ref()
            .map(|expr| expr.span().source_text(source).to_string()),
        properties,
        docs,
    }
}

fn interface_decl(interface: &TSInterfaceDeclaration<'_>, source: &str, docs: String) -> InterfaceDecl {
    let properties = interface
        .body
        .body
        .iter()
        .filter_map(|signature| match signature {
            TSSignature::TSPropertySignature(sig) => {
                property_decl(&sig.key, sig.type_annotation.as_deref(), source)
            }
            _ => None,
        })
        .collect();

    InterfaceDecl {
        name: interface.id.name.to_string(),
        extends: interface
            .extends
            .first()
            .map(|heritage| heritage.expression.span().source_text(source).to_string()),
        properties,
        docs,
    }
}

fn property_decl(
    key: &PropertyKey<'_>,
    annotation: Option<&TSTypeAnnotation<'_>>,
    source: &str,
) -> Option<PropertyDecl> {
    if matches!(key, PropertyKey::PrivateIdentifier(_)) {
        return None;
    }
    let name = key.static_name()?.to_string();
    let ty = annotation
        .map(|annotation| property_type(&annotation.type_annotation, source))
        .unwrap_or_else(|| PropertyType::Declared("any".to_string()));
    Some(PropertyDecl::new(name, ty))
}

fn property_type(ty: &TSType<'_>, source: &str) -> PropertyType {
    match ty {
        TSType::TSLiteralType(literal) => match &literal.literal {
            TSLiteral::StringLiteral(string) => PropertyType::Literal(string.value.to_string()),
            _ => PropertyType::Literal(literal.span.source_text(source).to_string()),
        },
        // `name: `Foo`` holds the same value as `name: "Foo"`
        TSType::TSTemplateLiteralType(template) if template.types.is_empty() => {
            let text = template
                .quasis
                .iter()
                .map(|quasi| {
                    quasi
                        .value
                        .cooked
                        .as_ref()
                        .map_or(quasi.value.raw.as_str(), |cooked| cooked.as_str())
                })
                .collect::<String>();
            PropertyType::Literal(text)
        }
        other => PropertyType::Declared(other.span().source_text(source).to_string()),
    }
}

fn is_public(accessibility: Option<TSAccessibility>) -> bool {
    !matches!(
        accessibility,
        Some(TSAccessibility::Private | TSAccessibility::Protected)
    )
}
