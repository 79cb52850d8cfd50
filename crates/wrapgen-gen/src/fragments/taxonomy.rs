use rustc_hash::FxHashSet;
use wrapgen_scan::{Command, ExceptionDescriptor};

use crate::format::{SourceWriter, string_literal};
use crate::module::{Fragment, FragmentKind, ModuleContext};

/// Declared error union of one operation.
///
/// Keeps the `@throws` names that are exceptions of the package (exact class
/// name match), drops the package's base exception, deduplicates, and keeps
/// documentation order. An empty result means the operation declares nothing.
pub fn operation_errors<'a>(
    command: &'a Command,
    exceptions: &[ExceptionDescriptor],
    service_exception_suffix: &str,
) -> Vec<&'a str> {
    let known: FxHashSet<&str> = exceptions.iter().map(|e| e.class_name.as_str()).collect();
    let mut seen = FxHashSet::default();
    command
        .declared_exception_names
        .iter()
        .map(String::as_str)
        .filter(|name| !name.ends_with(service_exception_suffix))
        .filter(|name| known.contains(name))
        .filter(|name| seen.insert(*name))
        .collect()
}

/// Error wrapper class, discriminant list and per-operation error unions.
pub fn error_taxonomy(cx: &ModuleContext<'_>) -> Fragment {
    let names = cx.names;
    let suffix = cx.package.conventions.service_exception_suffix.as_str();
    let mut out = SourceWriter::new(cx.options.indent);

    if cx.exceptions.is_empty() {
        out.line(format!("export const {} = [] as const;", names.exception_list));
    } else {
        out.block(
            format!("export const {} = [", names.exception_list),
            "] as const;",
            |w| {
                for exception in cx.exceptions {
                    w.line(format!("{},", string_literal(exception.discriminant())));
                }
            },
        );
    }
    out.blank();
    out.line(format!(
        "export type {} = (typeof {})[number];",
        names.exception_name, names.exception_list
    ));
    out.blank();

    out.block(
        format!("export type {} = {{", names.operation_errors),
        "};",
        |w| {
            for command in cx.commands {
                let errors = operation_errors(command, cx.exceptions, suffix);
                let union = if errors.is_empty() {
                    "never".to_string()
                } else {
                    errors
                        .iter()
                        .map(|name| format!("Sdk.{name}"))
                        .collect::<Vec<_>>()
                        .join(" | ")
                };
                w.line(format!("{}: {union};", command.method_name));
            }
        },
    );
    out.blank();

    let error = &names.error;
    let api = &names.api;
    out.block(
        format!("export class {error}<M extends keyof {api} = keyof {api}> extends Error {{"),
        "}",
        |w| {
            w.line(format!("readonly _tag = {} as const;", string_literal(error)));
            w.blank();
            w.block("constructor(", ") {", |w| {
                w.line("readonly cause: _ServiceBaseError,");
                w.line("readonly command: M,");
            });
            w.indent();
            w.line("super(cause.message);");
            w.line(format!("this.name = {};", string_literal(error)));
            w.dedent();
            w.line("}");
            w.blank();

            w.line("/** Narrow to one of the errors declared by this error's operation. */");
            w.block(
                format!("$is<N extends {}[M][\"name\"]>(", names.operation_errors),
                format!(
                    "): this is {error}<M> & {{ cause: Extract<{}[M], {{ name: N }}> }} {{",
                    names.operation_errors
                ),
                |w| {
                    w.line("name: N,");
                },
            );
            w.indent();
            w.line("return this.cause.name === name;");
            w.dedent();
            w.line("}");
            w.blank();

            w.line("/** Narrow to any error declared by the package. */");
            w.block(
                format!("is<N extends {}>(", names.exception_name),
                format!(
                    "): this is {error} & {{ cause: Extract<AllErrors<{api}>, {{ name: N }}> }} {{"
                ),
                |w| {
                    w.line("name: N,");
                },
            );
            w.indent();
            w.line("return this.cause.name === name;");
            w.dedent();
            w.line("}");
        },
    );

    Fragment::new(FragmentKind::ErrorTaxonomy, out.finish())
}
