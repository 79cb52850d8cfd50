//! Shared helper module imported by every package module.

use crate::format::{IndentStyle, SourceWriter};
use crate::module::{Fragment, FragmentKind, GENERATED_MARKER, GeneratedModule};

/// Path of the helper module, relative to the output directory.
pub const SUPPORT_PATH: &str = "internal/utils.ts";

/// Specifier package modules use to import the helper module.
pub const SUPPORT_IMPORT: &str = "./internal/utils.js";

/// Generate `internal/utils.ts`.
pub fn generate_support(indent: IndentStyle) -> GeneratedModule {
    let mut out = SourceWriter::new(indent);
    out.line(GENERATED_MARKER);
    out.blank();
    out.line("/** Operation table shape: key -> [input, output, declared errors]. */");
    out.line("export type AnyApi = Record<string, readonly [unknown, unknown, unknown]>;");
    out.blank();
    out.line("/** Union of every declared error of every operation of `Api`. */");
    out.line("export type AllErrors<Api extends AnyApi> = Api[keyof Api][2];");
    out.blank();
    out.line("export type OperationInput<Api extends AnyApi, M extends keyof Api> = Api[M][0];");
    out.blank();
    out.line("export type OperationOutput<Api extends AnyApi, M extends keyof Api> = Api[M][1];");

    GeneratedModule::new(
        SUPPORT_PATH,
        vec![Fragment::new(FragmentKind::Support, out.finish())],
    )
}
