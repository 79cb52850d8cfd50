use crate::format::{SourceWriter, string_literal};
use crate::module::{Fragment, FragmentKind, GENERATED_MARKER, ModuleContext};
use crate::support::SUPPORT_IMPORT;

/// Marker line, runtime helper imports and the package imports.
pub fn head(cx: &ModuleContext<'_>) -> Fragment {
    let specifier = string_literal(&cx.options.specifier(&cx.package.package_name));
    let mut out = SourceWriter::new(cx.options.indent);

    out.line(GENERATED_MARKER);
    out.line(r#"import * as Context from "effect/Context";"#);
    out.line(r#"import * as Effect from "effect/Effect";"#);
    out.line(r#"import * as Layer from "effect/Layer";"#);
    out.line(format!("import type * as Sdk from {specifier};"));
    out.block("import {", format!("}} from {specifier};"), |w| {
        w.line(format!("{} as _SdkClient,", cx.package.client_class_name()));
        w.line(format!(
            "{} as _ServiceBaseError,",
            cx.package.exception_base_class_name()
        ));
        for command in cx.commands {
            w.line(format!("{},", command.class_name));
        }
    });
    out.line(format!(
        "import type {{ AllErrors }} from {};",
        string_literal(SUPPORT_IMPORT)
    ));

    Fragment::new(FragmentKind::Head, out.finish())
}
