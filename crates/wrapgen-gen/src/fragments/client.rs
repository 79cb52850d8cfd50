use crate::format::{SourceWriter, object_key, string_literal};
use crate::module::{Fragment, FragmentKind, ModuleContext};

/// Context tag around the SDK client plus the `make` dispatch function.
///
/// Dispatch outcomes: the raw command output on success, a typed `<P>Error`
/// when the thrown value is an instance of the package's base exception, and
/// an Effect defect carrying the thrown value unchanged for anything else.
pub fn client_wrapper(cx: &ModuleContext<'_>) -> Fragment {
    let names = cx.names;
    let tag = &names.client_tag;
    let api = &names.api;
    let config = format!("Sdk.{}", cx.package.config_interface_name());
    let mut out = SourceWriter::new(cx.options.indent);

    if cx.options.global.is_empty() {
        out.line(format!("const globalDefaults: {config} = {{}};"));
    } else {
        out.block(format!("const globalDefaults: {config} = {{"), "};", |w| {
            for (key, value) in &cx.options.global {
                w.line(format!("{}: {},", object_key(key), value));
            }
        });
    }
    out.blank();

    out.block(
        format!(
            "export class {tag} extends Context.Tag({})<{tag}, _SdkClient>() {{",
            string_literal(tag)
        ),
        "}",
        |w| {
            w.line(format!("static Default = (config?: {config}) =>"));
            w.indent();
            w.block("Layer.effect(", ");", |w| {
                w.line(format!("{tag},"));
                w.line("Effect.sync(() => new _SdkClient({ ...globalDefaults, ...config })),");
            });
            w.dedent();
        },
    );
    out.blank();

    out.block(
        format!(
            "export const make = Effect.fn({})(function* <M extends keyof {api}>(",
            string_literal(&format!("{tag}.make"))
        ),
        "});",
        |w| {
            w.line("actionName: M,");
            w.line(format!("actionInput: {api}[M][0],"));
            w.dedent();
            w.line(") {");
            w.indent();
            w.line(format!("const client = yield* {tag};"));
            w.line(format!(
                "const CommandCtor = {}[actionName] as unknown as new (input: {api}[M][0]) => any;",
                names.command_factory
            ));
            w.block("return yield* Effect.tryPromise({", "}).pipe(", |w| {
                w.line(format!(
                    "try: () => client.send(new CommandCtor(actionInput)) as Promise<{api}[M][1]>,"
                ));
                w.block("catch: (error) => {", "},", |w| {
                    w.block("if (error instanceof _ServiceBaseError) {", "}", |w| {
                        w.line(format!("return new {}(error, actionName);", names.error));
                    });
                    w.line(r##"return { _tag: "#Defect" as const, error };"##);
                });
            });
            w.indent();
            w.line(r##"Effect.catchTag("#Defect", (defect) => Effect.die(defect.error)),"##);
            w.dedent();
            w.line(");");
        },
    );

    Fragment::new(FragmentKind::ClientWrapper, out.finish())
}
