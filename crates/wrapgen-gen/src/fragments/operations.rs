use indexmap::IndexSet;

use crate::error::{GenError, Result};
use crate::format::SourceWriter;
use crate::module::{Fragment, FragmentKind, ModuleContext};

/// Operation type map and the dispatch table.
///
/// Both tables are written from the same command list; their key sets are
/// compared before the fragment is returned.
pub fn operations(cx: &ModuleContext<'_>) -> Result<Fragment> {
    let names = cx.names;
    let mut api_keys = IndexSet::with_capacity(cx.commands.len());
    let mut factory_keys = IndexSet::with_capacity(cx.commands.len());
    let mut duplicates = Vec::new();
    let mut out = SourceWriter::new(cx.options.indent);

    out.block(format!("export type {} = {{", names.api), "};", |w| {
        for command in cx.commands {
            if !api_keys.insert(command.method_name.as_str()) {
                duplicates.push(command.method_name.clone());
            }
            w.block(format!("{}: [", command.method_name), "];", |w| {
                w.line(format!("Sdk.{},", command.input_type_name));
                w.line(format!("Sdk.{},", command.output_type_name()));
                w.line(format!(
                    "{}[\"{}\"],",
                    names.operation_errors, command.method_name
                ));
            });
        }
    });
    out.blank();

    out.block(
        format!("export const {} = {{", names.command_factory),
        "} as const;",
        |w| {
            for command in cx.commands {
                factory_keys.insert(command.method_name.as_str());
                w.line(format!("{}: {},", command.method_name, command.class_name));
            }
        },
    );

    if !duplicates.is_empty() || api_keys != factory_keys {
        let mut keys: Vec<String> = api_keys
            .symmetric_difference(&factory_keys)
            .map(|key| key.to_string())
            .collect();
        keys.extend(duplicates);
        return Err(GenError::KeyMismatch {
            package: cx.package.package_name.clone(),
            keys,
        });
    }

    Ok(Fragment::new(FragmentKind::Operations, out.finish()))
}
