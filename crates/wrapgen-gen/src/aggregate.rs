//! Combined entry module over every generated package.

use indexmap::IndexSet;
use rustc_hash::FxHashSet;
use serde::Serialize;
use wrapgen_scan::ScannedPackage;

use crate::error::{GenError, Result};
use crate::format::{IndentStyle, SourceWriter, string_literal};
use crate::module::{Fragment, FragmentKind, GENERATED_MARKER, GenerateOptions, GeneratedModule};
use crate::type_names::TypeNames;

/// Path of the entry module, relative to the output directory.
pub const INDEX_PATH: &str = "index.ts";

/// What the entry module needs to know about one generated package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackageSummary {
    pub package_name: String,
    /// Namespace the package module is imported and re-exported as.
    pub alias: String,
    pub client_tag: String,
    pub config_interface: String,
    /// Module specifier of the SDK package itself.
    pub specifier: String,
}

impl PackageSummary {
    pub fn new(package: &ScannedPackage, names: &TypeNames, options: &GenerateOptions) -> Self {
        Self {
            package_name: package.package_name.clone(),
            alias: names.alias.clone(),
            client_tag: names.client_tag.clone(),
            config_interface: package.config_interface_name().to_string(),
            specifier: options.specifier(&package.package_name),
        }
    }

    /// Specifier of the generated package module, relative to the entry module.
    pub fn module_import(&self) -> String {
        format!("./{}.js", self.package_name)
    }
}

/// Generate `index.ts` with packages in the given order.
///
/// The order of `packages` is the requested order and is preserved in every
/// import, re-export and layer list.
pub fn generate_index(packages: &[PackageSummary], indent: IndentStyle) -> Result<GeneratedModule> {
    if packages.is_empty() {
        return Err(GenError::aggregation("no packages were generated"));
    }

    let mut aliases = FxHashSet::default();
    for package in packages {
        if !aliases.insert(package.alias.as_str()) {
            return Err(GenError::aggregation(format!(
                "duplicate package alias '{}' (from '{}')",
                package.alias, package.package_name
            )));
        }
    }

    // Config interfaces share names across packages only by accident; later
    // duplicates are imported under an alias.
    let mut imported = IndexSet::new();
    let config_types: Vec<String> = packages
        .iter()
        .map(|package| {
            if imported.insert(package.config_interface.as_str()) {
                package.config_interface.clone()
            } else {
                format!("{}_{}", package.config_interface, package.alias)
            }
        })
        .collect();

    let mut head = SourceWriter::new(indent);
    head.line(GENERATED_MARKER);
    head.line(r#"import * as Layer from "effect/Layer";"#);
    for (package, config_type) in packages.iter().zip(&config_types) {
        let binding = if *config_type == package.config_interface {
            config_type.clone()
        } else {
            format!("{} as {config_type}", package.config_interface)
        };
        head.line(format!(
            "import type {{ {binding} }} from {};",
            string_literal(&package.specifier)
        ));
    }
    for package in packages {
        head.line(format!(
            "import * as {} from {};",
            package.alias,
            string_literal(&package.module_import())
        ));
    }

    let mut body = SourceWriter::new(indent);
    let exports: Vec<&str> = packages.iter().map(|p| p.alias.as_str()).collect();
    body.line(format!("export {{ {} }};", exports.join(", ")));
    body.blank();

    body.block("export const AllClientsDefault = Layer.mergeAll(", ");", |w| {
        for package in packages {
            w.line(format!("{}.{}.Default(),", package.alias, package.client_tag));
        }
    });
    body.blank();

    body.block("export const makeClients = (config?: {", "}) =>", |w| {
        for (package, config_type) in packages.iter().zip(&config_types) {
            w.line(format!("{}?: {config_type};", package.alias));
        }
    });
    body.indent();
    body.block("Layer.mergeAll(", ");", |w| {
        for package in packages {
            w.line(format!(
                "{alias}.{tag}.Default(config?.{alias}),",
                alias = package.alias,
                tag = package.client_tag
            ));
        }
    });
    body.dedent();

    Ok(GeneratedModule::new(
        INDEX_PATH,
        vec![
            Fragment::new(FragmentKind::Head, head.finish()),
            Fragment::new(FragmentKind::Aggregate, body.finish()),
        ],
    ))
}
