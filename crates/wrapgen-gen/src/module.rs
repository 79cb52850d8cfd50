//! Generated module representation and the package module generator.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use tracing::debug;
use wrapgen_scan::{Command, ExceptionDescriptor, ScannedPackage};

use crate::error::Result;
use crate::format::IndentStyle;
use crate::fragments;
use crate::type_names::TypeNames;

/// First line of every generated file.
pub const GENERATED_MARKER: &str = "// *****  GENERATED CODE *****";

/// Default module specifier prefix of SDK client packages.
pub const DEFAULT_PACKAGE_PREFIX: &str = "@aws-sdk/client-";

/// Which part of a module a fragment holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FragmentKind {
    Head,
    ClientWrapper,
    ErrorTaxonomy,
    Operations,
    /// Body of the combined entry module.
    Aggregate,
    /// Body of the shared helper module.
    Support,
}

/// A contiguous block of generated source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    pub kind: FragmentKind,
    pub text: String,
}

impl Fragment {
    pub fn new(kind: FragmentKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

/// Ordered fragments plus the path they are written to, relative to the
/// output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedModule {
    path: PathBuf,
    fragments: Vec<Fragment>,
}

impl GeneratedModule {
    pub fn new(path: impl Into<PathBuf>, fragments: Vec<Fragment>) -> Self {
        Self {
            path: path.into(),
            fragments,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    pub fn fragment(&self, kind: FragmentKind) -> Option<&Fragment> {
        self.fragments.iter().find(|fragment| fragment.kind == kind)
    }

    /// Full file contents: fragments in order, separated by a blank line.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for (index, fragment) in self.fragments.iter().enumerate() {
            if index > 0 {
                out.push('\n');
            }
            out.push_str(&fragment.text);
        }
        out
    }
}

/// Options shared by every generated package module.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Prefix turning a package name into its module specifier.
    pub package_prefix: String,
    /// Defaults merged under every client configuration (`region`, ...).
    pub global: IndexMap<String, serde_json::Value>,
    pub indent: IndentStyle,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            package_prefix: DEFAULT_PACKAGE_PREFIX.to_string(),
            global: IndexMap::new(),
            indent: IndentStyle::default(),
        }
    }
}

impl GenerateOptions {
    /// Module specifier of `package_name` (`@aws-sdk/client-s3`).
    pub fn specifier(&self, package_name: &str) -> String {
        format!("{}{}", self.package_prefix, package_name)
    }
}

/// Everything a fragment needs to know about the package being generated.
#[derive(Debug, Clone, Copy)]
pub struct ModuleContext<'a> {
    pub package: &'a ScannedPackage,
    pub commands: &'a [Command],
    pub exceptions: &'a [ExceptionDescriptor],
    pub names: &'a TypeNames,
    pub options: &'a GenerateOptions,
}

/// Generate the wrapper module of one package.
///
/// `commands` must be sorted and distinct by `method_name` (as produced by the
/// command extractor); the operation type map and the dispatch table are both
/// emitted from it in that order.
pub fn generate(
    package: &ScannedPackage,
    commands: &[Command],
    exceptions: &[ExceptionDescriptor],
    names: &TypeNames,
    options: &GenerateOptions,
) -> Result<GeneratedModule> {
    let cx = ModuleContext {
        package,
        commands,
        exceptions,
        names,
        options,
    };

    fragments::validate(&cx)?;

    let module = GeneratedModule::new(
        format!("{}.ts", package.package_name),
        vec![
            fragments::head(&cx),
            fragments::client_wrapper(&cx),
            fragments::error_taxonomy(&cx),
            fragments::operations(&cx)?,
        ],
    );

    debug!(
        package = %package.package_name,
        commands = commands.len(),
        exceptions = exceptions.len(),
        "generated package module"
    );

    Ok(module)
}
