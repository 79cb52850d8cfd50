//! Operation model derived from command classes.

use std::sync::LazyLock;

use regex::Regex;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::declarations::ClassDecl;
use crate::names::{pretty_operation_name, snake_to_pascal};

// `@throws {@link NoSuchKey} (client fault)`
static THROWS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"@throws\s+\{@link\s+([^}]+)\}").expect("throws pattern is valid")
});

/// One operation of a package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Command {
    /// Normalized operation key (`list_objects_v2`).
    pub method_name: String,
    /// Command class name without the command suffix (`ListObjectsV2`).
    pub origin_name: String,
    /// Name of the command class itself (`ListObjectsV2Command`).
    pub class_name: String,
    /// Name of the command's input type (`ListObjectsV2CommandInput`).
    pub input_type_name: String,
    /// Names referenced by `@throws {@link ...}` tags, in document order.
    pub declared_exception_names: Vec<String>,
}

impl Command {
    /// Name of the command's output type (`ListObjectsV2CommandOutput`).
    pub fn output_type_name(&self) -> String {
        format!("{}Output", self.class_name)
    }
}

/// Derive the sorted, deduplicated operation list of a package.
///
/// Duplicates by `method_name` keep the first class in scan order; the result
/// is sorted by `method_name` so generated output does not depend on the
/// order files were enumerated in.
pub fn extract_commands(classes: &[ClassDecl], command_suffix: &str) -> Vec<Command> {
    let mut seen = FxHashSet::default();
    let mut commands: Vec<Command> = classes
        .iter()
        .filter_map(|class| command_from_class(class, command_suffix))
        .filter(|command| seen.insert(command.method_name.clone()))
        .collect();

    commands.sort_by(|a, b| a.method_name.cmp(&b.method_name));
    commands
}

fn command_from_class(class: &ClassDecl, command_suffix: &str) -> Option<Command> {
    let class_name = class.name()?;
    let origin_name = class_name.strip_suffix(command_suffix)?;
    if origin_name.is_empty() {
        return None;
    }

    Some(Command {
        method_name: pretty_operation_name(origin_name),
        origin_name: origin_name.to_string(),
        class_name: class_name.to_string(),
        input_type_name: format!("{}{}Input", snake_to_pascal(origin_name), command_suffix),
        declared_exception_names: declared_exceptions(&class.docs),
    })
}

/// Every `@throws {@link Name}` reference in `docs`, in document order.
pub fn declared_exceptions(docs: &str) -> Vec<String> {
    THROWS
        .captures_iter(docs)
        .filter_map(|captures| captures.get(1))
        .map(|name| name.as_str().trim().to_string())
        .filter(|name| !name.is_empty())
        .collect()
}
