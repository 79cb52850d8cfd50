//! Where package declarations come from.

use std::fs;
use std::path::{Path, PathBuf};

use rustc_hash::FxHashMap;
use tracing::debug;
use walkdir::WalkDir;

use crate::declarations::DeclarationFile;
use crate::error::{Result, ScanError};
use crate::parser::parse_declarations;

/// Provides every declaration file published by a package.
///
/// Implementations must return files in a stable order so that
/// "first match wins" anchor resolution is reproducible.
pub trait DeclarationSource: Send + Sync {
    fn load(&self, package: &str) -> Result<Vec<DeclarationFile>>;
}

/// Reads declarations from an installed `node_modules` tree.
///
/// A package named `s3` with the default prefix lives at
/// `<root>/@aws-sdk/client-s3`; every `*.ts` file below it is parsed.
#[derive(Debug, Clone)]
pub struct NodeModulesSource {
    root: PathBuf,
    package_prefix: String,
}

impl NodeModulesSource {
    pub fn new(root: impl Into<PathBuf>, package_prefix: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            package_prefix: package_prefix.into(),
        }
    }

    /// Directory holding the published files of `package`.
    pub fn package_dir(&self, package: &str) -> PathBuf {
        self.root.join(format!("{}{}", self.package_prefix, package))
    }

    fn declaration_paths(&self, dir: &Path) -> Vec<PathBuf> {
        WalkDir::new(dir)
            .sort_by_file_name()
            .into_iter()
            // nested node_modules belong to other packages
            .filter_entry(|entry| entry.depth() == 0 || entry.file_name() != "node_modules")
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .map(|entry| entry.into_path())
            .filter(|path| is_declaration_path(path))
            .collect()
    }
}

impl DeclarationSource for NodeModulesSource {
    fn load(&self, package: &str) -> Result<Vec<DeclarationFile>> {
        let dir = self.package_dir(package);
        if !dir.is_dir() {
            return Err(ScanError::PackageNotFound {
                package: package.to_string(),
                location: dir,
            });
        }

        let paths = self.declaration_paths(&dir);
        if paths.is_empty() {
            return Err(ScanError::PackageNotFound {
                package: package.to_string(),
                location: dir,
            });
        }

        debug!(package, files = paths.len(), "parsing declaration files");

        paths
            .iter()
            .map(|path| {
                let source = fs::read_to_string(path).map_err(|error| ScanError::Io {
                    path: path.clone(),
                    error,
                })?;
                parse_declarations(path, &source)
            })
            .collect()
    }
}

fn is_declaration_path(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.ends_with(".ts") && !name.ends_with(".tsx"))
}

/// Declaration sources held in memory, keyed by package name.
///
/// Files are parsed with the same parser as [`NodeModulesSource`]; this is
/// mainly useful for tests and for embedding the generator.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    packages: FxHashMap<String, Vec<(PathBuf, String)>>,
}

impl InMemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file to `package`. Files are returned in insertion order.
    pub fn with_file(
        mut self,
        package: impl Into<String>,
        path: impl Into<PathBuf>,
        source: impl Into<String>,
    ) -> Self {
        self.add_file(package, path, source);
        self
    }

    pub fn add_file(
        &mut self,
        package: impl Into<String>,
        path: impl Into<PathBuf>,
        source: impl Into<String>,
    ) {
        self.packages
            .entry(package.into())
            .or_default()
            .push((path.into(), source.into()));
    }
}

impl DeclarationSource for InMemorySource {
    fn load(&self, package: &str) -> Result<Vec<DeclarationFile>> {
        let files = self
            .packages
            .get(package)
            .filter(|files| !files.is_empty())
            .ok_or_else(|| ScanError::PackageNotFound {
                package: package.to_string(),
                location: PathBuf::from("<memory>"),
            })?;

        files
            .iter()
            .map(|(path, source)| parse_declarations(path, source))
            .collect()
    }
}
