//! Writing generated modules to disk.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;
use wrapgen_gen::GeneratedModule;

use crate::error::{Result, RunError};
use crate::orchestrator::RunReport;

/// Write every module of `report` below `out_dir`, creating directories as
/// needed. Returns the written paths in write order.
pub fn write_report(report: &RunReport, out_dir: &Path) -> Result<Vec<PathBuf>> {
    report
        .modules()
        .map(|module| write_module(module, out_dir))
        .collect()
}

/// Write one module below `out_dir`.
pub fn write_module(module: &GeneratedModule, out_dir: &Path) -> Result<PathBuf> {
    let path = out_dir.join(module.path());
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| RunError::Write {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    fs::write(&path, module.render()).map_err(|source| RunError::Write {
        path: path.clone(),
        source,
    })?;
    debug!(path = %path.display(), "wrote module");
    Ok(path)
}
