//! Schema command implementation.

use wrapgen::WrapgenConfig;

use crate::cli::SchemaArgs;
use crate::error::{Result, ResultExt};
use crate::ui;

/// Print the `aws-sdk.json` schema, or write it to `--output`.
pub async fn execute(args: SchemaArgs) -> Result<()> {
    let mut schema = serde_json::to_string_pretty(&WrapgenConfig::json_schema())?;
    schema.push('\n');

    match args.output {
        Some(path) => {
            std::fs::write(&path, schema).with_path(&path)?;
            ui::success(&format!("Schema written to {}", path.display()));
        }
        None => print!("{schema}"),
    }
    Ok(())
}
