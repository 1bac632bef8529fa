use anyhow::{Context, Result, bail};
use rfqflow_core::WorkflowRecord;
use rfqflow_core::record::{records_from_json_str, records_from_yaml_str};
use std::io::Read;
use std::path::Path;
use tracing::info;

/// Reads one record or an array of records. `-` reads JSON from stdin.
pub fn load<P: AsRef<Path>>(input: P) -> Result<Vec<WorkflowRecord>> {
    let input = input.as_ref();

    let records = if input == Path::new("-") {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .context("Failed to read records from stdin")?;
        records_from_json_str(&content).context("Invalid JSON records on stdin")?
    } else {
        read_file(input)?
    };

    info!(count = records.len(), "loaded records");

    Ok(records)
}

fn read_file(file_path: &Path) -> Result<Vec<WorkflowRecord>> {
    if !file_path.exists() {
        bail!("Record file not found: {}", file_path.display());
    }

    info!(path = %file_path.display(), "loading records");

    let content = std::fs::read_to_string(file_path).context("Failed to read record file")?;

    let records = match file_path.extension().and_then(|s| s.to_str()) {
        Some("json") => records_from_json_str(&content).context("Invalid JSON record file")?,
        Some("yaml") | Some("yml") => {
            records_from_yaml_str(&content).context("Invalid YAML record file")?
        }
        _ => {
            bail!("Unsupported file format. Use .json, .yaml, or .yml");
        }
    };

    Ok(records)
}
