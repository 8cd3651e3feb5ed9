//! Dataset and options loading.

use std::fs;
use std::path::Path;
use std::path::PathBuf;

use datatable_lib::model::Record;
use datatable_lib::options::TableOptions;
use log::{debug, info};

use crate::error::CliError;

/// Loads records from a JSON file.
///
/// The file holds either an array of records or an object with the array
/// under `records_key` (e.g. `{"users": [...]}`).
pub fn load_records(path: &Path, records_key: Option<&str>) -> Result<Vec<Record>, CliError> {
    let text = fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let records = parse_records(&text, records_key).map_err(|err| match err {
        ParseError::Json(source) => CliError::Json {
            path: path.to_path_buf(),
            source,
        },
        ParseError::NoRecords => CliError::NoRecords {
            path: path.to_path_buf(),
            key: records_key.map(str::to_string),
        },
    })?;
    info!("Loaded {} records from {}", records.len(), path.display());
    Ok(records)
}

#[derive(Debug)]
enum ParseError {
    Json(serde_json::Error),
    NoRecords,
}

fn parse_records(text: &str, records_key: Option<&str>) -> Result<Vec<Record>, ParseError> {
    let mut document: serde_json::Value = serde_json::from_str(text).map_err(ParseError::Json)?;
    let array = match records_key {
        Some(key) => document.get_mut(key).map(serde_json::Value::take),
        None => Some(document),
    };
    match array {
        Some(array @ serde_json::Value::Array(_)) => serde_json::from_value(array).map_err(ParseError::Json),
        _ => Err(ParseError::NoRecords),
    }
}

/// Loads table options.
///
/// An explicit path must exist. Without one `default_file` is used when
/// present, otherwise built-in defaults.
pub fn load_options(path: Option<&Path>, default_file: Option<PathBuf>) -> Result<TableOptions, CliError> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => match default_file.filter(|p| p.exists()) {
            Some(default) => default,
            None => {
                debug!("No options file, using defaults");
                return Ok(TableOptions::default());
            }
        },
    };

    let text = fs::read_to_string(&path).map_err(|source| CliError::Read {
        path: path.clone(),
        source,
    })?;
    let options = serde_json::from_str(&text).map_err(|source| CliError::Json {
        path: path.clone(),
        source,
    })?;
    info!("Loaded options from {}", path.display());
    Ok(options)
}

/// Fills in display keys from the first record when none are configured.
///
/// Record fields are unordered, so the keys are sorted by name.
pub fn infer_display_keys(options: &mut TableOptions, records: &[Record]) {
    if !options.display_keys.is_empty() {
        return;
    }
    let Some(first) = records.first() else { return };
    let mut keys: Vec<String> = first.fields().keys().cloned().collect();
    keys.sort();
    debug!("Inferred display keys {:?}", keys);
    options.display_keys = keys;
}
