use std::fs;

use anyhow::{Context, Result};
use toml::{Table, Value};

use skeleton_forge::BuildConfig;

use crate::cli::GeometryOptions;

/// Merges the `--params` document with per-value command-line overrides.
pub fn build_config(opts: &GeometryOptions) -> Result<BuildConfig> {
    let mut table = match &opts.params {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("Failed to read parameters: {}", path.display()))?;
            text.parse::<Table>()
                .with_context(|| format!("Failed to parse parameters: {}", path.display()))?
        }
        None => Table::new(),
    };

    if let Some(cc) = opts.cc_bond {
        set(&mut table, "bonds", "cc", Value::Float(cc));
    }
    if let Some(ch) = opts.ch_bond {
        set(&mut table, "bonds", "ch", Value::Float(ch));
    }
    if let Some(prefix) = &opts.hydrogen_prefix {
        set(&mut table, "naming", "hydrogen_prefix", Value::String(prefix.clone()));
    }

    if table.is_empty() {
        return Ok(BuildConfig::default());
    }
    Ok(BuildConfig::with_params(table.to_string()))
}

fn set(table: &mut Table, section: &str, key: &str, value: Value) {
    let entry = table
        .entry(section)
        .or_insert(Value::Table(Table::new()));
    if !entry.is_table() {
        *entry = Value::Table(Table::new());
    }
    if let Value::Table(section) = entry {
        section.insert(key.to_string(), value);
    }
}
