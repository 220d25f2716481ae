use anyhow::{Context, Result};
use std::path::Path;

use crate::models::{validate_records, NumberRecord};

pub const DEFAULT_DATASET: &str = "assets/num-data.json";

pub fn parse_dataset(json: &str) -> Result<Vec<NumberRecord>> {
    let records: Vec<NumberRecord> =
        serde_json::from_str(json).context("Fichier de numéros invalide")?;
    validate_records(&records)?;
    Ok(records)
}

pub fn load_dataset(path: &Path) -> Result<Vec<NumberRecord>> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Impossible de lire {:?}", path))?;
    let records = parse_dataset(&json).with_context(|| format!("Chargement de {:?}", path))?;
    log::info!("{} numéros chargés depuis {:?}", records.len(), path);
    Ok(records)
}

pub fn write_dataset(path: &Path, records: &[NumberRecord]) -> Result<()> {
    let json = serde_json::to_string_pretty(records)?;
    std::fs::write(path, json).with_context(|| format!("Impossible d'écrire {:?}", path))?;
    Ok(())
}
