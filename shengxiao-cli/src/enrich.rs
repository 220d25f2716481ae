use anyhow::{Context, Result};
use std::path::Path;

use shengxiao_db::dataset::{load_dataset, write_dataset};
use shengxiao_db::enrich::{enrich_records, EnrichReport};

/// Lit le fichier, pose les attributs zodiacaux et réécrit le fichier entier.
pub fn enrich_file(path: &Path) -> Result<EnrichReport> {
    let mut records = load_dataset(path)?;
    let report = enrich_records(&mut records);
    write_dataset(path, &records)
        .with_context(|| format!("Échec de la réécriture de {:?}", path))?;
    log::info!(
        "{} numéros enrichis, {} ignorés",
        report.enriched,
        report.skipped
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    const RAW: &str = r#"[
  {"id": 1, "oddAndEven": "odd", "waveColor": "red", "chineseZodiac": "snake", "tail": 1, "label": "一"},
  {"id": 2, "oddAndEven": "even", "waveColor": "red", "chineseZodiac": "kirin"},
  {"id": 3, "oddAndEven": "odd", "waveColor": "blue", "chineseZodiac": "rabbit", "fiveElements": "gold"}
]"#;

    #[test]
    fn test_enrich_file_rewrites_in_place() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("num-data.json");
        std::fs::write(&path, RAW).unwrap();

        let report = enrich_file(&path).unwrap();
        assert_eq!(report.total_records, 3);
        assert_eq!(report.enriched, 2);
        assert_eq!(report.skipped, 1);

        let records = load_dataset(&path).unwrap();
        assert_eq!(records[0].poultry_beast.as_deref(), Some("野兽"));
        assert_eq!(records[0].direction.as_deref(), Some("南方"));
        assert_eq!(records[0].extra.get("label").and_then(|v| v.as_str()), Some("一"));
        assert!(records[1].poultry_beast.is_none());
        assert_eq!(records[1].chinese_zodiac.as_deref(), Some("kirin"));
        assert_eq!(records[2].five_fu.as_deref(), Some("true"));

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("\n  {\n    \"id\": 1,"));
        assert!(text.contains("\"fiveElements\": \"metal\""));
    }

    #[test]
    fn test_enrich_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        assert!(enrich_file(&dir.path().join("absent.json")).is_err());
    }
}
