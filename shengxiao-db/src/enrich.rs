use crate::models::NumberRecord;
use crate::tables::{direction_of, ATTRIBUTE_TABLES, FIVE_FU};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct EnrichReport {
    pub total_records: u32,
    pub enriched: u32,
    pub skipped: u32,
}

/// Pose les attributs dérivés du signe sur un numéro.
///
/// L'élément est réécrit sous son code canonique (`gold` devient `metal`).
/// Retourne `false` sans poser d'attribut si le code zodiacal est absent ou inconnu.
pub fn enrich_record(record: &mut NumberRecord) -> bool {
    if let Some(element) = record.element() {
        record.five_elements = Some(element.code().to_string());
    }

    let Some(sign) = record.zodiac() else {
        return false;
    };

    for table in ATTRIBUTE_TABLES {
        if let Some(bucket) = table.bucket_of(sign) {
            *table.attribute.slot(record) = Some(bucket.to_string());
        }
    }

    if let Some(season) = record.season.as_deref() {
        record.direction = direction_of(season).map(str::to_string);
    }

    let five_fu = FIVE_FU.contains(&sign);
    record.five_fu = Some(five_fu.to_string());
    true
}

pub fn enrich_records(records: &mut [NumberRecord]) -> EnrichReport {
    let mut report = EnrichReport::default();
    for record in records.iter_mut() {
        report.total_records += 1;
        if enrich_record(record) {
            report.enriched += 1;
        } else {
            log::warn!(
                "Numéro {} ignoré : signe inconnu {:?}",
                record.id,
                record.chinese_zodiac
            );
            report.skipped += 1;
        }
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(id: u32, zodiac: &str) -> NumberRecord {
        NumberRecord {
            chinese_zodiac: Some(zodiac.to_string()),
            ..NumberRecord::new(id)
        }
    }

    #[test]
    fn test_enrich_rat() {
        let mut r = raw(6, "rat");
        assert!(enrich_record(&mut r));
        assert_eq!(r.poultry_beast.as_deref(), Some("野兽"));
        assert_eq!(r.luckiness.as_deref(), Some("凶丑"));
        assert_eq!(r.yin_yang.as_deref(), Some("阴性"));
        assert_eq!(r.stroke.as_deref(), Some("单笔"));
        assert_eq!(r.sky_earth.as_deref(), Some("地肖"));
        assert_eq!(r.zi_bian_hua_zhong.as_deref(), Some("自边"));
        assert_eq!(r.gender.as_deref(), Some("男肖"));
        assert_eq!(r.three_harmony.as_deref(), Some("鼠龙猴"));
        assert_eq!(r.six_harmony.as_deref(), Some("鼠牛"));
        assert_eq!(r.four_arts.as_deref(), Some("棋"));
        assert_eq!(r.zodiac_color.as_deref(), Some("红肖"));
        assert_eq!(r.season.as_deref(), Some("冬天"));
        assert_eq!(r.direction.as_deref(), Some("北方"));
        assert_eq!(r.five_fu.as_deref(), Some("true"));
    }

    #[test]
    fn test_five_fu_is_string_false() {
        let mut r = raw(7, "pig");
        enrich_record(&mut r);
        assert_eq!(r.five_fu.as_deref(), Some("false"));
        let json = serde_json::to_value(&r).unwrap();
        assert_eq!(json["fiveFu"], "false");
    }

    #[test]
    fn test_unknown_zodiac_untouched() {
        let mut r = raw(1, "unicorn");
        let before = r.clone();
        assert!(!enrich_record(&mut r));
        assert_eq!(r, before);

        let mut r = NumberRecord::new(2);
        assert!(!enrich_record(&mut r));
        assert!(r.five_fu.is_none());
    }

    #[test]
    fn test_gold_rewritten_as_metal() {
        let mut r = NumberRecord {
            five_elements: Some("gold".to_string()),
            ..raw(4, "unicorn")
        };
        assert!(!enrich_record(&mut r));
        assert_eq!(r.five_elements.as_deref(), Some("metal"));

        let mut r = NumberRecord {
            five_elements: Some("aether".to_string()),
            ..raw(5, "rat")
        };
        assert!(enrich_record(&mut r));
        assert_eq!(r.five_elements.as_deref(), Some("aether"));
    }

    #[test]
    fn test_enrich_records_report() {
        let mut records = vec![raw(1, "snake"), raw(2, "???"), raw(3, "rabbit")];
        let report = enrich_records(&mut records);
        assert_eq!(
            report,
            EnrichReport { total_records: 3, enriched: 2, skipped: 1 }
        );
        assert_eq!(records[0].season.as_deref(), Some("夏天"));
        assert_eq!(records[0].direction.as_deref(), Some("南方"));
        assert!(records[1].season.is_none());
        assert!(records[1].direction.is_none());
        assert_eq!(records[2].direction.as_deref(), Some("东方"));
    }

    #[test]
    fn test_enrich_is_idempotent() {
        let mut once = vec![raw(10, "monkey")];
        enrich_records(&mut once);
        let mut twice = once.clone();
        enrich_records(&mut twice);
        assert_eq!(once, twice);
    }
}
