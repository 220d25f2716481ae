use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZodiacSign {
    Rat,
    Ox,
    Tiger,
    Rabbit,
    Dragon,
    Snake,
    Horse,
    Goat,
    Monkey,
    Rooster,
    Dog,
    Pig,
}

/// Ordre canonique des douze signes : 鼠牛虎兔龙蛇马羊猴鸡狗猪.
pub const ALL_ZODIACS: [ZodiacSign; 12] = [
    ZodiacSign::Rat,
    ZodiacSign::Ox,
    ZodiacSign::Tiger,
    ZodiacSign::Rabbit,
    ZodiacSign::Dragon,
    ZodiacSign::Snake,
    ZodiacSign::Horse,
    ZodiacSign::Goat,
    ZodiacSign::Monkey,
    ZodiacSign::Rooster,
    ZodiacSign::Dog,
    ZodiacSign::Pig,
];

impl ZodiacSign {
    pub fn code(&self) -> &'static str {
        match self {
            ZodiacSign::Rat => "rat",
            ZodiacSign::Ox => "ox",
            ZodiacSign::Tiger => "tiger",
            ZodiacSign::Rabbit => "rabbit",
            ZodiacSign::Dragon => "dragon",
            ZodiacSign::Snake => "snake",
            ZodiacSign::Horse => "horse",
            ZodiacSign::Goat => "goat",
            ZodiacSign::Monkey => "monkey",
            ZodiacSign::Rooster => "rooster",
            ZodiacSign::Dog => "dog",
            ZodiacSign::Pig => "pig",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ZodiacSign::Rat => "鼠",
            ZodiacSign::Ox => "牛",
            ZodiacSign::Tiger => "虎",
            ZodiacSign::Rabbit => "兔",
            ZodiacSign::Dragon => "龙",
            ZodiacSign::Snake => "蛇",
            ZodiacSign::Horse => "马",
            ZodiacSign::Goat => "羊",
            ZodiacSign::Monkey => "猴",
            ZodiacSign::Rooster => "鸡",
            ZodiacSign::Dog => "狗",
            ZodiacSign::Pig => "猪",
        }
    }

    pub fn from_code(code: &str) -> Option<ZodiacSign> {
        ALL_ZODIACS.iter().copied().find(|z| z.code() == code)
    }

    pub fn from_label(label: &str) -> Option<ZodiacSign> {
        ALL_ZODIACS.iter().copied().find(|z| z.label() == label)
    }
}

impl std::fmt::Display for ZodiacSign {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parity {
    Odd,
    Even,
}

impl Parity {
    pub fn code(&self) -> &'static str {
        match self {
            Parity::Odd => "odd",
            Parity::Even => "even",
        }
    }

    pub fn from_code(code: &str) -> Option<Parity> {
        match code {
            "odd" => Some(Parity::Odd),
            "even" => Some(Parity::Even),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaveColor {
    Red,
    Green,
    Blue,
}

impl WaveColor {
    pub fn code(&self) -> &'static str {
        match self {
            WaveColor::Red => "red",
            WaveColor::Green => "green",
            WaveColor::Blue => "blue",
        }
    }

    pub fn from_code(code: &str) -> Option<WaveColor> {
        match code {
            "red" => Some(WaveColor::Red),
            "green" => Some(WaveColor::Green),
            "blue" => Some(WaveColor::Blue),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Element {
    Metal,
    Wood,
    Water,
    Fire,
    Earth,
}

impl Element {
    pub fn code(&self) -> &'static str {
        match self {
            Element::Metal => "metal",
            Element::Wood => "wood",
            Element::Water => "water",
            Element::Fire => "fire",
            Element::Earth => "earth",
        }
    }

    /// `gold` est un synonyme de `metal`.
    pub fn from_code(code: &str) -> Option<Element> {
        match code {
            "metal" | "gold" => Some(Element::Metal),
            "wood" => Some(Element::Wood),
            "water" => Some(Element::Water),
            "fire" => Some(Element::Fire),
            "earth" => Some(Element::Earth),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Element::Metal => "金",
            Element::Wood => "木",
            Element::Water => "水",
            Element::Fire => "火",
            Element::Earth => "土",
        }
    }
}

/// Un numéro du tableau 1-49 avec ses attributs.
///
/// Seul `id` est obligatoire. Les champs posés par l'enrichissement sont
/// optionnels : un champ absent ne satisfait aucun filtre qui le consulte.
/// Les codes (parité, vague, élément, signe) restent sous forme brute : une
/// valeur inattendue ne fait échouer que les filtres qui la consultent.
/// Les champs inconnus sont conservés tels quels dans `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NumberRecord {
    pub id: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub odd_and_even: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wave_color: Option<String>,
    /// Code latin brut (`rat`, `ox`...) ; un code inconnu est conservé.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chinese_zodiac: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub five_elements: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sum: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sum_odd_and_even: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tail: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub head: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub men: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duan: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub he_shu: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poultry_beast: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub luckiness: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub yin_yang: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sky_earth: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zi_bian_hua_zhong: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub three_harmony: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub six_harmony: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub four_arts: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zodiac_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub season: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction: Option<String>,
    /// "true" / "false" sous forme de chaîne, comme dans le fichier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub five_fu: Option<String>,

    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl NumberRecord {
    pub fn new(id: u32) -> Self {
        Self {
            id,
            ..Default::default()
        }
    }

    pub fn zodiac(&self) -> Option<ZodiacSign> {
        self.chinese_zodiac.as_deref().and_then(ZodiacSign::from_code)
    }

    pub fn parity(&self) -> Option<Parity> {
        self.odd_and_even.as_deref().and_then(Parity::from_code)
    }

    pub fn wave(&self) -> Option<WaveColor> {
        self.wave_color.as_deref().and_then(WaveColor::from_code)
    }

    pub fn element(&self) -> Option<Element> {
        self.five_elements.as_deref().and_then(Element::from_code)
    }
}

pub const MIN_ID: u32 = 1;
pub const MAX_ID: u32 = 49;

pub fn validate_records(records: &[NumberRecord]) -> Result<()> {
    let mut seen = [false; MAX_ID as usize + 1];
    for record in records {
        if record.id < MIN_ID || record.id > MAX_ID {
            bail!("Numéro {} hors limites ({}-{})", record.id, MIN_ID, MAX_ID);
        }
        let slot = &mut seen[record.id as usize];
        if *slot {
            bail!("Numéro en double : {}", record.id);
        }
        *slot = true;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zodiac_code_and_label() {
        assert_eq!(ZodiacSign::from_code("rat"), Some(ZodiacSign::Rat));
        assert_eq!(ZodiacSign::from_code("cat"), None);
        assert_eq!(ZodiacSign::from_label("猪"), Some(ZodiacSign::Pig));
        assert_eq!(ZodiacSign::Rooster.label(), "鸡");
        assert_eq!(ZodiacSign::Goat.code(), "goat");
    }

    #[test]
    fn test_all_zodiacs_canonical_order() {
        let labels: String = ALL_ZODIACS.iter().map(|z| z.label()).collect();
        assert_eq!(labels, "鼠牛虎兔龙蛇马羊猴鸡狗猪");
    }

    #[test]
    fn test_gold_is_metal() {
        let r: NumberRecord = serde_json::from_str(r#"{"id": 4, "fiveElements": "gold"}"#).unwrap();
        assert_eq!(r.element(), Some(Element::Metal));
        let r: NumberRecord = serde_json::from_str(r#"{"id": 4, "fiveElements": "metal"}"#).unwrap();
        assert_eq!(r.element(), Some(Element::Metal));
    }

    #[test]
    fn test_unexpected_codes_kept_raw() {
        let json = r#"{"id": 5, "oddAndEven": "odd", "waveColor": "purple", "fiveElements": "aether"}"#;
        let r: NumberRecord = serde_json::from_str(json).unwrap();
        assert_eq!(r.parity(), Some(Parity::Odd));
        assert_eq!(r.wave(), None);
        assert_eq!(r.element(), None);
        let back = serde_json::to_value(&r).unwrap();
        assert_eq!(back["waveColor"], "purple");
        assert_eq!(back["fiveElements"], "aether");
    }

    #[test]
    fn test_missing_id_rejected() {
        let r = serde_json::from_str::<NumberRecord>(r#"{"oddAndEven": "odd"}"#);
        assert!(r.is_err());
    }

    #[test]
    fn test_missing_enrichment_fields_tolerated() {
        let r: NumberRecord = serde_json::from_str(r#"{"id": 9, "chineseZodiac": "unicorn"}"#).unwrap();
        assert_eq!(r.id, 9);
        assert!(r.poultry_beast.is_none());
        assert!(r.zodiac().is_none());
    }

    #[test]
    fn test_unknown_fields_preserved() {
        let json = r#"{"id": 3, "note": "x", "tail": 3}"#;
        let r: NumberRecord = serde_json::from_str(json).unwrap();
        assert_eq!(r.extra.get("note"), Some(&serde_json::Value::from("x")));
        let back = serde_json::to_value(&r).unwrap();
        assert_eq!(back["note"], "x");
        assert_eq!(back["tail"], 3);
        assert!(back.get("season").is_none());
    }

    #[test]
    fn test_validate_records() {
        assert!(validate_records(&[NumberRecord::new(1), NumberRecord::new(49)]).is_ok());
        assert!(validate_records(&[NumberRecord::new(0)]).is_err());
        assert!(validate_records(&[NumberRecord::new(50)]).is_err());
        assert!(validate_records(&[NumberRecord::new(7), NumberRecord::new(7)]).is_err());
    }
}
