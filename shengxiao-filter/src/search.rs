use regex::Regex;
use serde::{Deserialize, Serialize};

use shengxiao_db::models::NumberRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    /// `7` ou `007`
    Exact,
    #[default]
    Fuzzy,
    Regex,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

/// Filtre textuel sur l'identifiant du numéro.
///
/// Le motif est comparé à la forme décimale brute (`7`, pas `07`). En mode
/// exact la forme complétée sur trois chiffres (`007`) est aussi acceptée.
/// Un motif regex invalide vide le résultat. La syntaxe est celle du crate
/// `regex` : pas d'assertions avant/arrière ni de références arrière.
pub fn apply_search<'a>(
    records: Vec<&'a NumberRecord>,
    query: &str,
    mode: SearchMode,
) -> Vec<&'a NumberRecord> {
    let query = query.trim();
    match mode {
        SearchMode::Exact => records
            .into_iter()
            .filter(|r| r.id.to_string() == query || format!("{:03}", r.id) == query)
            .collect(),
        SearchMode::Fuzzy => records
            .into_iter()
            .filter(|r| r.id.to_string().contains(query))
            .collect(),
        SearchMode::Regex => match Regex::new(query) {
            Ok(re) => records
                .into_iter()
                .filter(|r| re.is_match(&r.id.to_string()))
                .collect(),
            Err(e) => {
                log::warn!("Motif de recherche invalide {:?} : {}", query, e);
                Vec::new()
            }
        },
    }
}

pub fn sort_key(record: &NumberRecord) -> String {
    format!("{:03}", record.id)
}

/// Tri stable sur la chaîne à trois chiffres, pas sur la valeur numérique.
pub fn sort_records(records: &mut [&NumberRecord], order: SortOrder) {
    records.sort_by(|a, b| {
        let (ka, kb) = (sort_key(a), sort_key(b));
        match order {
            SortOrder::Asc => ka.cmp(&kb),
            SortOrder::Desc => kb.cmp(&ka),
        }
    });
}

pub fn format_id(id: u32) -> String {
    format!("{:02}", id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(ids: &[u32]) -> Vec<NumberRecord> {
        ids.iter().map(|&id| NumberRecord::new(id)).collect()
    }

    fn ids(found: &[&NumberRecord]) -> Vec<u32> {
        found.iter().map(|r| r.id).collect()
    }

    #[test]
    fn test_exact_accepts_bare_and_three_digit() {
        let all = records(&[7, 17, 27, 70]);
        let refs: Vec<&NumberRecord> = all.iter().collect();
        assert_eq!(ids(&apply_search(refs.clone(), "7", SearchMode::Exact)), vec![7]);
        assert_eq!(ids(&apply_search(refs.clone(), " 007 ", SearchMode::Exact)), vec![7]);
    }

    #[test]
    fn test_exact_rejects_two_digit_padding() {
        // Le résultat est affiché « 07 » mais la recherche exacte ne l'accepte pas.
        let all = records(&[7]);
        let refs: Vec<&NumberRecord> = all.iter().collect();
        assert!(apply_search(refs, "07", SearchMode::Exact).is_empty());
    }

    #[test]
    fn test_fuzzy_substring() {
        let all = records(&[1, 7, 17, 27, 30]);
        let refs: Vec<&NumberRecord> = all.iter().collect();
        assert_eq!(ids(&apply_search(refs.clone(), "7", SearchMode::Fuzzy)), vec![7, 17, 27]);
        assert!(apply_search(refs, "07", SearchMode::Fuzzy).is_empty());
    }

    #[test]
    fn test_regex() {
        let all = records(&[3, 13, 23, 30, 33]);
        let refs: Vec<&NumberRecord> = all.iter().collect();
        assert_eq!(ids(&apply_search(refs.clone(), "^3", SearchMode::Regex)), vec![3, 30, 33]);
        assert_eq!(ids(&apply_search(refs, "3$", SearchMode::Regex)), vec![3, 13, 23, 33]);
    }

    #[test]
    fn test_invalid_regex_yields_empty() {
        let all = records(&[1, 2, 3]);
        let refs: Vec<&NumberRecord> = all.iter().collect();
        assert!(apply_search(refs, "[1-", SearchMode::Regex).is_empty());
    }

    #[test]
    fn test_lookaround_is_rejected() {
        let all = records(&[1, 10, 21]);
        let refs: Vec<&NumberRecord> = all.iter().collect();
        assert!(Regex::new("^(?=1)").is_err());
        assert!(apply_search(refs.clone(), "^(?=1)", SearchMode::Regex).is_empty());
        assert!(apply_search(refs.clone(), r"(\d)\1", SearchMode::Regex).is_empty());
        assert_eq!(ids(&apply_search(refs, "^1", SearchMode::Regex)), vec![1, 10]);
    }

    #[test]
    fn test_sort_orders() {
        let all = records(&[12, 3, 45, 9]);
        let mut refs: Vec<&NumberRecord> = all.iter().collect();
        sort_records(&mut refs, SortOrder::Asc);
        assert_eq!(ids(&refs), vec![3, 9, 12, 45]);
        sort_records(&mut refs, SortOrder::Desc);
        assert_eq!(ids(&refs), vec![45, 12, 9, 3]);
    }

    #[test]
    fn test_format_id() {
        assert_eq!(format_id(7), "07");
        assert_eq!(format_id(49), "49");
    }
}
