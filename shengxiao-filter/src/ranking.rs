use std::collections::HashMap;

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankingEntry {
    pub name: String,
    pub count: u32,
    pub ratio: f64,
}

/// Fréquence de chaque signe sur l'ensemble des groupes.
///
/// `ratio` est rapporté au nombre total de sélections, tous groupes
/// confondus. À ratio égal, l'ordre de première apparition est conservé.
pub fn compute_ranking<S: AsRef<str>>(groups: &[Vec<S>]) -> Vec<RankingEntry> {
    let total: usize = groups.iter().map(Vec::len).sum();
    if total == 0 {
        return Vec::new();
    }

    let mut order: Vec<&str> = Vec::new();
    let mut counts: HashMap<&str, u32> = HashMap::new();
    for name in groups.iter().flatten() {
        let name = name.as_ref();
        let count = counts.entry(name).or_insert_with(|| {
            order.push(name);
            0
        });
        *count += 1;
    }

    let mut ranking: Vec<RankingEntry> = order
        .into_iter()
        .map(|name| {
            let count = counts[name];
            RankingEntry {
                name: name.to_string(),
                count,
                ratio: count as f64 / total as f64,
            }
        })
        .collect();
    ranking.sort_by(|a, b| b.ratio.partial_cmp(&a.ratio).unwrap_or(std::cmp::Ordering::Equal));
    ranking
}

/// Nouvelle liste de groupes, avec une copie de la sélection en dernier.
pub fn add_group(groups: &[Vec<String>], selection: &[String]) -> Vec<Vec<String>> {
    let mut next = groups.to_vec();
    next.push(selection.to_vec());
    next
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RankingBoard {
    pub groups: Vec<Vec<String>>,
    pub selected: Vec<String>,
}

/// Remise à zéro : les arguments sont ignorés.
pub fn clear_all(_groups: &[Vec<String>], _selected: &[String]) -> RankingBoard {
    RankingBoard::default()
}

impl RankingBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle(&mut self, sign: &str) -> bool {
        match self.selected.iter().position(|s| s == sign) {
            Some(idx) => {
                self.selected.remove(idx);
                false
            }
            None => {
                self.selected.push(sign.to_string());
                true
            }
        }
    }

    /// Enregistre la sélection courante comme un tour puis la vide.
    /// Une sélection vide n'ajoute rien.
    pub fn commit(&mut self) -> bool {
        if self.selected.is_empty() {
            return false;
        }
        self.groups = add_group(&self.groups, &self.selected);
        self.selected.clear();
        true
    }

    pub fn reset(&mut self) {
        *self = clear_all(&self.groups, &self.selected);
    }

    pub fn ranking(&self) -> Vec<RankingEntry> {
        compute_ranking(&self.groups)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn groups(raw: &[&[&str]]) -> Vec<Vec<String>> {
        raw.iter()
            .map(|g| g.iter().map(|s| s.to_string()).collect())
            .collect()
    }

    #[test]
    fn test_ranking_ordered_by_ratio() {
        let g = groups(&[&["鼠", "牛", "虎"], &["鼠", "兔"], &["龙", "鼠"]]);
        let r = compute_ranking(&g);
        assert_eq!(r[0].name, "鼠");
        assert_eq!(r[0].count, 3);
        assert!((r[0].ratio - 3.0 / 7.0).abs() < 1e-9);
        let names: Vec<&str> = r.iter().map(|e| e.name.as_str()).collect();
        for sign in ["牛", "虎", "兔", "龙"] {
            assert!(names.contains(&sign));
        }
        // Égalités : ordre de première apparition.
        assert_eq!(names, vec!["鼠", "牛", "虎", "兔", "龙"]);
    }

    #[test]
    fn test_ranking_empty() {
        assert!(compute_ranking::<String>(&[]).is_empty());
        assert!(compute_ranking(&groups(&[&[], &[]])).is_empty());
    }

    #[test]
    fn test_ranking_ratio_uses_global_total() {
        let g = groups(&[&["猪"], &["猪", "狗", "狗", "狗"]]);
        let r = compute_ranking(&g);
        assert_eq!(r[0].name, "狗");
        assert!((r[0].ratio - 0.6).abs() < 1e-9);
        assert!((r[1].ratio - 0.4).abs() < 1e-9);
        let sum: f64 = r.iter().map(|e| e.ratio).sum();
        assert!((sum - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_add_group_copies_selection() {
        let mut selection = vec!["鼠".to_string(), "牛".to_string()];
        let g = add_group(&[], &selection);
        selection.push("虎".to_string());
        assert_eq!(g, groups(&[&["鼠", "牛"]]));
    }

    #[test]
    fn test_clear_all_ignores_input() {
        let board = clear_all(&groups(&[&["鼠"], &["牛", "虎"]]), &["兔".to_string()]);
        assert!(board.groups.is_empty());
        assert!(board.selected.is_empty());
    }

    #[test]
    fn test_board_flow() {
        let mut board = RankingBoard::new();
        assert!(!board.commit());
        board.toggle("鼠");
        board.toggle("牛");
        board.toggle("牛");
        assert!(board.commit());
        assert!(board.selected.is_empty());
        board.toggle("鼠");
        board.toggle("马");
        board.commit();
        assert_eq!(board.groups.len(), 2);
        let r = board.ranking();
        assert_eq!(r[0].name, "鼠");
        assert_eq!(r[0].count, 2);
        board.reset();
        assert_eq!(board, RankingBoard::default());
    }
}
