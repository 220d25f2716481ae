use shengxiao_db::models::NumberRecord;

use crate::search::{apply_search, format_id, sort_records, SearchMode, SortOrder};
use crate::tokens::Category;
use crate::vocabulary::Vocabulary;

/// Moteur de filtrage sur un jeu de numéros injecté.
pub struct FilterEngine {
    records: Vec<NumberRecord>,
    vocabulary: Vocabulary,
}

impl FilterEngine {
    pub fn new(records: Vec<NumberRecord>) -> Self {
        Self::with_vocabulary(records, Vocabulary::standard())
    }

    pub fn with_vocabulary(records: Vec<NumberRecord>, vocabulary: Vocabulary) -> Self {
        Self { records, vocabulary }
    }

    pub fn records(&self) -> &[NumberRecord] {
        &self.records
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn record(&self, id: u32) -> Option<&NumberRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn matches(&self, record: &NumberRecord, token: &str) -> bool {
        self.vocabulary.matches(record, token)
    }

    /// Couleur de la vague (`red`, `green`, `blue`), chaîne vide si inconnue.
    pub fn wave_color_by_id(&self, id: u32) -> &'static str {
        self.record(id)
            .and_then(|r| r.wave())
            .map(|c| c.code())
            .unwrap_or("")
    }

    /// OU à l'intérieur d'une catégorie, ET entre catégories.
    pub fn filter<S: AsRef<str>>(&self, tokens: &[S]) -> Vec<&NumberRecord> {
        let groups = partition_by_category(tokens);
        self.records
            .iter()
            .filter(|record| {
                groups
                    .iter()
                    .all(|(_, group)| group.iter().any(|t| self.matches(record, t)))
            })
            .collect()
    }

    /// Liste finale : filtres, recherche, tri puis formatage sur deux chiffres.
    ///
    /// Sans filtre actif ni texte de recherche, le résultat est vide.
    pub fn run<S: AsRef<str>>(
        &self,
        tokens: &[S],
        search_text: &str,
        mode: SearchMode,
        order: SortOrder,
    ) -> Vec<String> {
        if tokens.is_empty() && search_text.is_empty() {
            return Vec::new();
        }

        let mut found = self.filter(tokens);
        if !search_text.is_empty() {
            found = apply_search(found, search_text, mode);
        }
        sort_records(&mut found, order);

        found.into_iter().map(|r| format_id(r.id)).collect()
    }
}

/// Regroupe les libellés par catégorie, dans l'ordre de première apparition.
pub fn partition_by_category<S: AsRef<str>>(tokens: &[S]) -> Vec<(Category, Vec<&str>)> {
    let mut groups: Vec<(Category, Vec<&str>)> = Vec::new();
    for token in tokens {
        let token = token.as_ref();
        let category = crate::tokens::classify(token);
        match groups.iter_mut().find(|(c, _)| *c == category) {
            Some((_, group)) => group.push(token),
            None => groups.push((category, vec![token])),
        }
    }
    groups
}
