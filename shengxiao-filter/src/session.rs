use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use shengxiao_db::db::SettingsStore;

use crate::engine::FilterEngine;
use crate::notify::{
    Notifier, MSG_CLEARED, MSG_LOADED, MSG_LOAD_FAILED, MSG_NOTHING_SAVED, MSG_SAVED,
    MSG_SAVE_FAILED,
};
use crate::search::{SearchMode, SortOrder};

pub const SETTINGS_KEY: &str = "filterSettings";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterSettings {
    #[serde(default)]
    pub filters: Vec<String>,
}

impl FilterSettings {
    /// Lecture tolérante : tout JSON non nul est accepté, un `filters`
    /// absent ou qui n'est pas une liste vaut une sélection vide.
    pub fn from_json(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        if value.is_null() {
            bail!("réglages nuls");
        }
        let filters = value
            .get("filters")
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();
        Ok(Self { filters })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterState {
    pub selected: Vec<String>,
    pub search_text: String,
    pub search_mode: SearchMode,
    pub sort_order: SortOrder,
}

impl FilterState {
    /// Active le libellé s'il est absent, le retire sinon. Retourne le nouvel état.
    pub fn toggle(&mut self, token: &str) -> bool {
        match self.selected.iter().position(|t| t == token) {
            Some(idx) => {
                self.selected.remove(idx);
                false
            }
            None => {
                self.selected.push(token.to_string());
                true
            }
        }
    }

    pub fn is_active(&self, token: &str) -> bool {
        self.selected.iter().any(|t| t == token)
    }
}

/// Recalcul complet de la liste affichée à partir de l'état courant.
pub fn compute_result(state: &FilterState, engine: &FilterEngine) -> Vec<String> {
    engine.run(
        &state.selected,
        &state.search_text,
        state.search_mode,
        state.sort_order,
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded(usize),
    NothingSaved,
    Malformed,
    Unavailable,
}

pub struct FilterSession<S: SettingsStore> {
    state: FilterState,
    store: S,
    notifier: Option<Box<dyn Notifier>>,
}

impl<S: SettingsStore> FilterSession<S> {
    pub fn new(store: S) -> Self {
        Self {
            state: FilterState::default(),
            store,
            notifier: None,
        }
    }

    pub fn with_notifier(mut self, notifier: impl Notifier + 'static) -> Self {
        self.notifier = Some(Box::new(notifier));
        self
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn toggle(&mut self, token: &str) -> bool {
        self.state.toggle(token)
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.state.search_text = text.into();
    }

    pub fn set_search_mode(&mut self, mode: SearchMode) {
        self.state.search_mode = mode;
    }

    pub fn set_sort_order(&mut self, order: SortOrder) {
        self.state.sort_order = order;
    }

    /// Vide les libellés actifs ; la recherche est conservée.
    pub fn clear(&mut self) {
        self.state.selected.clear();
        self.notify(MSG_CLEARED);
    }

    pub fn save(&self) -> SaveOutcome {
        let settings = FilterSettings {
            filters: self.state.selected.clone(),
        };
        let written = serde_json::to_string(&settings)
            .map_err(anyhow::Error::from)
            .and_then(|json| self.store.set(SETTINGS_KEY, &json));
        match written {
            Ok(()) => {
                log::info!("{} filtres sauvegardés", settings.filters.len());
                self.notify(MSG_SAVED);
                SaveOutcome::Saved
            }
            Err(e) => {
                log::error!("Échec de la sauvegarde des filtres : {e:#}");
                self.notify(MSG_SAVE_FAILED);
                SaveOutcome::Failed
            }
        }
    }

    /// Recharge les libellés sauvegardés ; l'état n'est touché qu'en cas de succès.
    pub fn load(&mut self) -> LoadOutcome {
        let saved = match self.store.get(SETTINGS_KEY) {
            Ok(saved) => saved,
            Err(e) => {
                log::error!("Lecture des filtres impossible : {e:#}");
                self.notify(MSG_LOAD_FAILED);
                return LoadOutcome::Unavailable;
            }
        };

        let Some(json) = saved else {
            self.notify(MSG_NOTHING_SAVED);
            return LoadOutcome::NothingSaved;
        };

        match FilterSettings::from_json(&json) {
            Ok(settings) => {
                let count = settings.filters.len();
                self.state.selected = settings.filters;
                self.notify(MSG_LOADED);
                LoadOutcome::Loaded(count)
            }
            Err(e) => {
                log::error!("Filtres sauvegardés illisibles : {e:#}");
                LoadOutcome::Malformed
            }
        }
    }

    pub fn results(&self, engine: &FilterEngine) -> Vec<String> {
        compute_result(&self.state, engine)
    }

    pub fn total_items(&self, engine: &FilterEngine) -> usize {
        self.results(engine).len()
    }

    fn notify(&self, message: &str) {
        if let Some(notifier) = &self.notifier {
            notifier.notify(message);
        }
    }
}
