use leptos::prelude::*;
use creative_core::{CreativeRecord, DisplayConfig};

#[derive(Clone, Copy)]
pub struct AppState {
    pub creatives: RwSignal<Vec<CreativeRecord>>,
    pub selected_index: RwSignal<Option<usize>>,
    pub config: RwSignal<DisplayConfig>,
    pub loading: RwSignal<bool>,
    pub load_error: RwSignal<Option<String>>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            creatives: RwSignal::new(Vec::new()),
            selected_index: RwSignal::new(None),
            config: RwSignal::new(DisplayConfig::default()),
            loading: RwSignal::new(false),
            load_error: RwSignal::new(None),
        }
    }

    pub fn selected_creative(&self) -> Option<CreativeRecord> {
        let idx = self.selected_index.get()?;
        self.creatives.with(|list| list.get(idx).cloned())
    }
}
