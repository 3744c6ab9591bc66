use leptos::prelude::*;
use leptos::task::spawn_local;
use crate::components::creative_list::CreativeList;
use crate::components::creative_modal::CreativeModal;
use crate::loading::{fetch_creatives, DEMO_CREATIVES_URL};
use crate::state::AppState;

#[component]
pub fn App() -> impl IntoView {
    let state = AppState::new();
    provide_context(state);

    state.loading.set(true);
    spawn_local(async move {
        match fetch_creatives(DEMO_CREATIVES_URL).await {
            Ok((config, records)) => {
                state.config.set(config);
                state.creatives.set(records);
            }
            Err(e) => {
                log::error!("Failed to load creatives: {e}");
                state.load_error.set(Some(format!("Could not load creatives: {e}")));
            }
        }
        state.loading.set(false);
    });

    let creative = Signal::derive(move || state.selected_creative());
    let is_open = Signal::derive(move || state.selected_index.get().is_some());
    let on_close = Callback::new(move |_: ()| state.selected_index.set(None));

    view! {
        <div class="app">
            <header class="app-header">
                <h1>"Ad creatives"</h1>
            </header>
            <CreativeList />
            <CreativeModal
                creative=creative
                is_open=is_open
                on_close=on_close
                config=state.config
            />
        </div>
    }
}
