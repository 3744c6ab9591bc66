use leptos::prelude::*;
use creative_core::metrics::ctr;
use crate::state::AppState;

#[component]
pub fn CreativeList() -> impl IntoView {
    let state = expect_context::<AppState>();

    view! {
        <div class="creative-list">
            {move || {
                if state.loading.get() {
                    return view! { <div class="list-empty">"Loading creatives..."</div> }.into_any();
                }
                if let Some(err) = state.load_error.get() {
                    return view! { <div class="list-empty list-error">{err}</div> }.into_any();
                }
                let creatives = state.creatives.get();
                if creatives.is_empty() {
                    return view! { <div class="list-empty">"No creatives"</div> }.into_any();
                }
                let fmt = state.config.get().number_format();
                let rows: Vec<_> = creatives.iter().enumerate().map(|(i, rec)| {
                    let is_selected = move || state.selected_index.get() == Some(i);
                    view! {
                        <button
                            class=move || if is_selected() { "creative-row selected" } else { "creative-row" }
                            on:click=move |_| state.selected_index.set(Some(i))
                        >
                            <span class="creative-row-name">{rec.display_name()}</span>
                            <span class="creative-row-campaign">{rec.campaign_name.clone()}</span>
                            <span class="creative-row-stat">{fmt.format_count(rec.impressions)}</span>
                            <span class="creative-row-stat">{fmt.format_percent(ctr(rec), 2)}</span>
                            <span class="creative-row-stat">{fmt.format_currency(rec.cost)}</span>
                        </button>
                    }
                }).collect();
                view! {
                    <div class="creative-list-header">
                        <span>"Ad"</span>
                        <span>"Campaign"</span>
                        <span>"Impressions"</span>
                        <span>"CTR"</span>
                        <span>"Cost"</span>
                    </div>
                    {rows}
                }.into_any()
            }}
        </div>
    }
}
