use leptos::prelude::*;
use creative_core::metrics::metric_tiles;
use creative_core::{visible_creative, CreativeMetrics, CreativeRecord, DisplayConfig, PlayerState};
use crate::components::media_pane::MediaPane;
use crate::components::metrics_grid::MetricsGrid;
use crate::components::retention_chart::RetentionChart;

fn info_row(label: &'static str, value: String) -> impl IntoView {
    let shown = if value.trim().is_empty() { "\u{2014}".to_string() } else { value };
    view! {
        <div class="info-row">
            <span class="info-label">{label}</span>
            <span class="info-value">{shown}</span>
        </div>
    }
}

/// Play/mute buttons. They flip local flags and swap icons only; the
/// embedded player is not driven from here.
#[component]
fn PlayerControls() -> impl IntoView {
    let player = RwSignal::new(PlayerState::default());

    view! {
        <div class="media-controls">
            <button
                class="media-btn"
                title=move || player.get().play_label()
                on:click=move |_| player.update(|p| p.toggle_play())
            >{move || player.get().play_icon()}</button>
            <button
                class="media-btn"
                title=move || player.get().mute_label()
                on:click=move |_| player.update(|p| p.toggle_mute())
            >{move || player.get().mute_icon()}</button>
        </div>
    }
}

/// Full-screen dialog for one ad creative. Renders nothing unless `is_open`
/// is set and a record is present; closing is left to the caller.
#[component]
pub fn CreativeModal(
    #[prop(into)] creative: Signal<Option<CreativeRecord>>,
    #[prop(into)] is_open: Signal<bool>,
    on_close: Callback<()>,
    #[prop(optional, into)] config: Option<Signal<DisplayConfig>>,
) -> impl IntoView {
    let handle = window_event_listener(leptos::ev::keydown, move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Escape" && is_open.get_untracked() && creative.with_untracked(Option::is_some) {
            on_close.run(());
        }
    });
    on_cleanup(move || handle.remove());

    let shown = move || creative.with(|c| visible_creative(c.as_ref(), is_open.get()).cloned());

    view! {
        {move || {
            let Some(rec) = shown() else {
                return view! { <span></span> }.into_any();
            };
            let fmt = config.map(|c| c.get()).unwrap_or_default().number_format();
            let metrics = CreativeMetrics::from_record(&rec);
            let tiles = metric_tiles(&rec, &metrics, &fmt);
            let name = rec.display_name();
            let path = format!("{} \u{203A} {}", rec.campaign_name, rec.ad_group_name);

            view! {
                <div class="creative-modal-overlay" role="dialog" aria-modal="true">
                    <button
                        class="creative-modal-backdrop"
                        aria-label="Close"
                        on:click=move |_| on_close.run(())
                    ></button>
                    <div class="creative-modal">
                        <header class="creative-modal-header">
                            <div class="creative-modal-heading">
                                <h2 class="creative-modal-title" title=name.clone()>{name.clone()}</h2>
                                <span class="creative-modal-subtitle">{path}</span>
                                <span class="creative-modal-date">{rec.date.clone()}</span>
                            </div>
                            <button
                                class="btn-icon"
                                title="Close"
                                on:click=move |_| on_close.run(())
                            >"\u{00D7}"</button>
                        </header>

                        <div class="creative-modal-body">
                            <div class="creative-modal-media">
                                <MediaPane record=rec.clone() />
                                <PlayerControls />
                            </div>
                            <div class="creative-modal-info">
                                <h3 class="section-title">"Ad text"</h3>
                                <p class="ad-text">{rec.ad_text.clone()}</p>
                                {info_row("Ad", name)}
                                {info_row("Campaign", rec.campaign_name.clone())}
                                {info_row("Ad group", rec.ad_group_name.clone())}
                                {info_row("Date", rec.date.clone())}
                                {info_row("Engagements", fmt.format_grouped(metrics.engagements))}
                            </div>
                        </div>

                        <MetricsGrid tiles=tiles />
                        <RetentionChart record=rec format=fmt />

                        <footer class="creative-modal-footer">
                            <button class="btn-secondary" on:click=move |_| on_close.run(())>
                                "Close"
                            </button>
                        </footer>
                    </div>
                </div>
            }.into_any()
        }}
    }
}
