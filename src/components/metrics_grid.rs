use leptos::prelude::*;
use creative_core::metrics::MetricTile;

#[component]
pub fn MetricsGrid(tiles: Vec<MetricTile>) -> impl IntoView {
    view! {
        <div class="metrics-grid">
            {tiles.into_iter().map(|tile| {
                view! {
                    <div class="metric-tile" title=tile.exact.unwrap_or_default()>
                        <span class="metric-label">{tile.label}</span>
                        <span class="metric-value">{tile.value}</span>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}
