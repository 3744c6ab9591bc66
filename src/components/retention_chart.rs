use leptos::prelude::*;
use web_sys::HtmlCanvasElement;
use creative_core::chart::ChartGeometry;
use creative_core::{CreativeMetrics, CreativeRecord, NumberFormat};
use crate::canvas::retention_renderer;

/// Video retention funnel as a bar chart, with the view-efficiency figures
/// listed beside it. Everything is re-derived from `record`.
#[component]
pub fn RetentionChart(record: CreativeRecord, format: NumberFormat) -> impl IntoView {
    let metrics = CreativeMetrics::from_record(&record);
    let geometry = ChartGeometry::default();
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();

    let funnel = metrics.funnel.clone();
    let chart_format = format.clone();
    Effect::new(move || {
        let Some(canvas_el) = canvas_ref.get() else { return };
        let canvas: &HtmlCanvasElement = canvas_el.as_ref();
        match retention_renderer::context_2d(canvas) {
            Ok(ctx) => retention_renderer::draw_retention_chart(&ctx, &geometry, &funnel, &chart_format),
            Err(e) => log::error!("Retention chart: {e}"),
        }
    });

    let rows = [
        ("Total views", format.format_count(metrics.funnel.total_views)),
        ("Completed views", format.format_count(record.video_views_100)),
        ("Completion rate", format.format_percent(metrics.funnel.completion_rate(), 1)),
        ("VTR", format.format_percent(metrics.vtr, 2)),
        ("CPV", format.format_currency(metrics.cpv)),
    ];

    view! {
        <section class="retention-chart">
            <h3 class="section-title">"Video retention"</h3>
            <div class="retention-body">
                <canvas
                    node_ref=canvas_ref
                    class="retention-canvas"
                    width={geometry.width as u32}
                    height={geometry.height as u32}
                />
                <dl class="retention-metrics">
                    {rows.into_iter().map(|(label, value)| view! {
                        <div class="retention-metric">
                            <dt>{label}</dt>
                            <dd>{value}</dd>
                        </div>
                    }).collect_view()}
                </dl>
            </div>
        </section>
    }
}
