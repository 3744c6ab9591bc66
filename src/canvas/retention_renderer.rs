use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use creative_core::chart::ChartGeometry;
use creative_core::metrics::RetentionFunnel;
use creative_core::NumberFormat;
use crate::canvas::colors;

pub fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, String> {
    canvas
        .get_context("2d")
        .map_err(|e| format!("get_context: {e:?}"))?
        .ok_or("No 2d context".to_string())?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| "Context cast failed".to_string())
}

/// Horizontal gridlines with their percentage labels in the left gutter.
fn draw_grid(ctx: &CanvasRenderingContext2d, geom: &ChartGeometry) {
    ctx.set_line_width(1.0);
    ctx.set_font("10px sans-serif");
    ctx.set_text_align("right");
    ctx.set_text_baseline("middle");
    for line in geom.gridlines() {
        // half-pixel offset keeps 1px lines crisp
        let y = line.y.round() + 0.5;
        ctx.set_stroke_style_str(colors::GRID_LINE);
        ctx.begin_path();
        ctx.move_to(geom.plot_left(), y);
        ctx.line_to(geom.width, y);
        ctx.stroke();

        ctx.set_fill_style_str(colors::AXIS_LABEL);
        let _ = ctx.fill_text(&format!("{:.0}%", line.percent), geom.plot_left() - 6.0, line.y);
    }
}

/// Draw the five retention bars with the percentage above and the stage
/// name below each one.
pub fn draw_retention_chart(
    ctx: &CanvasRenderingContext2d,
    geom: &ChartGeometry,
    funnel: &RetentionFunnel,
    fmt: &NumberFormat,
) {
    ctx.set_fill_style_str(colors::BACKGROUND);
    ctx.fill_rect(0.0, 0.0, geom.width, geom.height);

    draw_grid(ctx, geom);

    let bars = geom.bars(funnel);
    let count = bars.len();
    ctx.set_text_align("center");
    for (i, bar) in bars.iter().enumerate() {
        if bar.height > 0.0 {
            ctx.set_fill_style_str(&colors::stage_color(i, count));
            ctx.fill_rect(bar.x, bar.y, bar.width, bar.height);
        }

        ctx.set_font("bold 11px sans-serif");
        ctx.set_text_baseline("bottom");
        ctx.set_fill_style_str(colors::BAR_LABEL);
        let _ = ctx.fill_text(&fmt.format_percent(bar.percent, 1), bar.center_x, bar.y - 4.0);

        ctx.set_font("10px sans-serif");
        ctx.set_text_baseline("top");
        ctx.set_fill_style_str(colors::STAGE_LABEL);
        let _ = ctx.fill_text(bar.label, bar.center_x, geom.baseline() + 6.0);
    }
}
