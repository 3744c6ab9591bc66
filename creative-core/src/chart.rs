use crate::metrics::RetentionFunnel;

/// Fixed pixel layout of the retention bar chart.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartGeometry {
    pub width: f64,
    pub height: f64,
    /// Gutter left of the plot for y-axis labels
    pub axis_width: f64,
    /// Room above the plot for percentage labels
    pub top_pad: f64,
    /// Room below the plot for stage labels
    pub bottom_pad: f64,
    pub bar_width: f64,
}

impl Default for ChartGeometry {
    fn default() -> Self {
        Self {
            width: 360.0,
            height: 220.0,
            axis_width: 36.0,
            top_pad: 22.0,
            bottom_pad: 26.0,
            bar_width: 36.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct BarLayout {
    pub label: &'static str,
    pub percent: f64,
    pub x: f64,
    /// Top edge of the bar
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Horizontal center, used for both labels
    pub center_x: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridLine {
    pub percent: f64,
    pub y: f64,
}

pub const GRID_PERCENTS: [f64; 5] = [0.0, 25.0, 50.0, 75.0, 100.0];

impl ChartGeometry {
    pub fn plot_left(&self) -> f64 {
        self.axis_width
    }

    pub fn plot_width(&self) -> f64 {
        (self.width - self.axis_width).max(0.0)
    }

    pub fn plot_height(&self) -> f64 {
        (self.height - self.top_pad - self.bottom_pad).max(0.0)
    }

    /// Baseline (0%) y coordinate.
    pub fn baseline(&self) -> f64 {
        self.top_pad + self.plot_height()
    }

    pub fn y_for(&self, percent: f64) -> f64 {
        let p = if percent.is_finite() { percent.clamp(0.0, 100.0) } else { 0.0 };
        self.baseline() - p / 100.0 * self.plot_height()
    }

    pub fn gridlines(&self) -> [GridLine; 5] {
        GRID_PERCENTS.map(|percent| GridLine { percent, y: self.y_for(percent) })
    }

    /// One equal-width slot per stage, bar centered in its slot.
    pub fn bars(&self, funnel: &RetentionFunnel) -> Vec<BarLayout> {
        let n = funnel.stages.len();
        let slot = self.plot_width() / n as f64;
        let bar_w = self.bar_width.min(slot);
        funnel
            .stages
            .iter()
            .enumerate()
            .map(|(i, stage)| {
                let x = self.plot_left() + slot * i as f64 + (slot - bar_w) / 2.0;
                let y = self.y_for(stage.percent);
                BarLayout {
                    label: stage.label,
                    percent: stage.percent,
                    x,
                    y,
                    width: bar_w,
                    height: self.baseline() - y,
                    center_x: x + bar_w / 2.0,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CreativeRecord;

    fn funnel() -> RetentionFunnel {
        RetentionFunnel::from_record(&CreativeRecord {
            video_views: 200,
            video_views_25: 150,
            video_views_50: 100,
            video_views_75: 50,
            video_views_100: 0,
            ..Default::default()
        })
    }

    #[test]
    fn test_bar_heights_proportional() {
        let g = ChartGeometry::default();
        let bars = g.bars(&funnel());
        assert_eq!(bars.len(), 5);
        let full = g.plot_height();
        let expected = [1.0, 0.75, 0.5, 0.25, 0.0];
        for (bar, frac) in bars.iter().zip(expected) {
            assert!(
                (bar.height - full * frac).abs() < 1e-9,
                "{}: height {} expected {}",
                bar.label, bar.height, full * frac
            );
            assert!((bar.y + bar.height - g.baseline()).abs() < 1e-9);
        }
    }

    #[test]
    fn test_bars_equally_spaced_inside_plot() {
        let g = ChartGeometry::default();
        let bars = g.bars(&funnel());
        let step = bars[1].x - bars[0].x;
        for pair in bars.windows(2) {
            assert!((pair[1].x - pair[0].x - step).abs() < 1e-9);
            assert_eq!(pair[0].width, g.bar_width);
        }
        assert!(bars[0].x >= g.plot_left());
        let last = bars.last().unwrap();
        assert!(last.x + last.width <= g.width);
    }

    #[test]
    fn test_out_of_range_percent_is_clamped() {
        let g = ChartGeometry::default();
        assert_eq!(g.y_for(250.0), g.top_pad);
        assert_eq!(g.y_for(-5.0), g.baseline());
        assert_eq!(g.y_for(f64::NAN), g.baseline());
    }

    #[test]
    fn test_gridlines() {
        let g = ChartGeometry::default();
        let lines = g.gridlines();
        assert_eq!(lines[0].y, g.baseline());
        assert_eq!(lines[4].y, g.top_pad);
        assert!(lines.windows(2).all(|w| w[0].y > w[1].y));
    }

    #[test]
    fn test_narrow_canvas_shrinks_bars() {
        let g = ChartGeometry { width: 100.0, axis_width: 20.0, ..Default::default() };
        let bars = g.bars(&funnel());
        assert!((bars[0].width - 16.0).abs() < 1e-9);
    }
}
