use crate::format::NumberFormat;
use crate::types::CreativeRecord;

/// `part / whole * 100`, or 0 when `whole` is 0.
fn percent_of(part: f64, whole: f64) -> f64 {
    if whole > 0.0 { part / whole * 100.0 } else { 0.0 }
}

/// Click-through rate in percent.
pub fn ctr(rec: &CreativeRecord) -> f64 {
    percent_of(rec.clicks as f64, rec.impressions as f64)
}

/// Views the retention funnel is measured against. Falls back to 2-second
/// views when the platform reports no regular views.
pub fn total_views(rec: &CreativeRecord) -> u64 {
    if rec.video_views > 0 { rec.video_views } else { rec.two_second_video_views }
}

/// Video-through rate: completed views per impression, in percent.
pub fn vtr(rec: &CreativeRecord) -> f64 {
    percent_of(rec.video_views_100 as f64, rec.impressions as f64)
}

/// Cost per view in the account currency.
pub fn cpv(rec: &CreativeRecord) -> f64 {
    let views = total_views(rec);
    if views > 0 { rec.cost / views as f64 } else { 0.0 }
}

/// Paid likes, comments, shares and follows combined, saturating at `u64::MAX`.
pub fn engagements(rec: &CreativeRecord) -> u64 {
    [rec.paid_comments, rec.paid_shares, rec.paid_follows]
        .into_iter()
        .fold(rec.paid_likes, u64::saturating_add)
}

/// Engagements per impression, in percent.
pub fn engagement_rate(rec: &CreativeRecord) -> f64 {
    percent_of(engagements(rec) as f64, rec.impressions as f64)
}

#[derive(Clone, Debug, PartialEq)]
pub struct RetentionStage {
    pub label: &'static str,
    pub percent: f64,
    pub views: u64,
}

pub const STAGE_LABELS: [&str; 5] = ["Start", "25%", "50%", "75%", "100%"];

/// Share of viewers still watching at each quartile.
#[derive(Clone, Debug, PartialEq)]
pub struct RetentionFunnel {
    pub total_views: u64,
    pub stages: [RetentionStage; 5],
}

impl RetentionFunnel {
    pub fn from_record(rec: &CreativeRecord) -> Self {
        let total = total_views(rec);
        let counts = [
            total,
            rec.video_views_25,
            rec.video_views_50,
            rec.video_views_75,
            rec.video_views_100,
        ];
        let stages = std::array::from_fn(|i| RetentionStage {
            label: STAGE_LABELS[i],
            // start is 100% by definition, even with no views
            percent: if i == 0 { 100.0 } else { percent_of(counts[i] as f64, total as f64) },
            views: counts[i],
        });
        Self { total_views: total, stages }
    }

    /// Percentages for the 25/50/75/100 quartiles.
    pub fn quartiles(&self) -> [f64; 4] {
        std::array::from_fn(|i| self.stages[i + 1].percent)
    }

    pub fn completion_rate(&self) -> f64 {
        self.stages[4].percent
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CreativeMetrics {
    pub ctr: f64,
    pub vtr: f64,
    pub cpv: f64,
    pub engagements: u64,
    pub engagement_rate: f64,
    pub funnel: RetentionFunnel,
}

impl CreativeMetrics {
    pub fn from_record(rec: &CreativeRecord) -> Self {
        Self {
            ctr: ctr(rec),
            vtr: vtr(rec),
            cpv: cpv(rec),
            engagements: engagements(rec),
            engagement_rate: engagement_rate(rec),
            funnel: RetentionFunnel::from_record(rec),
        }
    }
}

/// One cell of the metrics grid.
#[derive(Clone, Debug, PartialEq)]
pub struct MetricTile {
    pub label: &'static str,
    pub value: String,
    /// Unabbreviated value shown as a tooltip
    pub exact: Option<String>,
}

impl MetricTile {
    fn count(label: &'static str, value: u64, fmt: &NumberFormat) -> Self {
        Self {
            label,
            value: fmt.format_count(value),
            exact: Some(fmt.format_grouped(value)),
        }
    }

    fn plain(label: &'static str, value: String) -> Self {
        Self { label, value, exact: None }
    }
}

/// Ordered tiles for the metrics grid.
pub fn metric_tiles(rec: &CreativeRecord, metrics: &CreativeMetrics, fmt: &NumberFormat) -> Vec<MetricTile> {
    vec![
        MetricTile::count("Impressions", rec.impressions, fmt),
        MetricTile::count("Clicks", rec.clicks, fmt),
        MetricTile::plain("CTR", fmt.format_percent(metrics.ctr, 2)),
        MetricTile::plain("Cost", fmt.format_currency(rec.cost)),
        MetricTile::plain("CPC", fmt.format_currency(rec.cpc)),
        MetricTile::plain("CPM", fmt.format_currency(rec.cpm)),
        MetricTile::count("Reach", rec.reach, fmt),
        MetricTile::plain("Frequency", fmt.format_decimal(rec.frequency, 2)),
        MetricTile::count("Results", rec.results, fmt),
        MetricTile::count("Video views", rec.video_views, fmt),
        MetricTile::count("2s views", rec.two_second_video_views, fmt),
        MetricTile::count("Profile visits", rec.profile_visits, fmt),
        MetricTile::count("Likes", rec.paid_likes, fmt),
        MetricTile::count("Comments", rec.paid_comments, fmt),
        MetricTile::count("Shares", rec.paid_shares, fmt),
        MetricTile::count("Follows", rec.paid_follows, fmt),
        MetricTile::plain("Engagement rate", fmt.format_percent(metrics.engagement_rate, 2)),
    ]
}
