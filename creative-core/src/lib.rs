pub mod chart;
pub mod config;
pub mod format;
pub mod media;
pub mod metrics;
pub mod player;
pub mod types;

pub use config::DisplayConfig;
pub use format::{Locale, NumberFormat, SuffixStyle};
pub use media::{MediaSource, MediaView};
pub use metrics::{CreativeMetrics, RetentionFunnel};
pub use player::PlayerState;
pub use types::CreativeRecord;

/// The record the modal should show, or `None` when it renders nothing.
pub fn visible_creative(creative: Option<&CreativeRecord>, is_open: bool) -> Option<&CreativeRecord> {
    if is_open { creative } else { None }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closed_modal_renders_nothing() {
        let rec = CreativeRecord::default();
        assert!(visible_creative(Some(&rec), false).is_none());
        assert!(visible_creative(None, true).is_none());
        assert!(visible_creative(None, false).is_none());
    }

    #[test]
    fn test_open_modal_with_record() {
        let rec = CreativeRecord { ad_name: "Summer drop".into(), ..Default::default() };
        let shown = visible_creative(Some(&rec), true).expect("record should be visible");
        assert_eq!(shown.ad_name, "Summer drop");
    }
}
