pub mod app;
pub mod creative_list;
pub mod creative_modal;
pub mod media_pane;
pub mod metrics_grid;
pub mod retention_chart;
