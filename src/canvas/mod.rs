pub mod colors;
pub mod retention_renderer;
