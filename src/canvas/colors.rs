pub const BACKGROUND: &str = "#111318";
pub const GRID_LINE: &str = "rgba(255,255,255,0.08)";
pub const AXIS_LABEL: &str = "#7a7f8c";
pub const BAR_LABEL: &str = "#e6e8ee";
pub const STAGE_LABEL: &str = "#a2a7b3";

/// Bar fill for a funnel stage: cyan at the start fading toward pink at
/// completion, echoing the platform palette.
pub fn stage_rgb(index: usize, stage_count: usize) -> [u8; 3] {
    const START: [u8; 3] = [37, 244, 238];
    const END: [u8; 3] = [254, 44, 85];
    if stage_count <= 1 {
        return START;
    }
    let t = (index.min(stage_count - 1)) as f32 / (stage_count - 1) as f32;
    let lerp = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
    [lerp(START[0], END[0]), lerp(START[1], END[1]), lerp(START[2], END[2])]
}

pub fn stage_color(index: usize, stage_count: usize) -> String {
    let [r, g, b] = stage_rgb(index, stage_count);
    format!("rgb({r},{g},{b})")
}
