use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use creative_core::types::parse_records;
use creative_core::{CreativeRecord, DisplayConfig};

/// Bundled sample export, copied next to the wasm by the build.
pub const DEMO_CREATIVES_URL: &str = "demo/creatives.json";

/// Fetch a creatives document and its optional display config. A bad
/// `config` block falls back to defaults; bad records fail the whole load.
pub async fn fetch_creatives(url: &str) -> Result<(DisplayConfig, Vec<CreativeRecord>), String> {
    let window = web_sys::window().ok_or("No window")?;
    let resp: web_sys::Response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| format!("{url}: request failed: {e:?}"))?
        .dyn_into()
        .map_err(|_| format!("{url}: not a Response"))?;
    if !resp.ok() {
        return Err(format!("{url}: HTTP {} {}", resp.status(), resp.status_text()));
    }
    let body_promise = resp.text().map_err(|e| format!("{url}: body unreadable: {e:?}"))?;
    let document = JsFuture::from(body_promise)
        .await
        .map_err(|e| format!("{url}: body unreadable: {e:?}"))?
        .as_string()
        .ok_or_else(|| format!("{url}: body is not text"))?;

    let config = DisplayConfig::from_document(&document).unwrap_or_else(|e| {
        log::warn!("Ignoring display config in {url}: {e}");
        DisplayConfig::default()
    });
    let records = parse_records(&document).map_err(|e| format!("{url}: {e}"))?;
    log::info!("Loaded {} creatives from {url}", records.len());
    Ok((config, records))
}
