use crate::types::CreativeRecord;

/// Sandbox flags for the embedded player frame.
pub const EMBED_SANDBOX: &str = "allow-scripts allow-same-origin allow-presentation";

/// What the media pane shows for a record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MediaSource {
    Embed(String),
    Thumbnail(String),
    Empty,
}

impl MediaSource {
    /// Embed wins over thumbnail; blank URLs count as missing.
    pub fn resolve(rec: &CreativeRecord) -> Self {
        if let Some(url) = rec.media_url() {
            Self::Embed(url.to_string())
        } else if let Some(url) = rec.thumbnail_url() {
            Self::Thumbnail(url.to_string())
        } else {
            Self::Empty
        }
    }
}

pub fn media_unavailable_message(ad_name: &str) -> String {
    format!("Media unavailable for \"{ad_name}\"")
}

/// Load outcome of the media pane.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MediaView {
    Ready(MediaSource),
    Unavailable { ad_name: String },
}

impl MediaView {
    pub fn new(rec: &CreativeRecord) -> Self {
        Self::Ready(MediaSource::resolve(rec))
    }

    /// Replace a failed embed with the placeholder. Thumbnails and empty
    /// media stay as they are.
    pub fn fail(self, ad_name: &str) -> Self {
        match self {
            Self::Ready(MediaSource::Embed(url)) => {
                log::debug!("embed {url} replaced by placeholder");
                Self::Unavailable { ad_name: ad_name.to_string() }
            }
            other => other,
        }
    }

    pub fn placeholder_text(&self) -> Option<String> {
        match self {
            Self::Unavailable { ad_name } => Some(media_unavailable_message(ad_name)),
            Self::Ready(MediaSource::Empty) => Some("No media available".to_string()),
            Self::Ready(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(media: Option<&str>, thumb: Option<&str>) -> CreativeRecord {
        CreativeRecord {
            ad_name: "Holiday cut".into(),
            media_url: media.map(String::from),
            thumbnail_url: thumb.map(String::from),
            ..Default::default()
        }
    }

    #[test]
    fn test_resolution_order() {
        assert_eq!(
            MediaSource::resolve(&rec(Some("https://v.example/1"), Some("https://t.example/1.jpg"))),
            MediaSource::Embed("https://v.example/1".into())
        );
        assert_eq!(
            MediaSource::resolve(&rec(None, Some("https://t.example/1.jpg"))),
            MediaSource::Thumbnail("https://t.example/1.jpg".into())
        );
        assert_eq!(MediaSource::resolve(&rec(None, None)), MediaSource::Empty);
        assert_eq!(MediaSource::resolve(&rec(Some(""), None)), MediaSource::Empty);
    }

    #[test]
    fn test_embed_failure_names_the_ad() {
        let r = rec(Some("https://v.example/broken"), None);
        let view = MediaView::new(&r).fail(&r.display_name());
        let text = view.placeholder_text().expect("failed embed should show a placeholder");
        assert!(text.contains("Holiday cut"), "placeholder was {text:?}");
    }

    #[test]
    fn test_failure_on_non_embed_is_noop() {
        let r = rec(None, Some("https://t.example/1.jpg"));
        let view = MediaView::new(&r);
        assert_eq!(view.clone().fail("x"), view);
        assert!(view.placeholder_text().is_none());

        let empty = MediaView::new(&rec(None, None));
        assert_eq!(empty.clone().fail("x"), empty);
        assert_eq!(empty.placeholder_text().as_deref(), Some("No media available"));
    }

    #[test]
    fn test_repeated_failure_is_stable() {
        let r = rec(Some("https://v.example/broken"), None);
        let once = MediaView::new(&r).fail("Holiday cut");
        let twice = once.clone().fail("Holiday cut");
        assert_eq!(once, twice);
    }
}
