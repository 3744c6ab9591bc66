use leptos::prelude::*;
use creative_core::media::EMBED_SANDBOX;
use creative_core::{CreativeRecord, MediaSource, MediaView};

/// Embedded player, thumbnail, or placeholder for one creative. A frame that
/// fails to load is swapped for a placeholder naming the ad.
#[component]
pub fn MediaPane(record: CreativeRecord) -> impl IntoView {
    let ad_name = record.display_name();
    let media = RwSignal::new(MediaView::new(&record));

    let name_for_error = ad_name.clone();
    let on_error = move |_| {
        log::error!("Failed to load embedded media for {name_for_error}");
        media.update(|m| *m = m.clone().fail(&name_for_error));
    };

    view! {
        <div class="media-frame">
            {move || match media.get() {
                MediaView::Ready(MediaSource::Embed(url)) => view! {
                    <iframe
                        class="media-embed"
                        src=url
                        title=ad_name.clone()
                        sandbox=EMBED_SANDBOX
                        allow="autoplay; encrypted-media; picture-in-picture"
                        on:error=on_error.clone()
                    ></iframe>
                }.into_any(),
                MediaView::Ready(MediaSource::Thumbnail(url)) => view! {
                    <img class="media-thumbnail" src=url alt=ad_name.clone() />
                }.into_any(),
                other => view! {
                    <div class="media-placeholder">
                        {other.placeholder_text().unwrap_or_default()}
                    </div>
                }.into_any(),
            }}
        </div>
    }
}
