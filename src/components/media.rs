use crate::models::view::MediaView;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct MediaProps {
    pub media: MediaView,
}

#[function_component(Media)]
pub fn media(props: &MediaProps) -> Html {
    match &props.media {
        MediaView::Image { src, alt, style } => html! {
            <img
                class="apod-media"
                src={src.clone()}
                alt={alt.clone()}
                style={(!style.is_empty()).then(|| style.clone())}
            />
        },
        MediaView::Video {
            src,
            width,
            height,
            style,
        } => html! {
            <iframe
                class="apod-media"
                src={src.clone()}
                width={width.to_string()}
                height={height.to_string()}
                style={style.clone()}
                allow="autoplay; encrypted-media; fullscreen"
            />
        },
    }
}
