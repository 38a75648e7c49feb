use crate::components::media::Media;
use crate::models::view::CardView;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CardProps {
    pub view: CardView,
}

/// Title, media, copyright and description stacked in that order.
#[function_component(Card)]
pub fn card(props: &CardProps) -> Html {
    let view = &props.view;
    let fade = format!("animation-duration: {}ms;", view.animation_ms);

    html! {
        <div key={view.key.clone()} class="apod-card apod-fade" style={fade}>
            if let Some(title) = &view.title {
                <div class="apod-title dimmed light small">{title.clone()}</div>
            }
            if let Some(date) = &view.date {
                <div class="apod-date dimmed thin xsmall">{date.clone()}</div>
            }

            <Media media={view.media.clone()} />

            if let Some(copyright) = &view.copyright {
                <div class="apod-copyright dimmed thin xsmall">{copyright.clone()}</div>
            }
            if let Some(description) = &view.description {
                <div
                    class="apod-description dimmed light xsmall"
                    style={(!description.style.is_empty()).then(|| description.style.clone())}
                >
                    {description.text.clone()}
                </div>
            }
        </div>
    }
}
