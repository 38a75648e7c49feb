use crate::models::view::BackgroundView;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct BackgroundProps {
    pub view: BackgroundView,
}

/// Full-bleed layer with an optional overlay painted on top.
#[function_component(Background)]
pub fn background(props: &BackgroundProps) -> Html {
    let view = &props.view;
    let image_style = format!(
        "{} animation-duration: {}ms;",
        view.image_style, view.animation_ms
    );

    html! {
        <div key={view.key.clone()} class="apod-background">
            <div class="apod-background-image apod-fade" style={image_style}></div>
            if let Some(overlay) = &view.overlay_style {
                <div class="apod-background-overlay" style={overlay.clone()}></div>
            }
        </div>
    }
}
