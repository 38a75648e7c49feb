use yew::prelude::*;

use crate::components::{background::Background, card::Card, status::Notice};
use crate::config::WidgetConfig;
use crate::hooks::use_apod::use_apod;
use crate::models::view::ApodView;

#[derive(Properties, PartialEq)]
pub struct ApodWidgetProps {
    pub config: WidgetConfig,
}

/// Astronomy Picture of the Day widget.
#[function_component(ApodWidget)]
pub fn apod_widget(props: &ApodWidgetProps) -> Html {
    let state = use_apod(props.config.clone());

    match ApodView::present(&props.config, &state) {
        ApodView::ConfigError(message) | ApodView::Loading(message) => html! {
            <div class="apod-widget">
                <Notice message={message} />
            </div>
        },
        ApodView::Card(view) => html! {
            <div class="apod-widget">
                <Card {view} />
            </div>
        },
        ApodView::Background(view) => html! {
            <Background {view} />
        },
    }
}
