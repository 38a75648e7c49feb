use yew::prelude::*;

use apod_widget::components::ApodWidget;
use apod_widget::config::WidgetConfig;

#[function_component(App)]
fn app() -> Html {
    // Read once at startup; the widget treats it as immutable
    let config = use_memo((), |_| WidgetConfig::load());

    html! {
        <div class="app-container">
            <main class="app-main">
                <ApodWidget config={(*config).clone()} />
            </main>

            <style>
                {include_str!("style.css")}
            </style>
        </div>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
