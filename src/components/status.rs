use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct NoticeProps {
    pub message: AttrValue,
}

/// Dimmed single-line message used for the loading and misconfigured states.
#[function_component(Notice)]
pub fn notice(props: &NoticeProps) -> Html {
    html! {
        <div class="apod-notice dimmed light small">{props.message.to_string()}</div>
    }
}
