use crate::providers::{Severity, StatusMessage};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct MessageBannerProps {
    /// Current message, or `None` while hidden
    #[prop_or_default]
    pub message: Option<StatusMessage>,
}

/// The single status area shared by success and error feedback
#[function_component(MessageBanner)]
pub fn message_banner(props: &MessageBannerProps) -> Html {
    match &props.message {
        Some(message) => {
            let class = match message.severity {
                Severity::Success => "success",
                Severity::Error => "error",
            };
            html! {
                <div class={classes!("message", class)}>{message.text.clone()}</div>
            }
        }
        None => html! {
            <div class={classes!("message", "hidden")}></div>
        },
    }
}
