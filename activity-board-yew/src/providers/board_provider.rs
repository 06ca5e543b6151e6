use crate::api::{self, ApiError};
use crate::hooks::BoardContext;
use activity_board_core::Catalog;
use std::rc::Rc;
use yew::prelude::*;

const SIGNUP_FAILED_TEXT: &str = "Failed to sign up. Please try again.";
const UNREGISTER_FAILED_TEXT: &str = "Failed to unregister. Please try again.";

/// How long a status message stays visible before auto-dismissing
const MESSAGE_VISIBLE_MS: u32 = 5_000;

/// Visual severity of a status message (maps to the `success` / `error`
/// banner classes)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

/// One entry of the shared status area
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub severity: Severity,
}

impl StatusMessage {
    pub fn success(text: impl Into<String>) -> Self {
        StatusMessage {
            text: text.into(),
            severity: Severity::Success,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        StatusMessage {
            text: text.into(),
            severity: Severity::Error,
        }
    }
}

/// Monotonic request sequence numbers, one per action kind
///
/// In-flight requests are never aborted; instead a resolution is applied
/// only when its ticket is still the most recent issued for that kind, so a
/// slow stale response cannot overwrite the result of a newer one.
#[derive(Debug, Default)]
struct RequestCounters {
    load: u64,
    signup: u64,
    unregister: u64,
}

impl RequestCounters {
    fn next_load(&mut self) -> u64 {
        self.load += 1;
        self.load
    }

    fn next_signup(&mut self) -> u64 {
        self.signup += 1;
        self.signup
    }

    fn next_unregister(&mut self) -> u64 {
        self.unregister += 1;
        self.unregister
    }

    fn is_current_load(&self, ticket: u64) -> bool {
        self.load == ticket
    }

    fn is_current_signup(&self, ticket: u64) -> bool {
        self.signup == ticket
    }

    fn is_current_unregister(&self, ticket: u64) -> bool {
        self.unregister == ticket
    }
}

#[derive(Properties, PartialEq)]
pub struct BoardProviderProps {
    /// Base URL of the activities service; empty = same origin
    #[prop_or_default]
    pub api_base: AttrValue,
    pub children: Children,
}

/// Holds the activity snapshot and mediates every network action that
/// mutates server-side participant lists
///
/// Children access the state through [`use_board`](crate::use_board). The
/// snapshot is replaced wholesale on every successful load; a failed load
/// leaves the prior snapshot untouched but flags the list area to show the
/// fixed failure message until a load succeeds.
#[function_component(BoardProvider)]
pub fn board_provider(props: &BoardProviderProps) -> Html {
    let catalog = use_state(|| None::<Catalog>);
    let load_failed = use_state(|| false);
    let message = use_state(|| None::<StatusMessage>);
    let signup_generation = use_state(|| 0u64);

    let counters = use_mut_ref(RequestCounters::default);

    let reload: Rc<dyn Fn()> = {
        let catalog = catalog.clone();
        let load_failed = load_failed.clone();
        let counters = counters.clone();
        let api_base = props.api_base.to_string();

        Rc::new(move || {
            let ticket = counters.borrow_mut().next_load();
            let catalog = catalog.clone();
            let load_failed = load_failed.clone();
            let counters = counters.clone();
            let api_base = api_base.clone();

            wasm_bindgen_futures::spawn_local(async move {
                let result = api::fetch_activities(&api_base).await;

                if !counters.borrow().is_current_load(ticket) {
                    tracing::debug!("Dropping stale load response (ticket {})", ticket);
                    return;
                }

                match result {
                    Ok(snapshot) => {
                        tracing::info!("Loaded {} activities", snapshot.len());
                        catalog.set(Some(snapshot));
                        load_failed.set(false);
                    }
                    Err(err) => {
                        tracing::error!("Failed to load activities: {err}");
                        load_failed.set(true);
                    }
                }
            });
        })
    };

    // Show a message, auto-dismissing after the fixed delay. A newer message
    // arriving inside the window simply overwrites this one; its own timer
    // will hide whatever is displayed when it fires (no cancellation).
    let show_message: Rc<dyn Fn(StatusMessage)> = {
        let message = message.clone();

        Rc::new(move |msg: StatusMessage| {
            message.set(Some(msg));

            let message = message.clone();
            wasm_bindgen_futures::spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(MESSAGE_VISIBLE_MS).await;
                message.set(None);
            });
        })
    };

    let sign_up: Rc<dyn Fn((String, String))> = {
        let counters = counters.clone();
        let reload = reload.clone();
        let show_message = show_message.clone();
        let signup_generation = signup_generation.clone();
        let api_base = props.api_base.to_string();

        Rc::new(move |(activity, email): (String, String)| {
            let ticket = counters.borrow_mut().next_signup();
            let counters = counters.clone();
            let reload = reload.clone();
            let show_message = show_message.clone();
            let signup_generation = signup_generation.clone();
            let api_base = api_base.clone();

            tracing::info!("Signing up {} for {}", email, activity);

            wasm_bindgen_futures::spawn_local(async move {
                let result = api::sign_up(&api_base, &activity, &email).await;

                if !counters.borrow().is_current_signup(ticket) {
                    tracing::debug!("Dropping stale signup response (ticket {})", ticket);
                    return;
                }

                match result {
                    Ok(text) => {
                        show_message(StatusMessage::success(text));
                        signup_generation.set(*signup_generation + 1);
                        reload();
                    }
                    Err(ApiError::Rejected { status, detail }) => {
                        tracing::warn!("Signup rejected ({status}): {detail}");
                        show_message(StatusMessage::error(detail));
                    }
                    Err(err) => {
                        tracing::error!("Signup failed: {err}");
                        show_message(StatusMessage::error(SIGNUP_FAILED_TEXT));
                    }
                }
            });
        })
    };

    let unregister: Rc<dyn Fn((String, String))> = {
        let counters = counters.clone();
        let reload = reload.clone();
        let show_message = show_message.clone();
        let api_base = props.api_base.to_string();

        Rc::new(move |(activity, email): (String, String)| {
            let ticket = counters.borrow_mut().next_unregister();
            let counters = counters.clone();
            let reload = reload.clone();
            let show_message = show_message.clone();
            let api_base = api_base.clone();

            tracing::info!("Unregistering {} from {}", email, activity);

            wasm_bindgen_futures::spawn_local(async move {
                let result = api::unregister(&api_base, &activity, &email).await;

                if !counters.borrow().is_current_unregister(ticket) {
                    tracing::debug!("Dropping stale unregister response (ticket {})", ticket);
                    return;
                }

                match result {
                    Ok(text) => {
                        show_message(StatusMessage::success(text));
                        reload();
                    }
                    Err(ApiError::Rejected { status, detail }) => {
                        tracing::warn!("Unregister rejected ({status}): {detail}");
                        show_message(StatusMessage::error(detail));
                    }
                    Err(err) => {
                        tracing::error!("Unregister failed: {err}");
                        show_message(StatusMessage::error(UNREGISTER_FAILED_TEXT));
                    }
                }
            });
        })
    };

    // Initial load
    {
        let reload = reload.clone();
        use_effect_with((), move |_| {
            reload();
            || ()
        });
    }

    let context = BoardContext {
        catalog: (*catalog).clone(),
        load_failed: *load_failed,
        message: (*message).clone(),
        signup_generation: *signup_generation,
        reload,
        sign_up,
        unregister,
    };

    html! {
        <ContextProvider<BoardContext> {context}>
            {props.children.clone()}
        </ContextProvider<BoardContext>>
    }
}
