use crate::providers::StatusMessage;
use activity_board_core::Catalog;
use std::rc::Rc;
use yew::prelude::*;

/// Board state accessible via hook
#[derive(Clone)]
pub struct BoardContext {
    /// Last successfully fetched snapshot; `None` until the first load
    /// resolves
    pub catalog: Option<Catalog>,

    /// Whether the most recent load failed (the list area shows the fixed
    /// failure message while set)
    pub load_failed: bool,

    /// Current status message, if any (shared by success and error
    /// feedback)
    pub message: Option<StatusMessage>,

    /// Bumped on every successful signup; forms reset their fields on it
    pub signup_generation: u64,

    /// Re-fetch the catalog
    pub reload: Rc<dyn Fn()>,

    /// Sign up an (activity name, email) pair
    pub sign_up: Rc<dyn Fn((String, String))>,

    /// Unregister an (activity name, email) pair
    pub unregister: Rc<dyn Fn((String, String))>,
}

impl PartialEq for BoardContext {
    fn eq(&self, other: &Self) -> bool {
        self.catalog == other.catalog
            && self.load_failed == other.load_failed
            && self.message == other.message
            && self.signup_generation == other.signup_generation
    }
}

/// Hook to access the board state
///
/// # Example
///
/// ```rust,no_run
/// use activity_board_yew::use_board;
/// use yew::prelude::*;
///
/// #[function_component(SignupShortcut)]
/// fn signup_shortcut() -> Html {
///     let board = use_board();
///
///     // Sign up for an activity
///     (board.sign_up)(("Chess Club".to_string(), "alice@mergington.edu".to_string()));
///     html! {}
/// }
/// ```
#[hook]
pub fn use_board() -> BoardContext {
    use_context::<BoardContext>().expect("use_board must be used within a BoardProvider")
}
