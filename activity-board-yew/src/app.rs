use crate::pages::BoardScreen;
use crate::providers::BoardProvider;
use yew::prelude::*;

/// Application root: one board provider (same-origin API) around the screen
#[function_component(App)]
pub fn app() -> Html {
    html! {
        <div class="app">
            <BoardProvider api_base="">
                <BoardScreen />
            </BoardProvider>
        </div>
    }
}
