use crate::components::{ActivityList, FilterBar, MessageBanner, SignupForm};
use crate::hooks::use_board;
use activity_board_core::{CategoryOption, ViewQuery};
use yew::prelude::*;

/// The board page: filter controls, activity cards and the signup form
///
/// Owns the ephemeral [`ViewQuery`] control state; everything rendered is
/// derived on the fly from the provider's snapshot, so a refreshed snapshot
/// re-derives spots-left counts, category options and the filtered view in
/// one pass.
#[function_component(BoardScreen)]
pub fn board_screen() -> Html {
    let board = use_board();
    let query = use_state(ViewQuery::default);

    let on_query_change = {
        let query = query.clone();
        Callback::from(move |updated: ViewQuery| query.set(updated))
    };

    let (entries, categories, activity_names) = match board.catalog.as_ref() {
        Some(catalog) => (
            catalog.filtered(&query),
            catalog.category_options(),
            catalog.activity_names(),
        ),
        None => (Vec::new(), vec![CategoryOption::all()], Vec::new()),
    };

    let on_unregister = {
        let unregister = board.unregister.clone();
        Callback::from(move |pair: (String, String)| (unregister)(pair))
    };

    let on_signup = {
        let sign_up = board.sign_up.clone();
        Callback::from(move |pair: (String, String)| (sign_up)(pair))
    };

    html! {
        <div class="activity-board">
            <header class="activity-board__header">
                <h1>{"Mergington High School Activities"}</h1>
            </header>

            <MessageBanner message={board.message.clone()} />

            <FilterBar
                categories={categories}
                query={(*query).clone()}
                on_change={on_query_change}
            />

            <ActivityList
                entries={entries}
                loaded={board.catalog.is_some()}
                load_failed={board.load_failed}
                on_unregister={on_unregister}
            />

            <SignupForm
                activity_names={activity_names}
                on_submit={on_signup}
                reset_generation={board.signup_generation}
            />
        </div>
    }
}
