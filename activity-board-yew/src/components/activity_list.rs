use crate::components::ActivityCard;
use activity_board_core::Activity;
use yew::prelude::*;

/// Fixed text shown when the catalog could not be fetched; distinct from
/// the filter's "no results" message
pub const LOAD_FAILED_TEXT: &str = "Failed to load activities. Please try again later.";

/// Shown when the filters match nothing in a loaded snapshot
pub const NO_RESULTS_TEXT: &str = "No activities found.";

const LOADING_TEXT: &str = "Loading activities...";

#[derive(Properties, PartialEq)]
pub struct ActivityListProps {
    /// The filtered, sorted view (already derived from the snapshot)
    pub entries: Vec<(String, Activity)>,

    /// Whether a snapshot has been loaded at all
    pub loaded: bool,

    /// Whether the most recent load failed
    pub load_failed: bool,

    pub on_unregister: Callback<(String, String)>,
}

/// The activity card container
///
/// Cleared and rebuilt wholesale on every view change; a failed load
/// replaces the whole area with [`LOAD_FAILED_TEXT`] and nothing else.
#[function_component(ActivityList)]
pub fn activity_list(props: &ActivityListProps) -> Html {
    html! {
        <div class="activities-list">
            {if props.load_failed {
                html! {
                    <p class="activities-list__error">{LOAD_FAILED_TEXT}</p>
                }
            } else if !props.loaded {
                html! {
                    <p class="activities-list__loading">{LOADING_TEXT}</p>
                }
            } else if props.entries.is_empty() {
                html! {
                    <p class="activities-list__empty">{NO_RESULTS_TEXT}</p>
                }
            } else {
                html! {
                    <>
                        {for props.entries.iter().map(|(name, activity)| {
                            html! {
                                <ActivityCard
                                    key={name.clone()}
                                    name={name.clone()}
                                    activity={activity.clone()}
                                    on_unregister={props.on_unregister.clone()}
                                />
                            }
                        })}
                    </>
                }
            }}
        </div>
    }
}
