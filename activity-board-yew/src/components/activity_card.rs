use activity_board_core::Activity;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ActivityCardProps {
    pub name: AttrValue,
    pub activity: Activity,

    /// Emits the explicit (activity name, participant email) pair; the
    /// handler never reads identifiers back out of the DOM
    pub on_unregister: Callback<(String, String)>,
}

/// One activity: name, description, schedule, remaining capacity and the
/// removable participant rows
#[function_component(ActivityCard)]
pub fn activity_card(props: &ActivityCardProps) -> Html {
    // Derived fresh on every render, never cached
    let spots_left = props.activity.spots_left();

    html! {
        <div class="activity-card">
            <h4 class="activity-card__name">{props.name.clone()}</h4>
            <p class="activity-card__description">{&props.activity.description}</p>
            <p class="activity-card__schedule">
                <strong>{"Schedule: "}</strong>
                {&props.activity.schedule}
            </p>
            <p class="activity-card__availability">
                <strong>{"Availability: "}</strong>
                {format!("{spots_left} spots left")}
            </p>
            <div class="participants-container">
                {if props.activity.has_participants() {
                    html! {
                        <div class="participants-section">
                            <h5>{"Participants:"}</h5>
                            <ul class="participants-list">
                                {for props.activity.participants.iter().map(|email| {
                                    let on_unregister = props.on_unregister.clone();
                                    let activity_name = props.name.to_string();
                                    let email_payload = email.clone();

                                    html! {
                                        <li class="participants-list__row">
                                            <span class="participant-email">{email.clone()}</span>
                                            <button
                                                class="delete-btn"
                                                onclick={move |_| on_unregister.emit((
                                                    activity_name.clone(),
                                                    email_payload.clone(),
                                                ))}
                                            >
                                                {"❌"}
                                            </button>
                                        </li>
                                    }
                                })}
                            </ul>
                        </div>
                    }
                } else {
                    html! {
                        <p class="participants-empty"><em>{"No participants yet"}</em></p>
                    }
                }}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spots_left_tracks_participant_changes() {
        let activity = Activity::new("d".to_string(), "Fri 3pm".to_string(), 10)
            .with_participants(vec!["a@x.com".to_string()]);

        let props = yew::props!(ActivityCardProps {
            name: "Chess Club",
            activity: activity.clone(),
            on_unregister: Callback::from(|_: (String, String)| {}),
        });

        assert_eq!(props.activity.spots_left(), 9);

        // Same card rendered after the participant list changed
        let mut refreshed = activity;
        refreshed.participants.clear();
        let props = yew::props!(ActivityCardProps {
            name: "Chess Club",
            activity: refreshed,
            on_unregister: Callback::from(|_: (String, String)| {}),
        });

        assert_eq!(props.activity.spots_left(), 10);
        assert!(!props.activity.has_participants());
    }

    #[test]
    fn test_last_participant_removed_shows_placeholder_branch() {
        let activity = Activity::new("d".to_string(), "Fri 3pm".to_string(), 5);

        let props = yew::props!(ActivityCardProps {
            name: "Gym Class",
            activity,
            on_unregister: Callback::from(|_: (String, String)| {}),
        });

        // Empty participant list takes the "No participants yet" branch
        assert!(!props.activity.has_participants());
    }
}
