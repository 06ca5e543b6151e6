use yew::prelude::*;

const SELECT_SENTINEL_LABEL: &str = "-- Select an activity --";

#[derive(Properties, PartialEq)]
pub struct SignupFormProps {
    /// Activity names for the select, in catalog order
    pub activity_names: Vec<String>,

    /// Emits the (activity name, email) pair on submit
    pub on_submit: Callback<(String, String)>,

    /// Bumped by the provider when a signup succeeds; the fields reset on
    /// every change
    #[prop_or_default]
    pub reset_generation: u64,
}

/// Email input + activity select + submit button
///
/// Submit stays disabled while either field is empty. No email format
/// validation is done client-side; the server is authoritative.
#[function_component(SignupForm)]
pub fn signup_form(props: &SignupFormProps) -> Html {
    let email = use_state(String::new);
    let activity = use_state(String::new);

    {
        let email = email.clone();
        let activity = activity.clone();
        use_effect_with(props.reset_generation, move |_| {
            email.set(String::new());
            activity.set(String::new());
            || ()
        });
    }

    let on_email = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let on_activity = {
        let activity = activity.clone();
        Callback::from(move |e: Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            activity.set(select.value());
        })
    };

    let onsubmit = {
        let email = email.clone();
        let activity = activity.clone();
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if !activity.is_empty() && !email.is_empty() {
                on_submit.emit(((*activity).clone(), (*email).clone()));
            }
        })
    };

    let incomplete = email.is_empty() || activity.is_empty();

    html! {
        <form class="signup-form" {onsubmit}>
            <h3 class="signup-form__title">{"Sign Up for an Activity"}</h3>
            <label class="signup-form__label">
                {"Email"}
                <input
                    class="signup-form__email"
                    type="text"
                    placeholder="your-email@mergington.edu"
                    value={(*email).clone()}
                    oninput={on_email}
                />
            </label>
            <label class="signup-form__label">
                {"Activity"}
                <select class="signup-form__activity" onchange={on_activity}>
                    <option value="" selected={activity.is_empty()}>
                        {SELECT_SENTINEL_LABEL}
                    </option>
                    {for props.activity_names.iter().map(|name| {
                        html! {
                            <option
                                value={name.clone()}
                                selected={*name == *activity}
                            >
                                {name.clone()}
                            </option>
                        }
                    })}
                </select>
            </label>
            <button class="signup-form__submit" type="submit" disabled={incomplete}>
                {"Sign Up"}
            </button>
        </form>
    }
}
