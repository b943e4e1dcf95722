use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use roster::{async_callback, log};

use crate::components::Status;
use crate::providers::api;

#[derive(Properties, PartialEq)]
pub struct SignupFormProps {
    /// Activity names offered in the select, in display order
    pub activity_names: Vec<String>,
    /// Fired with the outcome of every submission
    pub on_status: Callback<Status>,
    /// Fired after a successful sign-up so the list can be refreshed
    pub on_signed_up: Callback<()>,
}

#[function_component(SignupForm)]
pub fn signup_form(props: &SignupFormProps) -> Html {
    let api = use_memo((), |_| api::create());

    let email = use_state(String::new);
    let activity = use_state(String::new);
    let submitting = use_state(|| false);

    let on_email_input = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                email.set(input.value());
            }
        })
    };

    let on_activity_change = {
        let activity = activity.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                activity.set(select.value());
            }
        })
    };

    let on_status = props.on_status.clone();
    let on_signed_up = props.on_signed_up.clone();
    let on_submit = async_callback!([
        api,
        email,
        activity,
        submitting,
        on_status,
        on_signed_up,
    ] |e: SubmitEvent| {
        e.prevent_default();

        if *submitting {
            return;
        }
        if activity.is_empty() {
            on_status.emit(Status::error("Please select an activity"));
            return;
        }

        submitting.set(true);
        match api.signup(&activity, &email).await {
            Ok(response) => {
                on_status.emit(Status::success(response.message));
                email.set(String::new());
                activity.set(String::new());
                on_signed_up.emit(());
            }
            Err(err) => {
                log::warn!("Sign-up failed: {err}");
                on_status.emit(Status::error(err.to_string()));
            }
        }
        submitting.set(false);
    });

    html! {
        <form id="signup-form" class="space-y-4" onsubmit={on_submit}>
            <div>
                <label for="email" class="block font-medium mb-1">{ "Student Email:" }</label>
                <input
                    id="email"
                    type="email"
                    required=true
                    class="w-full px-3 py-2 border border-gray-300 rounded focus:outline-none focus:ring-2 focus:ring-blue-500"
                    placeholder="your-email@mergington.edu"
                    value={(*email).clone()}
                    oninput={on_email_input}
                />
            </div>
            <div>
                <label for="activity" class="block font-medium mb-1">{ "Select Activity:" }</label>
                <select
                    id="activity"
                    required=true
                    class="w-full px-3 py-2 border border-gray-300 rounded"
                    onchange={on_activity_change}
                >
                    <option value="" selected={activity.is_empty()}>{ "-- Select an activity --" }</option>
                    {
                        props.activity_names.iter().map(|name| html! {
                            <option
                                key={name.clone()}
                                value={name.clone()}
                                selected={*activity == *name}
                            >
                                { name }
                            </option>
                        }).collect::<Html>()
                    }
                </select>
            </div>
            <button
                type="submit"
                class="bg-blue-600 text-white px-4 py-2 rounded hover:bg-blue-700 disabled:opacity-50 cursor-pointer"
                disabled={*submitting}
            >
                { if *submitting { "Signing up..." } else { "Sign Up" } }
            </button>
        </form>
    }
}
