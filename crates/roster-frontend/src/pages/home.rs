use gloo_timers::callback::Timeout;
use yew::prelude::*;

use roster::{async_callback, data::Activities, log};

use crate::components::{
    ActivityCard, PendingClear, STATUS_TIMEOUT_MS, SignupForm, Status, StatusMessage,
};
use crate::providers::api;

#[function_component(HomePage)]
pub fn home_page() -> Html {
    let api = use_memo((), |_| api::create());
    let activities = use_state(|| None::<Activities>);
    let load_error = use_state(|| None::<String>);
    let status = use_state(|| None::<Status>);
    // Bumped after every successful mutation to refetch the list
    let revision = use_state(|| 0u32);

    {
        let api = api.clone();
        let activities = activities.clone();
        let load_error = load_error.clone();
        use_effect_with(*revision, move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match api.fetch_activities().await {
                    Ok(list) => {
                        log::debug!("Fetched {} activities", list.len());
                        activities.set(Some(list));
                        load_error.set(None);
                    }
                    Err(err) => {
                        log::error!("Error fetching activities: {err}");
                        load_error.set(Some(
                            "Failed to load activities. Please try again later.".to_string(),
                        ));
                    }
                }
            });
        });
    }

    let refresh = {
        let revision = revision.clone();
        Callback::from(move |_: ()| revision.set(revision.wrapping_add(1)))
    };

    let pending_clear = use_mut_ref(PendingClear::<Timeout>::default);
    let show_status = {
        let status = status.clone();
        Callback::from(move |next: Status| {
            status.set(Some(next));
            let status = status.clone();
            let clear = Timeout::new(STATUS_TIMEOUT_MS, move || status.set(None));
            pending_clear.borrow_mut().arm(clear);
        })
    };

    let on_unregister = async_callback!([api, show_status, refresh] |target: (String, String)| {
        let (activity_name, email) = target;
        match api.unregister(&activity_name, &email).await {
            Ok(response) => {
                show_status.emit(Status::success(response.message));
                refresh.emit(());
            }
            Err(err) => {
                log::warn!("Unregister failed: {err}");
                show_status.emit(Status::error(err.to_string()));
            }
        }
    });

    let activity_names: Vec<String> = activities
        .as_ref()
        .map(|list| list.keys().cloned().collect())
        .unwrap_or_default();

    html! {
        <div class="p-8 max-w-5xl mx-auto">
            <header class="mb-8">
                <h1 class="text-2xl font-bold">{ "Mergington High School" }</h1>
                <h2 class="text-lg text-gray-600">{ "Extracurricular Activities" }</h2>
            </header>

            <section class="mb-8">
                <h3 class="text-xl font-semibold mb-4">{ "Available Activities" }</h3>
                <div id="activities-list">
                    {
                        match (activities.as_ref(), load_error.as_ref()) {
                            (_, Some(error)) => html! {
                                <p class="p-4 bg-red-100 text-red-700 rounded">{ error }</p>
                            },
                            (None, None) => html! { <p>{ "Loading activities..." }</p> },
                            (Some(list), None) => html! {
                                <div class="grid gap-4 md:grid-cols-2">
                                    {
                                        list.iter().map(|(name, activity)| html! {
                                            <ActivityCard
                                                key={name.clone()}
                                                name={name.clone()}
                                                activity={activity.clone()}
                                                on_unregister={on_unregister.clone()}
                                            />
                                        }).collect::<Html>()
                                    }
                                </div>
                            },
                        }
                    }
                </div>
            </section>

            <section class="p-4 border border-gray-200 rounded">
                <h3 class="text-xl font-semibold mb-4">{ "Sign Up for an Activity" }</h3>
                <SignupForm
                    activity_names={activity_names}
                    on_status={show_status.clone()}
                    on_signed_up={refresh.clone()}
                />
                <StatusMessage status={(*status).clone()} />
            </section>
        </div>
    }
}
