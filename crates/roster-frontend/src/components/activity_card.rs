use yew::prelude::*;

use roster::data::Activity;

/// Badge text for the remaining capacity of an activity.
pub fn spots_label(activity: &Activity) -> String {
    match activity.spots_left() {
        0 => "Full".to_string(),
        1 => "1 spot left".to_string(),
        n => format!("{n} spots left"),
    }
}

#[derive(Properties, PartialEq)]
pub struct ActivityCardProps {
    pub name: String,
    pub activity: Activity,
    /// Fired with `(activity name, participant email)` when a remove button is clicked
    pub on_unregister: Callback<(String, String)>,
}

#[function_component(ActivityCard)]
pub fn activity_card(props: &ActivityCardProps) -> Html {
    let activity = &props.activity;

    let participants = if activity.participants.is_empty() {
        html! {
            <p class="text-sm text-gray-500 italic">{ "No participants yet, be the first!" }</p>
        }
    } else {
        html! {
            <ul class="space-y-1">
                {
                    activity.participants.iter().map(|email| {
                        let on_remove = {
                            let on_unregister = props.on_unregister.clone();
                            let target = (props.name.clone(), email.clone());
                            Callback::from(move |_: MouseEvent| on_unregister.emit(target.clone()))
                        };

                        html! {
                            <li key={email.clone()} class="flex items-center justify-between text-sm">
                                <span>{ email }</span>
                                <button
                                    class="text-red-600 hover:text-red-800 px-2 cursor-pointer"
                                    title="Unregister"
                                    onclick={on_remove}
                                >
                                    { "✕" }
                                </button>
                            </li>
                        }
                    }).collect::<Html>()
                }
            </ul>
        }
    };

    html! {
        <div class="p-4 border border-gray-200 rounded shadow-sm">
            <div class="flex items-center justify-between mb-2">
                <h4 class="text-lg font-semibold">{ &props.name }</h4>
                <span class="text-xs px-2 py-1 bg-blue-100 text-blue-800 rounded">
                    { spots_label(activity) }
                </span>
            </div>
            <p class="mb-2">{ &activity.description }</p>
            <p class="mb-4 text-sm"><strong>{ "Schedule: " }</strong>{ &activity.schedule }</p>

            <div>
                <h5 class="font-medium mb-1">{ "Participants" }</h5>
                { participants }
            </div>
        </div>
    }
}
