#[macro_export]
/// Build a Yew `Callback` that runs an async block on the browser's task queue.
///
/// Every listed variable is cloned twice: once into the callback and once into
/// each spawned future, so handles such as `UseStateHandle` can be used inside
/// the async body without manual clone boilerplate.
///
/// Without an event parameter:
/// ```compile_fail
/// let reload = async_callback!([api, activities, error_msg] {
///     match api.fetch_activities().await {
///         Ok(list) => activities.set(Some(list)),
///         Err(err) => error_msg.set(Some(err.to_string())),
///     }
/// });
/// ```
///
/// With an event parameter:
/// ```compile_fail
/// let on_submit = async_callback!([api, email, activity] |e: SubmitEvent| {
///     e.prevent_default();
///     let _ = api.signup(&activity, &email).await;
/// });
/// ```
macro_rules! async_callback {
    // The event arm comes first: a closure is itself an `expr`.
    ([$($var:ident),* $(,)?] |$event:ident $(: $ty:ty)?| $body:expr) => {
        {
            $(let $var = $var.clone();)*
            Callback::from(move |$event $(: $ty)?| {
                $(let $var = $var.clone();)*
                wasm_bindgen_futures::spawn_local(async move {
                    $body
                });
            })
        }
    };

    ([$($var:ident),* $(,)?] $body:expr) => {
        {
            $(let $var = $var.clone();)*
            Callback::from(move |_| {
                $(let $var = $var.clone();)*
                wasm_bindgen_futures::spawn_local(async move {
                    $body
                });
            })
        }
    };
}
