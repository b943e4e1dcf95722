use yew::prelude::*;

/// How long a status message stays visible, in milliseconds.
pub const STATUS_TIMEOUT_MS: u32 = 5_000;

/// Holds the timer that will hide the current status.
///
/// Arming drops the previous handle, and dropping a `gloo_timers` `Timeout`
/// cancels it, so only the newest status is ever cleared. A handle that has
/// already fired stays here until the next status replaces it.
#[derive(Debug)]
pub struct PendingClear<T> {
    handle: Option<T>,
}

impl<T> Default for PendingClear<T> {
    fn default() -> Self {
        Self { handle: None }
    }
}

impl<T> PendingClear<T> {
    pub fn arm(&mut self, handle: T) {
        self.handle = Some(handle);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub kind: StatusKind,
    pub text: String,
}

impl Status {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Error,
            text: text.into(),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct StatusMessageProps {
    pub status: Option<Status>,
}

#[function_component(StatusMessage)]
pub fn status_message(props: &StatusMessageProps) -> Html {
    let Some(status) = props.status.as_ref() else {
        return html! {};
    };

    let classes = match status.kind {
        StatusKind::Success => "mt-4 p-4 bg-green-100 text-green-800 rounded",
        StatusKind::Error => "mt-4 p-4 bg-red-100 text-red-700 rounded",
    };

    html! {
        <div id="message" class={classes}>
            <p>{ &status.text }</p>
        </div>
    }
}
