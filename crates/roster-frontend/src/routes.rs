use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages::HomePage;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    /// Where the backend redirects `/` to.
    #[at("/static/index.html")]
    StaticIndex,
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(route: Route) -> Html {
    match route {
        Route::Home | Route::StaticIndex => html! { <HomePage /> },
        Route::NotFound => html! { <div class="p-8">{ "404 Not Found" }</div> },
    }
}
