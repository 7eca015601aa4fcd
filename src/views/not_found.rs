use crate::components::Spinner;
use crate::Route;
use dioxus::prelude::*;

/// Unknown paths bounce to the dashboard, which in turn sends anonymous
/// visitors to the login page.
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let nav = navigator();

    tracing::debug!("Unknown path /{}, redirecting", segments.join("/"));

    use_effect(move || {
        nav.replace(Route::Dashboard {});
    });

    rsx! { Spinner {} }
}
