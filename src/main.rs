use dioxus::prelude::*;

use auth::AuthState;
use components::{ToastViewport, Toaster};
use views::{
    Dashboard, DashboardLayout, ForgotPassword, Landing, Login, NotFound, ProtectedRoute,
    ResetPassword,
};

mod auth;
mod components;
mod dashboard;
mod hooks;
mod supabase;
mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Landing {},
    #[route("/login")]
    Login {},
    #[route("/forgot-password")]
    ForgotPassword {},
    #[route("/reset-password")]
    ResetPassword {},
    #[layout(ProtectedRoute)]
        #[layout(DashboardLayout)]
            #[route("/dashboard")]
            Dashboard {},
        #[end_layout]
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");
const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

fn main() {
    if let Err(e) = dioxus_logger::init(tracing::Level::INFO) {
        eprintln!("Failed to initialise logger: {e}");
    }
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let mut auth = use_context_provider(AuthState::new);
    use_context_provider(Toaster::new);

    // Storage only exists in the browser, and effects only run there
    use_effect(move || auth.restore());

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }
        Router::<Route> {}
        ToastViewport {}
    }
}
