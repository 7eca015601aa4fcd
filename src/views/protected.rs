use chrono::Utc;
use dioxus::prelude::*;

use crate::auth::{gate, is_signed_in, use_auth, GateAction};
use crate::components::Spinner;
use crate::Route;

/// Gate for signed in routes.
///
/// Waits for the stored session to be read, sends anonymous visitors to the
/// login page and swaps an expired access token for a fresh one once.
#[component]
pub fn ProtectedRoute() -> Element {
    let mut auth = use_auth();
    let nav = navigator();
    let mut refresh_attempted = use_signal(|| false);

    use_effect(move || {
        let session = auth.current();
        let action = gate(
            auth.is_restored(),
            session.as_ref(),
            Utc::now(),
            *refresh_attempted.peek(),
        );
        match action {
            GateAction::Wait => {}
            GateAction::Allow => {
                if *refresh_attempted.peek() {
                    refresh_attempted.set(false);
                }
            }
            GateAction::Login => {
                tracing::debug!("No session, redirecting to login");
                nav.replace(Route::Login {});
            }
            GateAction::Logout => auth.logout(),
            GateAction::Refresh => {
                let Some(session) = session else {
                    return;
                };
                refresh_attempted.set(true);
                spawn(async move {
                    auth.refresh(session).await;
                });
            }
        }
    });

    if !is_signed_in(auth.is_restored(), auth.current().as_ref(), Utc::now()) {
        return rsx! { Spinner {} };
    }

    rsx! { Outlet::<Route> {} }
}
