use dioxus::prelude::*;

use crate::auth::use_auth;
use crate::supabase::{get_display_name, sign_out};
use crate::Route;

#[component]
pub fn Header() -> Element {
    let mut auth = use_auth();
    let nav = navigator();

    let display_name = use_resource(move || async move {
        let session = auth.session.cloned()?;
        match get_display_name(session.access_token, session.user.id).await {
            Ok(name) => name,
            Err(e) => {
                tracing::error!("Error fetching user profile: {}", e);
                None
            }
        }
    });

    let label = display_name
        .read()
        .clone()
        .flatten()
        .or_else(|| auth.current().and_then(|s| s.user.email))
        .unwrap_or_else(|| "User".to_string());

    rsx! {
        header { class: "h-20 bg-slate-800 shadow-md flex items-center justify-between px-6 border-b border-slate-700",
            h1 { class: "text-lg font-semibold text-white", "Dashboard" }
            div { class: "flex items-center space-x-4",
                div { class: "flex items-center space-x-2 text-sm text-slate-300",
                    span { class: "text-cyan-400", "👤" }
                    span { "{label}" }
                }
                button {
                    r#type: "button",
                    class: "text-sm px-3 py-1.5 rounded-md text-red-400 hover:bg-red-900/20 hover:text-red-300",
                    onclick: move |_| async move {
                        if let Some(session) = auth.current() {
                            // The local session goes regardless, the token just expires server side
                            if let Err(e) = sign_out(session.access_token).await {
                                tracing::warn!("Sign out request failed: {}", e);
                            }
                        }
                        auth.logout();
                        nav.replace(Route::Login {});
                    },
                    "Sign out"
                }
            }
        }
    }
}
