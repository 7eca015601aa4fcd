use chrono::Utc;
use dioxus::prelude::*;

use crate::auth::{is_signed_in, use_auth, validate_email};
use crate::components::{use_toaster, AuthCard, BUTTON_CLASS, INPUT_CLASS};
use crate::supabase::sign_in;
use crate::Route;

#[component]
pub fn Login() -> Element {
    let mut auth = use_auth();
    let mut toaster = use_toaster();
    let nav = navigator();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut submitting = use_signal(|| false);

    // Already signed in
    use_effect(move || {
        if is_signed_in(auth.is_restored(), auth.current().as_ref(), Utc::now()) {
            nav.replace(Route::Dashboard {});
        }
    });

    let onsubmit = move |evt: FormEvent| async move {
        evt.prevent_default();
        if let Err(msg) = validate_email(&email()) {
            toaster.error("Sign in failed", msg);
            return;
        }

        submitting.set(true);
        match sign_in(email().trim().to_string(), password()).await {
            Ok(session) => {
                auth.login(session);
                nav.replace(Route::Dashboard {});
            }
            Err(e) => {
                toaster.error("Sign in failed", e.to_string());
                submitting.set(false);
            }
        }
    };

    rsx! {
        AuthCard { title: "Sign in", subtitle: "Access your sensor dashboard",
            form { class: "space-y-4", onsubmit: onsubmit,
                div {
                    label { class: "block text-sm text-slate-300 mb-1", r#for: "email", "Email" }
                    input {
                        id: "email",
                        r#type: "email",
                        class: INPUT_CLASS,
                        placeholder: "you@example.com",
                        autocomplete: "email",
                        value: "{email}",
                        oninput: move |e| email.set(e.value()),
                    }
                }
                div {
                    label { class: "block text-sm text-slate-300 mb-1", r#for: "password", "Password" }
                    input {
                        id: "password",
                        r#type: "password",
                        class: INPUT_CLASS,
                        autocomplete: "current-password",
                        value: "{password}",
                        oninput: move |e| password.set(e.value()),
                    }
                }
                button {
                    r#type: "submit",
                    class: BUTTON_CLASS,
                    disabled: submitting(),
                    if submitting() { "Signing in..." } else { "Sign in" }
                }
            }
            div { class: "mt-4 text-center",
                Link { to: Route::ForgotPassword {}, class: "text-sm text-cyan-400 hover:underline",
                    "Forgot your password?"
                }
            }
        }
    }
}
