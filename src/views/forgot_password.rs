use dioxus::prelude::*;

use crate::auth::validate_email;
use crate::components::{use_toaster, AuthCard, BUTTON_CLASS, INPUT_CLASS};
use crate::supabase::request_password_reset;
use crate::Route;

#[component]
pub fn ForgotPassword() -> Element {
    let mut toaster = use_toaster();
    let mut email = use_signal(String::new);
    let mut submitting = use_signal(|| false);
    let mut sent = use_signal(|| false);

    let onsubmit = move |evt: FormEvent| async move {
        evt.prevent_default();
        if let Err(msg) = validate_email(&email()) {
            toaster.error("Could not send reset link", msg);
            return;
        }

        submitting.set(true);
        match request_password_reset(email().trim().to_string()).await {
            Ok(()) => sent.set(true),
            Err(e) => toaster.error("Could not send reset link", e.to_string()),
        }
        submitting.set(false);
    };

    rsx! {
        AuthCard { title: "Reset password", subtitle: "We will email you a link to choose a new password",
            if sent() {
                p { class: "text-slate-300 text-center",
                    "If an account exists for {email}, a reset link is on its way. Check your inbox."
                }
            } else {
                form { class: "space-y-4", onsubmit: onsubmit,
                    input {
                        r#type: "email",
                        class: INPUT_CLASS,
                        placeholder: "you@example.com",
                        autocomplete: "email",
                        value: "{email}",
                        oninput: move |e| email.set(e.value()),
                    }
                    button {
                        r#type: "submit",
                        class: BUTTON_CLASS,
                        disabled: submitting(),
                        if submitting() { "Sending..." } else { "Send reset link" }
                    }
                }
            }
            div { class: "mt-4 text-center",
                Link { to: Route::Login {}, class: "text-sm text-cyan-400 hover:underline", "Back to sign in" }
            }
        }
    }
}
