use dioxus::prelude::*;

use crate::auth::{parse_recovery_fragment, validate_new_password, RecoveryLink};
use crate::components::{use_toaster, AuthCard, Spinner, BUTTON_CLASS, INPUT_CLASS};
use crate::hooks::location_hash;
use crate::supabase::update_password;
use crate::Route;

#[component]
pub fn ResetPassword() -> Element {
    let mut toaster = use_toaster();
    let nav = navigator();

    // None until the fragment has been read in the browser
    let mut link = use_signal(|| None::<RecoveryLink>);
    let mut password = use_signal(String::new);
    let mut confirmation = use_signal(String::new);
    let mut submitting = use_signal(|| false);

    use_effect(move || {
        link.set(Some(parse_recovery_fragment(&location_hash())));
    });

    let onsubmit = move |evt: FormEvent| async move {
        evt.prevent_default();
        let Some(RecoveryLink::Token { access_token, .. }) = link() else {
            return;
        };
        if let Err(msg) = validate_new_password(&password(), &confirmation()) {
            toaster.error("Could not update password", msg);
            return;
        }

        submitting.set(true);
        match update_password(access_token, password()).await {
            Ok(()) => {
                toaster.success("Password updated", "Sign in with your new password.");
                nav.replace(Route::Login {});
            }
            Err(e) => {
                toaster.error("Could not update password", e.to_string());
                submitting.set(false);
            }
        }
    };

    let body = match link() {
        None => rsx! { Spinner {} },
        Some(RecoveryLink::Error(reason)) => rsx! {
            p { class: "text-red-400 text-center", "{reason}" }
        },
        Some(RecoveryLink::Missing) => rsx! {
            p { class: "text-slate-300 text-center",
                "This reset link is invalid or incomplete. Request a new one."
            }
        },
        Some(RecoveryLink::Token { .. }) => rsx! {
            form { class: "space-y-4", onsubmit: onsubmit,
                input {
                    r#type: "password",
                    class: INPUT_CLASS,
                    placeholder: "New password",
                    autocomplete: "new-password",
                    value: "{password}",
                    oninput: move |e| password.set(e.value()),
                }
                input {
                    r#type: "password",
                    class: INPUT_CLASS,
                    placeholder: "Confirm new password",
                    autocomplete: "new-password",
                    value: "{confirmation}",
                    oninput: move |e| confirmation.set(e.value()),
                }
                button {
                    r#type: "submit",
                    class: BUTTON_CLASS,
                    disabled: submitting(),
                    if submitting() { "Saving..." } else { "Update password" }
                }
            }
        },
    };

    rsx! {
        AuthCard { title: "Choose a new password",
            {body}
            div { class: "mt-4 text-center",
                Link { to: Route::ForgotPassword {}, class: "text-sm text-cyan-400 hover:underline",
                    "Request another link"
                }
            }
        }
    }
}
