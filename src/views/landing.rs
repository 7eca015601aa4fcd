use crate::Route;
use dioxus::prelude::*;

/// Public front page, rendered for `[Route::Landing]`
#[component]
pub fn Landing() -> Element {
    rsx! {
        div { class: "min-h-screen bg-slate-900 text-white flex flex-col items-center justify-center px-6",
            div { class: "flex items-center space-x-3 mb-8",
                div { class: "w-12 h-12 bg-cyan-600 rounded-xl flex items-center justify-center",
                    span { class: "text-white font-bold text-xl", "M" }
                }
                h1 { class: "text-4xl font-bold tracking-wide", "MARK ONE" }
            }
            p { class: "text-lg text-slate-300 max-w-xl text-center mb-10",
                "Temperature and humidity monitoring for your ESP32 sensors, in one dashboard."
            }
            div { class: "flex gap-4",
                Link {
                    to: Route::Login {},
                    class: "px-6 py-3 rounded-lg bg-cyan-600 hover:bg-cyan-500 font-semibold",
                    "Sign in"
                }
                Link {
                    to: Route::Dashboard {},
                    class: "px-6 py-3 rounded-lg border border-slate-600 hover:bg-slate-800",
                    "Open dashboard"
                }
            }
        }
    }
}
