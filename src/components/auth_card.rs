use dioxus::prelude::*;

/// Centered panel shared by the login and password pages
#[component]
pub fn AuthCard(#[props(into)] title: String, #[props(into, default = String::new())] subtitle: String, children: Element) -> Element {
    rsx! {
        div { class: "min-h-screen bg-slate-900 flex items-center justify-center px-4",
            div { class: "w-full max-w-md rounded-xl bg-slate-800 border border-slate-700 shadow-xl p-8",
                div { class: "flex items-center justify-center space-x-2 mb-6",
                    div { class: "w-8 h-8 bg-cyan-600 rounded-lg flex items-center justify-center",
                        span { class: "text-white font-bold text-sm", "M" }
                    }
                    span { class: "text-xl font-bold text-white", "MARK ONE" }
                }
                h2 { class: "text-2xl font-semibold text-white text-center", "{title}" }
                if !subtitle.is_empty() {
                    p { class: "text-sm text-slate-400 text-center mt-2", "{subtitle}" }
                }
                div { class: "mt-6", {children} }
            }
        }
    }
}

pub const INPUT_CLASS: &str = "w-full rounded-md bg-slate-900 border border-slate-600 text-white placeholder-slate-500 px-3 py-2 focus:outline-none focus:border-cyan-500";
pub const BUTTON_CLASS: &str = "w-full rounded-md bg-cyan-600 hover:bg-cyan-500 disabled:opacity-50 text-white font-semibold py-2";
