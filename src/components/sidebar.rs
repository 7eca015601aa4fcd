use chrono::Datelike;
use dioxus::prelude::*;

#[component]
pub fn Sidebar() -> Element {
    let year = chrono::Local::now().year();

    rsx! {
        aside { class: "w-64 bg-slate-800 shadow-lg flex flex-col border-r border-slate-700",
            div { class: "h-20 flex items-center justify-center border-b border-slate-700",
                div { class: "flex items-center space-x-2",
                    div { class: "w-8 h-8 bg-cyan-600 rounded-lg flex items-center justify-center",
                        span { class: "text-white font-bold text-sm", "M" }
                    }
                    div {
                        div { class: "text-xl font-bold text-white", "MARK ONE" }
                        div { class: "text-xs text-slate-400", "Sensor Dashboard" }
                    }
                }
            }
            div { class: "flex-1 px-4 py-6" }
            div { class: "p-4 border-t border-slate-700 mt-auto",
                p { class: "text-xs text-slate-400 text-center", "© {year} MARK ONE" }
            }
        }
    }
}
