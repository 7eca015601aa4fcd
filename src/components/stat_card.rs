use dioxus::prelude::*;

#[component]
pub fn StatCard(
    #[props(into)] label: String,
    #[props(into)] value: String,
    #[props(into)] icon: String,
    #[props(into)] accent: String,
) -> Element {
    rsx! {
        div { class: "rounded-lg bg-slate-800 border border-slate-700 p-4",
            div { class: "flex items-center justify-between",
                div {
                    p { class: "text-slate-400 text-sm", "{label}" }
                    p { class: "text-2xl font-bold {accent}", "{value}" }
                }
                span { class: "text-3xl {accent}", "{icon}" }
            }
        }
    }
}
