use dioxus::prelude::*;

#[component]
pub fn Spinner(#[props(into, default = String::new())] label: String) -> Element {
    rsx! {
        div { class: "flex justify-center items-center h-full py-20",
            div { class: "text-center text-slate-300",
                div { class: "animate-spin rounded-full h-12 w-12 border-b-2 border-cyan-400 mx-auto mb-4" }
                if !label.is_empty() {
                    p { "{label}" }
                }
            }
        }
    }
}
