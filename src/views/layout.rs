use crate::components::{Header, Sidebar, Spinner};
use crate::Route;
use dioxus::prelude::*;

/// Chrome around every signed in page: sidebar on the left, header on top and
/// the routed page in the scrolling area.
#[component]
pub fn DashboardLayout() -> Element {
    rsx! {
        div { class: "flex h-screen bg-slate-900",
            Sidebar {}
            div { class: "flex-1 flex flex-col overflow-hidden",
                Header {}
                main { class: "flex-1 overflow-x-hidden overflow-y-auto bg-slate-900",
                    SuspenseBoundary {
                        fallback: move |_| rsx! { Spinner {} },
                        Outlet::<Route> {}
                    }
                }
            }
        }
    }
}
