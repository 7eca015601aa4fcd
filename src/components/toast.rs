use dioxus::prelude::*;
use std::time::Duration;

use crate::hooks::sleep;

/// Seconds a toast stays on screen unless dismissed earlier.
const TOAST_SECS: u64 = 5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ToastVariant {
    Success,
    Destructive,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub title: String,
    pub description: Option<String>,
    pub variant: ToastVariant,
}

/// Notification queue shared through context
#[derive(Clone, Copy, PartialEq)]
pub struct Toaster {
    toasts: Signal<Vec<Toast>>,
    next_id: Signal<u64>,
}

impl Toaster {
    pub fn new() -> Self {
        Self {
            toasts: Signal::new(Vec::new()),
            next_id: Signal::new(0),
        }
    }

    fn push(&mut self, title: impl Into<String>, description: Option<String>, variant: ToastVariant) {
        let id = *self.next_id.peek();
        self.next_id.set(id + 1);
        self.toasts.write().push(Toast {
            id,
            title: title.into(),
            description,
            variant,
        });
    }

    pub fn success(&mut self, title: impl Into<String>, description: impl Into<String>) {
        self.push(title, Some(description.into()), ToastVariant::Success);
    }

    pub fn error(&mut self, title: impl Into<String>, description: impl Into<String>) {
        self.push(title, Some(description.into()), ToastVariant::Destructive);
    }

    pub fn dismiss(&mut self, id: u64) {
        self.toasts.write().retain(|t| t.id != id);
    }
}

pub fn use_toaster() -> Toaster {
    use_context::<Toaster>()
}

#[component]
pub fn ToastViewport() -> Element {
    let toaster = use_toaster();
    let toasts = toaster.toasts.read().clone();

    rsx! {
        div { class: "fixed bottom-4 right-4 z-50 flex flex-col gap-2 w-96 max-w-[calc(100vw-2rem)]",
            for toast in toasts {
                ToastItem { key: "{toast.id}", toast: toast.clone() }
            }
        }
    }
}

#[component]
fn ToastItem(toast: Toast) -> Element {
    let mut toaster = use_toaster();
    let id = toast.id;

    use_future(move || async move {
        sleep(Duration::from_secs(TOAST_SECS)).await;
        toaster.dismiss(id);
    });

    let style = match toast.variant {
        ToastVariant::Success => "bg-green-900 border-green-700 text-green-50",
        ToastVariant::Destructive => "bg-red-900 border-red-700 text-red-50",
    };

    rsx! {
        div {
            role: "status",
            class: "rounded-lg border p-4 shadow-lg flex items-start justify-between gap-4 {style}",
            div {
                p { class: "font-semibold text-sm", "{toast.title}" }
                if let Some(description) = &toast.description {
                    p { class: "text-sm opacity-90 mt-1", "{description}" }
                }
            }
            button {
                r#type: "button",
                class: "text-sm opacity-70 hover:opacity-100",
                aria_label: "Dismiss",
                onclick: move |_| toaster.dismiss(id),
                "✕"
            }
        }
    }
}
