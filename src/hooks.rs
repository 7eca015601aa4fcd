use dioxus::prelude::*;
use std::time::Duration;

/// Sleep on whichever timer the current target has.
pub async fn sleep(duration: Duration) {
    #[cfg(feature = "server")]
    tokio::time::sleep(duration).await;
    #[cfg(not(feature = "server"))]
    gloo_timers::future::sleep(duration).await;
}

/// Tracks `document.hidden`, so polling can pause while the tab is in the background.
pub fn use_page_visible() -> Signal<bool> {
    #[cfg_attr(not(feature = "web"), allow(unused_mut))]
    let mut is_visible = use_signal(|| {
        #[cfg(feature = "web")]
        {
            web_sys::window()
                .and_then(|w| w.document())
                .map(|d| !d.hidden())
                .unwrap_or(true)
        }
        #[cfg(not(feature = "web"))]
        {
            true
        }
    });

    let _listener = use_hook(|| {
        #[cfg(feature = "web")]
        {
            web_sys::window().and_then(|w| w.document()).map(|document| {
                std::rc::Rc::new(gloo_events::EventListener::new(
                    &document,
                    "visibilitychange",
                    move |_| {
                        let hidden = web_sys::window()
                            .and_then(|w| w.document())
                            .map(|d| d.hidden())
                            .unwrap_or(false);
                        is_visible.set(!hidden);
                    },
                ))
            })
        }
        #[cfg(not(feature = "web"))]
        {
            None::<std::rc::Rc<()>>
        }
    });

    is_visible
}

/// Current `location.hash`, empty outside the browser.
pub fn location_hash() -> String {
    #[cfg(feature = "web")]
    {
        web_sys::window()
            .and_then(|w| w.location().hash().ok())
            .unwrap_or_default()
    }
    #[cfg(not(feature = "web"))]
    {
        String::new()
    }
}
