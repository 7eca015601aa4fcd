use chrono::Utc;
use dioxus::prelude::*;
use std::time::Duration;

use crate::auth::use_auth;
use crate::components::{use_toaster, SensorCard, Spinner, StatCard};
use crate::dashboard::display::format_celsius;
use crate::dashboard::{filter_sensors, DashboardSnapshot};
use crate::hooks::{sleep, use_page_visible};
use crate::supabase::{load_dashboard, refresh_interval};

/// The Dashboard page component that will be rendered when the current route is `[Route::Dashboard]`
#[component]
pub fn Dashboard() -> Element {
    let auth = use_auth();
    let mut toaster = use_toaster();
    let visible = use_page_visible();

    let mut snapshot = use_signal(|| None::<DashboardSnapshot>);
    let mut search = use_signal(String::new);

    let mut fetch = use_resource(move || async move {
        // Peek so storing a refreshed session does not restart this fetch
        let Some(mut session) = auth.session.peek().clone() else {
            return;
        };
        if session.is_expired(Utc::now()) {
            tracing::debug!("Access token expired, refreshing before fetch");
            match auth.refresh(session).await {
                Some(fresh) => session = fresh,
                None => return,
            }
        }
        match load_dashboard(session.access_token).await {
            Ok(data) => snapshot.set(Some(data)),
            Err(e) => {
                tracing::error!("Failed to load dashboard: {}", e);
                toaster.error("Failed to load dashboard", e.to_string());
                // Keep rendering whatever we had, or the empty state on first load
                if snapshot.peek().is_none() {
                    snapshot.set(Some(DashboardSnapshot::default()));
                }
            }
        }
    });

    // Periodic refresh while the tab is visible
    use_future(move || async move {
        let secs = match refresh_interval().await {
            Ok(secs) => secs,
            Err(e) => {
                tracing::warn!("Auto refresh disabled: {}", e);
                0
            }
        };
        if secs == 0 {
            return;
        }
        loop {
            sleep(Duration::from_secs(secs)).await;
            if *visible.peek() && fetch.finished() {
                tracing::debug!("Refreshing dashboard");
                fetch.restart();
            }
        }
    });

    let Some(data) = snapshot() else {
        return rsx! { Spinner { label: "Loading dashboard..." } };
    };

    let term = search();
    let filtered = filter_sensors(&data.tiles, &term);
    let stats = &data.stats;
    let refreshing = !fetch.finished();
    let updated = data
        .fetched_at
        .with_timezone(&chrono::Local)
        .format("%H:%M:%S");

    rsx! {
        div { class: "p-6 space-y-6 bg-slate-900 min-h-full text-white",
            div { class: "grid grid-cols-1 md:grid-cols-3 xl:grid-cols-6 gap-4",
                StatCard { label: "Total sensors", value: "{stats.total_sensors}", icon: "📈", accent: "text-cyan-400" }
                StatCard { label: "Online sensors", value: "{stats.online_sensors}", icon: "📶", accent: "text-green-400" }
                StatCard { label: "Offline sensors", value: "{stats.offline_sensors}", icon: "🚫", accent: "text-red-400" }
                StatCard { label: "Average temperature", value: format_celsius(stats.avg_temperature), icon: "🌡️", accent: "text-blue-400" }
                StatCard { label: "Lowest temperature", value: format_celsius(stats.min_temperature), icon: "↓", accent: "text-cyan-400" }
                StatCard { label: "Highest temperature", value: format_celsius(stats.max_temperature), icon: "↑", accent: "text-orange-400" }
            }

            div { class: "flex flex-wrap gap-4 justify-between items-center",
                div { class: "relative w-96 max-w-full",
                    span { class: "absolute left-3 top-1/2 -translate-y-1/2 text-slate-400", "🔍" }
                    input {
                        r#type: "text",
                        placeholder: "Search sensors by name or id...",
                        class: "w-full pl-10 pr-3 py-2 rounded-md bg-slate-800 border border-slate-600 text-white placeholder-slate-400",
                        value: "{term}",
                        oninput: move |e| search.set(e.value()),
                    }
                }
                div { class: "flex items-center space-x-4 text-sm text-slate-400",
                    span { "Updated {updated}" }
                    button {
                        r#type: "button",
                        class: "px-3 py-1.5 rounded-md border border-slate-600 hover:bg-slate-800 disabled:opacity-50",
                        disabled: refreshing,
                        onclick: move |_| fetch.restart(),
                        if refreshing { "Refreshing..." } else { "Refresh" }
                    }
                }
            }

            if filtered.is_empty() {
                div { class: "text-center py-10",
                    p { class: "text-5xl mb-4 text-slate-600", "📡" }
                    p { class: "text-xl font-semibold text-slate-400", "No sensors found." }
                    if term.trim().is_empty() {
                        p { class: "text-slate-500", "Register your first ESP32 sensor to get started!" }
                    } else {
                        p { class: "text-slate-500", "Nothing matches \"{term}\"." }
                    }
                }
            } else {
                div { class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6",
                    for tile in filtered {
                        SensorCard {
                            key: "{tile.sensor.id}",
                            tile: tile.clone(),
                            reference_time: data.fetched_at,
                        }
                    }
                }
            }
        }
    }
}
