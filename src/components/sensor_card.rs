use chrono::{DateTime, Utc};
use dioxus::prelude::*;

use crate::components::{HistoryPoint, Sparkline};
use crate::dashboard::display::{
    format_celsius, last_reading_label, status_class, status_label, temperature_class,
    FALLBACK_TEMPERATURE,
};
use crate::dashboard::SensorTile;

#[component]
pub fn SensorCard(tile: SensorTile, reference_time: DateTime<Utc>) -> Element {
    let online = tile.sensor.is_online();
    let temperature = tile.temperature();
    let temperature_text = format_celsius(temperature.unwrap_or(FALLBACK_TEMPERATURE));
    let temperature_color = temperature_class(temperature);
    let last_reading = last_reading_label(tile.latest.as_ref().map(|r| r.timestamp));

    let (min, avg, max) = match tile.window {
        Some(w) => (w.min, w.avg, w.max),
        None => {
            let t = temperature.unwrap_or(FALLBACK_TEMPERATURE);
            (t, t, t)
        }
    };

    let badge_class = status_class(online);
    let badge_label = status_label(online);
    let (min_text, avg_text, max_text) = (format_celsius(min), format_celsius(avg), format_celsius(max));

    let history: Vec<HistoryPoint> = tile
        .history
        .iter()
        .map(|(time, value)| HistoryPoint { time: *time, value: *value })
        .collect();

    rsx! {
        div { class: "rounded-lg bg-slate-800 border border-slate-700 hover:border-slate-500 transition-colors animate-pulse-once",
            div { class: "p-6 pb-3 flex justify-between items-start",
                div { class: "min-w-0",
                    h3 { class: "text-lg font-semibold text-white truncate", "{tile.sensor.name}" }
                    p { class: "text-sm text-slate-400 flex items-center mt-1",
                        span { class: "mr-2", "📍" }
                        "{tile.location}"
                    }
                    p { class: "text-xs text-slate-500 font-mono mt-1", "{tile.sensor.sensor_id}" }
                }
                span { class: "{badge_class} text-white text-xs font-semibold px-2.5 py-0.5 rounded-full",
                    "{badge_label}"
                }
            }
            div { class: "px-6 pb-6 space-y-4",
                div { class: "flex items-center justify-between",
                    div { class: "flex items-center space-x-2",
                        span { class: "text-green-400", "🌡️" }
                        span { class: "text-slate-300", "Temperature" }
                    }
                    span { class: "text-2xl font-bold {temperature_color}", "{temperature_text}" }
                }
                div { class: "flex items-center justify-between",
                    div { class: "flex items-center space-x-2",
                        span { class: "text-blue-400", "💧" }
                        span { class: "text-slate-300", "Humidity" }
                    }
                    span { class: "text-2xl font-bold text-blue-400", "{tile.humidity}%" }
                }
                div { class: "flex items-center justify-between",
                    span { class: "text-xs text-slate-400", "Last 24h" }
                    Sparkline {
                        history: history,
                        color: "#60a5fa",
                        reference_time: reference_time,
                    }
                }
                div { class: "grid grid-cols-3 gap-2 text-xs text-center",
                    p { class: "text-blue-400", "Min: {min_text}" }
                    p { class: "text-slate-300", "Avg: {avg_text}" }
                    p { class: "text-orange-400", "Max: {max_text}" }
                }
                div { class: "flex items-center justify-between text-xs text-slate-400 pt-2 border-t border-slate-700",
                    div { class: "flex items-center space-x-1",
                        span { "🕒" }
                        span { "Last reading" }
                    }
                    span { "{last_reading}" }
                }
            }
        }
    }
}
