//! Client side aggregation for the dashboard page.
//!
//! Everything here is plain data in, plain data out, so the server function
//! can build a [`DashboardSnapshot`] and the page only has to filter and render it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::supabase::models::{Sensor, TemperatureReading};

pub mod display;
pub mod stats;

pub use stats::{DashboardStats, WindowStats};

/// Everything a sensor card needs to render
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorTile {
    pub sensor: Sensor,
    pub location: String,
    pub latest: Option<TemperatureReading>,
    pub humidity: u8,
    pub window: Option<WindowStats>,
    #[serde(default)]
    pub history: Vec<(DateTime<Utc>, f64)>,
}

impl SensorTile {
    pub fn temperature(&self) -> Option<f64> {
        self.latest.as_ref().map(|r| r.temperature)
    }

    fn matches(&self, needle: &str) -> bool {
        self.sensor.name.to_lowercase().contains(needle)
            || self.sensor.sensor_id.to_lowercase().contains(needle)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    pub tiles: Vec<SensorTile>,
    pub stats: DashboardStats,
    pub fetched_at: DateTime<Utc>,
}

impl DashboardSnapshot {
    /// Assemble the dashboard from raw rows. Tiles keep the sensor order.
    pub fn build(sensors: Vec<Sensor>, readings: &[TemperatureReading], now: DateTime<Utc>) -> Self {
        let mut latest = stats::latest_readings(readings);
        let summary = DashboardStats::compute(&sensors, &latest);

        let tiles = sensors
            .into_iter()
            .enumerate()
            .map(|(index, sensor)| {
                let reading = latest.remove(&sensor.sensor_id);
                let jitter = stats::humidity_jitter(
                    &sensor.sensor_id,
                    reading.as_ref().map(|r| r.timestamp),
                );
                let humidity =
                    stats::estimate_humidity(reading.as_ref().map(|r| r.temperature), jitter);
                let location = sensor
                    .location
                    .clone()
                    .filter(|l| !l.trim().is_empty())
                    .unwrap_or_else(|| display::sample_location(index).1.to_string());

                SensorTile {
                    window: stats::window_stats(readings, &sensor.sensor_id, now),
                    history: stats::window_history(readings, &sensor.sensor_id, now),
                    location,
                    latest: reading,
                    humidity,
                    sensor,
                }
            })
            .collect();

        Self {
            tiles,
            stats: summary,
            fetched_at: now,
        }
    }
}

/// Tiles whose name or sensor id contains `term`, ignoring case.
pub fn filter_sensors<'a>(tiles: &'a [SensorTile], term: &str) -> Vec<&'a SensorTile> {
    let needle = term.trim().to_lowercase();
    tiles.iter().filter(|t| t.matches(&needle)).collect()
}
