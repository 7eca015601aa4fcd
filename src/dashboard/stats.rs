use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::supabase::models::{Sensor, TemperatureReading};

/// How far back the per-sensor min/avg/max and sparkline look.
pub const WINDOW_HOURS: i64 = 24;

/// Headline numbers shown across the top of the dashboard
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_sensors: usize,
    pub online_sensors: usize,
    pub offline_sensors: usize,
    pub avg_temperature: f64,
    pub min_temperature: f64,
    pub max_temperature: f64,
}

impl DashboardStats {
    pub fn compute(sensors: &[Sensor], latest: &HashMap<String, TemperatureReading>) -> Self {
        let online_sensors = sensors.iter().filter(|s| s.is_online()).count();
        let temperatures: Vec<f64> = latest.values().map(|r| r.temperature).collect();

        let (avg, min, max) = match summarize(&temperatures) {
            Some(w) => (w.avg, w.min, w.max),
            None => (0.0, 0.0, 0.0),
        };

        Self {
            total_sensors: sensors.len(),
            online_sensors,
            offline_sensors: sensors.len() - online_sensors,
            avg_temperature: round1(avg),
            min_temperature: round1(min),
            max_temperature: round1(max),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindowStats {
    pub min: f64,
    pub avg: f64,
    pub max: f64,
}

fn summarize(values: &[f64]) -> Option<WindowStats> {
    if values.is_empty() {
        return None;
    }
    let mut min = values[0];
    let mut max = values[0];
    for v in values.iter() {
        if *v < min {
            min = *v;
        }
        if *v > max {
            max = *v;
        }
    }
    let avg = values.iter().sum::<f64>() / values.len() as f64;
    Some(WindowStats { min, avg, max })
}

pub fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

/// Most recent reading of every sensor.
///
/// Readings normally arrive newest first, in which case this is simply the
/// first reading seen per sensor. Ties keep the earlier entry.
pub fn latest_readings(readings: &[TemperatureReading]) -> HashMap<String, TemperatureReading> {
    let mut latest: HashMap<String, TemperatureReading> = HashMap::new();
    for reading in readings {
        match latest.get(&reading.sensor_id) {
            Some(existing) if existing.timestamp >= reading.timestamp => {}
            _ => {
                latest.insert(reading.sensor_id.clone(), reading.clone());
            }
        }
    }
    latest
}

fn in_window(reading: &TemperatureReading, sensor_id: &str, now: DateTime<Utc>) -> bool {
    let start = now - Duration::hours(WINDOW_HOURS);
    reading.sensor_id == sensor_id && reading.timestamp >= start && reading.timestamp <= now
}

/// Min/avg/max of one sensor over the last day
pub fn window_stats(
    readings: &[TemperatureReading],
    sensor_id: &str,
    now: DateTime<Utc>,
) -> Option<WindowStats> {
    let values: Vec<f64> = readings
        .iter()
        .filter(|r| in_window(r, sensor_id, now))
        .map(|r| r.temperature)
        .collect();
    summarize(&values)
}

/// One sensor's readings over the last day, oldest first
pub fn window_history(
    readings: &[TemperatureReading],
    sensor_id: &str,
    now: DateTime<Utc>,
) -> Vec<(DateTime<Utc>, f64)> {
    let mut history: Vec<(DateTime<Utc>, f64)> = readings
        .iter()
        .filter(|r| in_window(r, sensor_id, now))
        .map(|r| (r.timestamp, r.temperature))
        .collect();
    history.sort_by_key(|(t, _)| *t);
    history
}

/// Stable pseudo random offset in `[0, 10)` for a sensor and reading time.
///
/// FNV-1a, so the value survives re-renders and restarts.
pub fn humidity_jitter(sensor_id: &str, at: Option<DateTime<Utc>>) -> f64 {
    let mut hash: u64 = 0xcbf29ce484222325;
    let stamp = at.map(|t| t.timestamp()).unwrap_or_default();
    for byte in sensor_id.bytes().chain(stamp.to_le_bytes()) {
        hash ^= byte as u64;
        hash = hash.wrapping_mul(0x100000001b3);
    }
    (hash % 1000) as f64 / 100.0
}

/// Simulated relative humidity. The sensors only report temperature, so this
/// falls as the temperature rises above 20°C.
pub fn estimate_humidity(temperature: Option<f64>, jitter: f64) -> u8 {
    let value = match temperature {
        Some(t) => 80.0 - (t - 20.0) * 2.0 + jitter,
        None => 40.0 + jitter * 4.0,
    };
    value.round().clamp(0.0, 100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::supabase::models::{RowId, SensorStatus};
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }

    fn sensor(id: &str, status: SensorStatus) -> Sensor {
        Sensor {
            id: RowId::Text(id.to_string()),
            sensor_id: id.to_string(),
            name: format!("Sensor {id}"),
            status,
            user_id: None,
            created_at: None,
            location: None,
        }
    }

    fn reading(id: &str, temperature: f64, minutes_ago: i64) -> TemperatureReading {
        TemperatureReading {
            sensor_id: id.to_string(),
            temperature,
            timestamp: now() - Duration::minutes(minutes_ago),
        }
    }

    #[test]
    fn latest_reading_is_first_of_descending_list() {
        let readings = vec![
            reading("a", 25.0, 1),
            reading("b", 18.0, 2),
            reading("a", 22.0, 5),
            reading("b", 19.0, 10),
        ];
        let latest = latest_readings(&readings);
        assert_eq!(latest.len(), 2);
        assert_eq!(latest["a"].temperature, 25.0);
        assert_eq!(latest["b"].temperature, 18.0);
    }

    #[test]
    fn latest_reading_ignores_order() {
        let readings = vec![reading("a", 22.0, 5), reading("a", 25.0, 1), reading("a", 21.0, 9)];
        assert_eq!(latest_readings(&readings)["a"].temperature, 25.0);
    }

    #[test]
    fn latest_reading_tie_keeps_first() {
        let readings = vec![reading("a", 22.0, 5), reading("a", 30.0, 5)];
        assert_eq!(latest_readings(&readings)["a"].temperature, 22.0);
    }

    #[test]
    fn stats_over_latest_readings() {
        let sensors = vec![
            sensor("a", SensorStatus::Active),
            sensor("b", SensorStatus::Inactive),
            sensor("c", SensorStatus::Active),
        ];
        let readings = vec![
            reading("a", 21.04, 1),
            reading("b", 30.0, 1),
            reading("c", 15.0, 1),
            reading("a", 99.0, 60),
        ];
        let stats = DashboardStats::compute(&sensors, &latest_readings(&readings));
        assert_eq!(stats.total_sensors, 3);
        assert_eq!(stats.online_sensors, 2);
        assert_eq!(stats.offline_sensors, 1);
        assert_eq!(stats.min_temperature, 15.0);
        assert_eq!(stats.max_temperature, 30.0);
        assert_eq!(stats.avg_temperature, 22.0);
    }

    #[test]
    fn stats_without_readings_are_zero() {
        let sensors = vec![sensor("a", SensorStatus::Inactive)];
        let stats = DashboardStats::compute(&sensors, &HashMap::new());
        assert_eq!(stats.total_sensors, 1);
        assert_eq!(stats.offline_sensors, 1);
        assert_eq!(stats.avg_temperature, 0.0);
        assert_eq!(stats.min_temperature, 0.0);
        assert_eq!(stats.max_temperature, 0.0);
    }

    #[test]
    fn window_only_counts_last_day_for_that_sensor() {
        let readings = vec![
            reading("a", 20.0, 10),
            reading("a", 26.0, 60),
            reading("b", 50.0, 5),
            reading("a", -5.0, 60 * 25),
            reading("a", 90.0, -5),
        ];
        let window = window_stats(&readings, "a", now()).unwrap();
        assert_eq!(window.min, 20.0);
        assert_eq!(window.max, 26.0);
        assert_eq!(window.avg, 23.0);
        assert!(window_stats(&readings, "c", now()).is_none());
    }

    #[test]
    fn history_is_oldest_first() {
        let readings = vec![reading("a", 21.0, 1), reading("a", 20.0, 30), reading("a", 19.0, 60 * 30)];
        let history = window_history(&readings, "a", now());
        assert_eq!(history.iter().map(|(_, v)| *v).collect::<Vec<_>>(), vec![20.0, 21.0]);
    }

    #[test]
    fn humidity_follows_temperature() {
        assert_eq!(estimate_humidity(Some(20.0), 0.0), 80);
        assert_eq!(estimate_humidity(Some(30.0), 5.0), 65);
        assert_eq!(estimate_humidity(Some(10.0), 9.99), 100);
        assert_eq!(estimate_humidity(Some(70.0), 0.0), 0);
        assert_eq!(estimate_humidity(None, 0.0), 40);
        assert_eq!(estimate_humidity(None, 9.99), 80);
    }

    #[test]
    fn jitter_is_stable_and_bounded() {
        let at = Some(now());
        assert_eq!(humidity_jitter("ESP32-01", at), humidity_jitter("ESP32-01", at));
        for id in ["a", "b", "ESP32-01", "ESP32-02", ""] {
            let j = humidity_jitter(id, at);
            assert!((0.0..10.0).contains(&j), "{id}: {j}");
        }
    }
}
