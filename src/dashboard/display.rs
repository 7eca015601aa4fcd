use chrono::{DateTime, Local, Utc};

/// Temperature assumed when a sensor has not reported yet.
pub const FALLBACK_TEMPERATURE: f64 = 20.0;

/// Placeholder locations for sensors registered without one.
const SAMPLE_LOCATIONS: [(&str, &str); 6] = [
    ("Main server room", "Data center - Rack A1"),
    ("Production floor", "Industrial shed - Sector B"),
    ("Cold storage", "Warehouse - Refrigeration"),
    ("Administrative office", "Main building - 2nd floor"),
    ("Chemistry lab", "Research building - Lab 101"),
    ("Outdoor area", "Main courtyard"),
];

pub fn sample_location(index: usize) -> (&'static str, &'static str) {
    SAMPLE_LOCATIONS[index % SAMPLE_LOCATIONS.len()]
}

pub fn temperature_class(temperature: Option<f64>) -> &'static str {
    let t = temperature.unwrap_or(FALLBACK_TEMPERATURE);
    if t >= 30.0 {
        "text-red-400"
    } else if t >= 20.0 {
        "text-green-400"
    } else {
        "text-blue-400"
    }
}

pub fn status_label(online: bool) -> &'static str {
    if online {
        "Online"
    } else {
        "Offline"
    }
}

pub fn status_class(online: bool) -> &'static str {
    if online {
        "bg-green-600"
    } else {
        "bg-red-600"
    }
}

pub fn format_celsius(value: f64) -> String {
    format!("{value:.1}°C")
}

pub fn last_reading_label(at: Option<DateTime<Utc>>) -> String {
    match at {
        Some(t) => t.with_timezone(&Local).format("%H:%M").to_string(),
        None => "less than a minute ago".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn temperature_bands() {
        assert_eq!(temperature_class(Some(35.2)), "text-red-400");
        assert_eq!(temperature_class(Some(30.0)), "text-red-400");
        assert_eq!(temperature_class(Some(29.9)), "text-green-400");
        assert_eq!(temperature_class(Some(20.0)), "text-green-400");
        assert_eq!(temperature_class(Some(-4.0)), "text-blue-400");
        assert_eq!(temperature_class(None), "text-green-400");
    }

    #[test]
    fn sample_locations_rotate() {
        assert_eq!(sample_location(0), sample_location(6));
        assert_ne!(sample_location(0), sample_location(1));
    }

    #[test]
    fn labels() {
        assert_eq!(status_label(true), "Online");
        assert_eq!(status_label(false), "Offline");
        assert_eq!(format_celsius(21.04), "21.0°C");
        assert_eq!(format_celsius(21.06), "21.1°C");
        assert_eq!(last_reading_label(None), "less than a minute ago");
        assert_eq!(last_reading_label(Some(Utc::now())).len(), 5);
    }
}
