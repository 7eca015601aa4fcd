use chrono::{DateTime, Duration, Utc};
use dioxus::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub struct HistoryPoint {
    pub value: f64,
    pub time: DateTime<Utc>,
}

/// Value range with 10% padding, or ±1 when the line is flat.
pub fn padded_range(points: &[HistoryPoint]) -> Option<(f64, f64)> {
    let first = points.first()?.value;
    let (min, max) = points
        .iter()
        .fold((first, first), |(min, max), p| (min.min(p.value), max.max(p.value)));
    if (max - min).abs() < 0.1 {
        Some((min - 1.0, max + 1.0))
    } else {
        let padding = (max - min) * 0.1;
        Some((min - padding, max + padding))
    }
}

#[component]
pub fn Sparkline(
    history: Vec<HistoryPoint>,
    #[props(default = 100)] width: u32,
    #[props(default = 24)] height: u32,
    #[props(default = 24)] window_hours: i64,
    color: String,
    reference_time: DateTime<Utc>,
) -> Element {
    let points = history;
    let Some((min_v, max_v)) = padded_range(&points).filter(|_| points.len() >= 2) else {
        return rsx! {
            svg { width, height, class: "opacity-20",
                line { x1: "0", y1: height / 2, x2: width, y2: height / 2, stroke: "{color}", stroke_width: "1" }
            }
        };
    };

    let window_start = reference_time - Duration::hours(window_hours);
    let total = (window_hours * 3600) as f64;

    let x_scale = |t: DateTime<Utc>| {
        let elapsed = (t - window_start).num_seconds() as f64;
        (elapsed / total * width as f64).clamp(0.0, width as f64)
    };

    let y_scale = |v: f64| {
        let range = max_v - min_v;
        height as f64 - ((v - min_v) / range * height as f64).clamp(0.0, height as f64)
    };

    let mut path_data = String::new();
    for (i, p) in points.iter().enumerate() {
        let x = x_scale(p.time);
        let y = y_scale(p.value);
        if i == 0 {
            path_data.push_str(&format!("M {} {}", x, y));
        } else {
            path_data.push_str(&format!(" L {} {}", x, y));
        }

        // Hold the last value until the right edge
        if i == points.len() - 1 && x < width as f64 {
            path_data.push_str(&format!(" L {} {}", width, y));
        }
    }

    rsx! {
        svg {
            width,
            height,
            view_box: "0 0 {width} {height}",
            class: "inline-block align-middle overflow-visible",
            path {
                d: "{path_data}",
                fill: "none",
                stroke: "{color}",
                stroke_width: "1.5",
                stroke_linejoin: "round",
                stroke_linecap: "round",
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(value: f64) -> HistoryPoint {
        HistoryPoint { value, time: Utc::now() }
    }

    #[test]
    fn range_is_padded() {
        assert_eq!(padded_range(&[]), None);
        assert_eq!(padded_range(&[point(20.0)]), Some((19.0, 21.0)));
        assert_eq!(padded_range(&[point(10.0), point(30.0)]), Some((8.0, 32.0)));
    }
}
