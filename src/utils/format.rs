/// Shown wherever a timestamp is missing or unparseable.
pub const TIME_PLACEHOLDER: &str = "—";

#[cfg(feature = "web")]
pub fn pad2(n: i32) -> String {
    if n < 10 {
        format!("0{}", n)
    } else {
        n.to_string()
    }
}

#[cfg(feature = "web")]
pub fn format_timestamp(raw: Option<&str>) -> String {
    use js_sys::Date;
    let Some(raw) = raw else {
        return TIME_PLACEHOLDER.to_string();
    };
    let d = Date::new(&wasm_bindgen::JsValue::from_str(raw));
    if d.get_time().is_nan() {
        return TIME_PLACEHOLDER.to_string();
    }
    let day = d.get_date() as i32;
    let month = (d.get_month() as i32) + 1;
    let year = d.get_full_year() as i32;
    let hour = d.get_hours() as i32;
    let minute = d.get_minutes() as i32;
    format!(
        "{}.{}.{} {}:{}",
        pad2(day),
        pad2(month),
        year,
        pad2(hour),
        pad2(minute)
    )
}

#[cfg(not(feature = "web"))]
pub fn format_timestamp(raw: Option<&str>) -> String {
    match raw.and_then(crate::stats::parse_when) {
        Some(dt) => dt.format("%d.%m.%Y %H:%M").to_string(),
        None => TIME_PLACEHOLDER.to_string(),
    }
}

pub fn format_count(n: u64) -> String {
    if n >= 10_000 {
        format!("{}k", (n as f64 / 1_000.0).round() as u64)
    } else if n >= 1_000 {
        let k = n as f64 / 1_000.0;
        if (k * 10.0).round() % 10.0 == 0.0 {
            format!("{}k", k.round() as u64)
        } else {
            format!("{:.1}k", k)
        }
    } else {
        n.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(not(feature = "web"))]
    #[test]
    fn placeholder_for_missing_or_invalid_timestamps() {
        assert_eq!(format_timestamp(None), TIME_PLACEHOLDER);
        assert_eq!(format_timestamp(Some("not a date")), TIME_PLACEHOLDER);
        assert_eq!(format_timestamp(Some("")), TIME_PLACEHOLDER);
    }

    #[cfg(not(feature = "web"))]
    #[test]
    fn formats_valid_timestamps() {
        assert_eq!(
            format_timestamp(Some("2024-02-01T12:30:00Z")),
            "01.02.2024 12:30"
        );
        assert_eq!(format_timestamp(Some("2024-02-01")), "01.02.2024 00:00");
    }

    #[test]
    fn count_formatting_thresholds() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1_000), "1k");
        assert_eq!(format_count(1_234), "1.2k");
        assert_eq!(format_count(12_345), "12k");
    }
}
