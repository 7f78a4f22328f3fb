//! Display labels derived from status and weekday tokens.
//!
//! Every function here is total: unknown tokens map to an empty string so
//! response shaping never fails on unexpected stored values.

/// Label shown for a store status token.
pub fn store_status_label(status: &str) -> &'static str {
    match status {
        "published" => "営業中",
        "editing" => "編集中",
        "suspended" => "閉店",
        _ => "",
    }
}

/// Label shown for a prefecture or region status token.
pub fn area_status_label(status: &str) -> &'static str {
    match status {
        "published" => "反映中",
        "suspended" => "停止",
        _ => "",
    }
}

/// Single-character label for a weekday token.
pub fn weekday_label(weekday: &str) -> &'static str {
    match weekday {
        "SUNDAY" => "日",
        "MONDAY" => "月",
        "TUESDAY" => "火",
        "WEDNESDAY" => "水",
        "THURSDAY" => "木",
        "FRIDAY" => "金",
        "SATURDAY" => "土",
        _ => "",
    }
}

/// Maps each weekday token to its label, preserving order.
pub fn weekday_labels<S: AsRef<str>>(weekdays: &[S]) -> Vec<&'static str> {
    weekdays.iter().map(|w| weekday_label(w.as_ref())).collect()
}
