//! Pickup-window helpers.
//!
//! Pickup windows are free-form strings such as `"10:00–12:00"`; nothing in
//! the store parses them into times.

/// Pick the suggested pickup window for a new listing: the last window
/// offered, or `None` when the list is empty.
///
/// This is a placeholder heuristic, not a forecast.
pub fn predict_window(pickup_windows: &[String]) -> Option<String> {
    pickup_windows.last().cloned()
}

/// Split a comma-separated window list as typed into a form, trimming each
/// entry and dropping blanks.
pub fn parse_pickup_windows(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|w| !w.is_empty())
        .map(String::from)
        .collect()
}
