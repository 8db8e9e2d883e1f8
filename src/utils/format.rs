//! Format - Display Formatting Utilities

/// Plain number the way the service's own clients print it (`120`, `98.5`)
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        // avoid "-0"
        return "0".to_string();
    }
    value.to_string()
}

/// Fixed number of decimals
pub fn format_fixed(value: f64, decimals: usize) -> String {
    format!("{value:.decimals$}")
}

/// Rupee amount with two decimals
pub fn format_currency(value: f64) -> String {
    format!("₹{value:.2}")
}

/// Energy amount in kWh
pub fn format_kwh(value: f64, decimals: usize) -> String {
    format!("{value:.decimals$} kWh")
}

/// Pad or truncate to a fixed column width
pub fn column(text: &str, width: usize) -> String {
    let count = text.chars().count();
    if count <= width {
        format!("{text}{}", " ".repeat(width - count))
    } else if width <= 3 {
        text.chars().take(width).collect()
    } else {
        let head: String = text.chars().take(width - 3).collect();
        format!("{head}...")
    }
}
