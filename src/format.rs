//! Display Formatting

/// ISO 8601 timestamp to `dd.mm.yyyy`. Falls back to the raw string
/// when the shape is unexpected.
pub fn format_date(iso: &str) -> String {
    let date_part = iso.split('T').next().unwrap_or(iso);
    let parts: Vec<&str> = date_part.split('-').collect();
    if parts.len() == 3 && parts.iter().all(|p| !p.is_empty()) {
        format!("{}.{}.{}", parts[2], parts[1], parts[0])
    } else {
        iso.to_string()
    }
}

/// Toman amount with thousands grouping, e.g. `1,250,000 تومان`.
pub fn format_price(amount: f64) -> String {
    format!("{} تومان", group_thousands(amount.round() as i64))
}

fn group_thousands(value: i64) -> String {
    let negative = value < 0;
    let digits = value.abs().to_string();
    let mut out = String::new();
    let len = digits.len();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if negative {
        format!("-{out}")
    } else {
        out
    }
}

/// Human readable file size
pub fn format_file_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = 1024 * 1024;
    if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{bytes} B")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iso_timestamps_become_day_month_year() {
        assert_eq!(format_date("2024-05-01T10:30:00Z"), "01.05.2024");
        assert_eq!(format_date("2024-12-31"), "31.12.2024");
    }

    #[test]
    fn odd_date_shapes_pass_through() {
        assert_eq!(format_date(""), "");
        assert_eq!(format_date("yesterday"), "yesterday");
        assert_eq!(format_date("2024-05"), "2024-05");
    }

    #[test]
    fn prices_group_thousands() {
        assert_eq!(format_price(1_250_000.0), "1,250,000 تومان");
        assert_eq!(format_price(900.0), "900 تومان");
        assert_eq!(format_price(0.0), "0 تومان");
        assert_eq!(format_price(12_500.4), "12,500 تومان");
    }

    #[test]
    fn file_sizes_scale_units() {
        assert_eq!(format_file_size(512), "512 B");
        assert_eq!(format_file_size(2048), "2.0 KB");
        assert_eq!(format_file_size(15 * 1024 * 1024), "15.0 MB");
    }
}
