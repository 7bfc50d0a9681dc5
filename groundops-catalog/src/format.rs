//! Display formatting for dashboard tiles (Indian numbering units).

const CRORE: f64 = 10_000_000.0;
const LAKH: f64 = 100_000.0;
const THOUSAND: f64 = 1_000.0;

/// Compact a large amount into crore / lakh / thousand units with one decimal.
pub fn format_large_number(value: f64) -> String {
    if value >= CRORE {
        format!("{:.1}Cr", value / CRORE)
    } else if value >= LAKH {
        format!("{:.1}L", value / LAKH)
    } else if value >= THOUSAND {
        format!("{:.1}K", value / THOUSAND)
    } else {
        format!("{}", value.floor() as i64)
    }
}

pub fn format_rupees(value: f64) -> String {
    format!("₹{}", format_large_number(value))
}

pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_large_number_units() {
        assert_eq!(format_large_number(45_600_000.0), "4.6Cr");
        assert_eq!(format_large_number(150_000.0), "1.5L");
        assert_eq!(format_large_number(1_500.0), "1.5K");
        assert_eq!(format_large_number(999.9), "999");
        assert_eq!(format_large_number(0.0), "0");
    }

    #[test]
    fn test_rupees_and_percent() {
        assert_eq!(format_rupees(32_100_000.0), "₹3.2Cr");
        assert_eq!(format_percent(29.6), "29.6%");
        assert_eq!(format_percent(0.0), "0.0%");
    }
}
