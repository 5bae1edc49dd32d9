//! es-ES display formatting.
//!
//! The dashboard always renders in the Spanish (Spain) convention regardless
//! of the browser locale.

use chrono::{Local, NaiveTime, Timelike};

/// Current wall-clock time in the viewer's time zone.
pub fn local_time_now() -> NaiveTime {
    Local::now().time()
}

/// Format a time the way `toLocaleTimeString('es-ES')` does: `H:MM:SS`.
pub fn format_time_es(time: NaiveTime) -> String {
    format!(
        "{}:{:02}:{:02}",
        time.hour(),
        time.minute(),
        time.second()
    )
}

/// Format an amount with `.` thousands separators and `,` decimals,
/// always two decimal places.
pub fn format_amount_es(value: f64) -> String {
    let negative = value < 0.0;
    let cents = (value.abs() * 100.0).round() as u64;
    let units = cents / 100;
    let decimals = cents % 100;

    let digits = units.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }

    let sign = if negative && cents > 0 { "-" } else { "" };
    format!("{}{},{:02}", sign, grouped, decimals)
}

/// Format a percentage with two decimals: `12,50 %`.
pub fn format_percent_es(value: f64) -> String {
    format!("{} %", format_amount_es(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_time_es() {
        let t = NaiveTime::from_hms_opt(9, 5, 7).unwrap();
        assert_eq!(format_time_es(t), "9:05:07");

        let t = NaiveTime::from_hms_opt(23, 59, 0).unwrap();
        assert_eq!(format_time_es(t), "23:59:00");

        let t = NaiveTime::from_hms_opt(0, 0, 0).unwrap();
        assert_eq!(format_time_es(t), "0:00:00");
    }

    #[test]
    fn test_format_amount_es() {
        assert_eq!(format_amount_es(0.0), "0,00");
        assert_eq!(format_amount_es(999.5), "999,50");
        assert_eq!(format_amount_es(1234.0), "1.234,00");
        assert_eq!(format_amount_es(1234567.891), "1.234.567,89");
        assert_eq!(format_amount_es(-45000.25), "-45.000,25");
        assert_eq!(format_amount_es(-0.001), "0,00");
    }

    #[test]
    fn test_format_percent_es() {
        assert_eq!(format_percent_es(12.5), "12,50 %");
    }
}
