pub mod errors;
pub mod outcome;
pub mod page;
pub mod table;

pub use errors::{CommandError, ConfigError, HistoryError, TransferError};
pub use outcome::{FixedOutcome, OutcomeSource, RandomOutcome};
pub use page::Page;
pub use table::{Align, Table};

/// Format an amount in baht with thousands separators, e.g. `฿25,847.50`
pub fn format_baht(amount: f64) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    let fixed = format!("{:.2}", amount.abs());
    let (whole, frac) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::new();
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{}฿{}.{}", sign, grouped, frac)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_baht() {
        assert_eq!(format_baht(25_847.5), "฿25,847.50");
        assert_eq!(format_baht(500.0), "฿500.00");
        assert_eq!(format_baht(1_000_000.0), "฿1,000,000.00");
        assert_eq!(format_baht(0.0), "฿0.00");
        assert_eq!(format_baht(-1200.0), "-฿1,200.00");
    }
}
