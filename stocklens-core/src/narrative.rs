//! Fixed-template narrative paragraph for a summary record.

use crate::domain::SummaryRecord;

/// Render the price summary of `symbol` as a paragraph.
///
/// The volatility sentence is appended only when a mean volatility exists.
/// An empty record yields a fixed "no data" sentence instead.
pub fn generate_text_summary(symbol: &str, summary: &SummaryRecord) -> String {
    let Some(summary) = summary.as_summary() else {
        return format!("No data available for {symbol} over the selected period.");
    };
    let s = &summary.stats;

    let mut text = format!(
        "For {symbol}, between {} and {}, the closing price moved from {:.2} to {:.2}. \
         The minimum observed price is {:.2} and the maximum {:.2}, for an average price of {:.2}. ",
        s.first_date, s.last_date, s.start_price, s.end_price, s.min_price, s.max_price, s.mean_price,
    );
    if let Some(vol) = s.volatility_30d_mean {
        text.push_str(&format!("The average 30-day volatility is {vol:.4}."));
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{PriceStats, StockSummary};
    use chrono::NaiveDate;

    fn record(vol: Option<f64>) -> SummaryRecord {
        StockSummary::new(
            PriceStats {
                first_date: NaiveDate::from_ymd_opt(2021, 3, 1).unwrap(),
                last_date: NaiveDate::from_ymd_opt(2021, 6, 30).unwrap(),
                start_price: 120.5,
                end_price: 133.333,
                min_price: 118.0,
                max_price: 140.0,
                mean_price: 129.12345,
                volatility_30d_mean: vol,
            },
            String::new(),
            0,
        )
        .into()
    }

    #[test]
    fn empty_record_fixed_sentence() {
        assert_eq!(
            generate_text_summary("AAPL", &SummaryRecord::empty()),
            "No data available for AAPL over the selected period."
        );
    }

    #[test]
    fn full_template_with_volatility() {
        let text = generate_text_summary("MSFT", &record(Some(0.018765)));
        assert_eq!(
            text,
            "For MSFT, between 2021-03-01 and 2021-06-30, the closing price moved from 120.50 to 133.33. \
             The minimum observed price is 118.00 and the maximum 140.00, for an average price of 129.12. \
             The average 30-day volatility is 0.0188."
        );
    }

    #[test]
    fn volatility_sentence_omitted_when_null() {
        let text = generate_text_summary("MSFT", &record(None));
        assert!(!text.contains("volatility"));
        assert!(text.contains("average price of 129.12."));
    }
}
