//! Domain types for stocklens

pub mod indicator_record;
pub mod price;
pub mod range;
pub mod summary;

pub use indicator_record::{IndicatorRecord, IndicatorSeries};
pub use price::{PriceRecord, PriceSeries, SeriesError};
pub use range::{DateRange, RangeError, DATE_FORMAT};
pub use summary::{PriceStats, StockSummary, SummaryRecord, SUMMARY_KEYS};
