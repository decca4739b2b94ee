//! IndicatorRecord and IndicatorSeries: price rows plus nullable derived fields.

use serde::{Deserialize, Serialize};

use super::price::{fingerprint_records, PriceRecord, PriceSeries};

/// A source [`PriceRecord`] with the fields the pipeline derives from it.
///
/// `None` means "not computable": insufficient history or an undefined
/// result. It is never a stand-in for zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorRecord {
    #[serde(flatten)]
    pub price: PriceRecord,
    #[serde(rename = "return")]
    pub ret: Option<f64>,
    pub ma_short: Option<f64>,
    pub ma_long: Option<f64>,
    pub volatility_30d: Option<f64>,
    pub ma_short_20: Option<f64>,
    pub ma_long_50: Option<f64>,
    pub rsi_14: Option<f64>,
}

impl IndicatorRecord {
    /// A record with no derived fields populated yet.
    pub fn bare(price: PriceRecord) -> Self {
        Self {
            price,
            ret: None,
            ma_short: None,
            ma_long: None,
            volatility_30d: None,
            ma_short_20: None,
            ma_long_50: None,
            rsi_14: None,
        }
    }

    pub fn close(&self) -> f64 {
        self.price.close
    }
}

/// Positionally aligned 1:1 with the [`PriceSeries`] it was derived from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IndicatorSeries {
    records: Vec<IndicatorRecord>,
}

impl IndicatorSeries {
    /// Seed a series from prices, every derived field still null.
    pub fn from_prices(prices: &PriceSeries) -> Self {
        Self {
            records: prices.iter().cloned().map(IndicatorRecord::bare).collect(),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[IndicatorRecord] {
        &self.records
    }

    pub(crate) fn records_mut(&mut self) -> &mut [IndicatorRecord] {
        &mut self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, IndicatorRecord> {
        self.records.iter()
    }

    pub fn first(&self) -> Option<&IndicatorRecord> {
        self.records.first()
    }

    pub fn last(&self) -> Option<&IndicatorRecord> {
        self.records.last()
    }

    /// The underlying price rows, in order.
    pub fn prices(&self) -> Vec<PriceRecord> {
        self.records.iter().map(|r| r.price.clone()).collect()
    }

    pub fn closes(&self) -> Vec<f64> {
        self.records.iter().map(IndicatorRecord::close).collect()
    }

    /// Same digest as [`PriceSeries::fingerprint`] over the source rows.
    pub fn fingerprint(&self) -> String {
        fingerprint_records(self.records.iter().map(|r| &r.price))
    }

    /// Extract one derived column by field accessor.
    pub fn column(&self, field: impl Fn(&IndicatorRecord) -> Option<f64>) -> Vec<Option<f64>> {
        self.records.iter().map(field).collect()
    }
}

impl<'a> IntoIterator for &'a IndicatorSeries {
    type Item = &'a IndicatorRecord;
    type IntoIter = std::slice::Iter<'a, IndicatorRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
