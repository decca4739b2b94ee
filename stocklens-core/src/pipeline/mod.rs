//! Indicator pipeline: ordered, independent windowed transforms over a price series.
//!
//! Each stage reads the raw prices (and, where it needs to, fields written by
//! earlier stages) and fills its own fields of every `IndicatorRecord`.
//! Stages run strictly in order; the output is aligned 1:1 with the input.

pub mod stages;

pub use stages::{BasicIndicators, MovingAverages, RsiStage, VolatilityStage};

use crate::domain::{IndicatorRecord, IndicatorSeries, PriceRecord, PriceSeries};
use tracing::debug;

/// One transform of the pipeline.
pub trait IndicatorStage: Send + Sync {
    /// Stage name used in logs.
    fn name(&self) -> &str;

    /// Fill this stage's fields. `records` is aligned with `prices`.
    fn apply(&self, prices: &[PriceRecord], records: &mut [IndicatorRecord]);
}

/// An ordered list of stages.
pub struct IndicatorPipeline {
    stages: Vec<Box<dyn IndicatorStage>>,
}

impl IndicatorPipeline {
    /// A pipeline with no stages (every derived field stays null).
    pub fn empty() -> Self {
        Self { stages: Vec::new() }
    }

    /// Basic indicators → 20/50 averages → RSI(14) → volatility (second pass).
    pub fn standard() -> Self {
        Self::empty()
            .with_stage(BasicIndicators::default())
            .with_stage(MovingAverages::default())
            .with_stage(RsiStage::default())
            .with_stage(VolatilityStage::default())
    }

    pub fn with_stage(mut self, stage: impl IndicatorStage + 'static) -> Self {
        self.stages.push(Box::new(stage));
        self
    }

    pub fn stage_names(&self) -> Vec<&str> {
        self.stages.iter().map(|s| s.name()).collect()
    }

    /// Run every stage in order over `prices`.
    pub fn run(&self, prices: &PriceSeries) -> IndicatorSeries {
        let mut series = IndicatorSeries::from_prices(prices);
        for stage in &self.stages {
            debug!(stage = stage.name(), records = prices.len(), "applying indicator stage");
            stage.apply(prices.records(), series.records_mut());
        }
        series
    }
}

impl Default for IndicatorPipeline {
    fn default() -> Self {
        Self::standard()
    }
}

impl std::fmt::Debug for IndicatorPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IndicatorPipeline")
            .field("stages", &self.stage_names())
            .finish()
    }
}

/// Run the standard pipeline.
pub fn add_indicators(prices: &PriceSeries) -> IndicatorSeries {
    IndicatorPipeline::standard().run(prices)
}
