//! Per-tick sampling of one field of the pool's tick records at one block.
//!
//! A failed query never aborts a pass: the tick is recorded as `0` and the
//! sampler moves on to the next tick. Queries run strictly one after another
//! in ascending tick order, without caching or retries.

use crate::error::QueryError;
use crate::reader::PoolStateReader;
use crate::types::{BlockHandle, TickDistribution, TickField, TickWindow};

/// Samples a fixed tick window through a [`PoolStateReader`]
#[derive(Debug)]
pub struct TickSampler<'a, R> {
    reader: &'a R,
    window: TickWindow,
}

impl<'a, R: PoolStateReader> TickSampler<'a, R> {
    pub fn new(reader: &'a R, window: TickWindow) -> Self {
        Self { reader, window }
    }

    /// Query a single tick and extract `field` from its record
    pub async fn query_tick_field(
        &self,
        tick: i32,
        block: &BlockHandle,
        field: TickField,
    ) -> Result<i128, QueryError> {
        let record = self.reader.tick_record(tick, block).await?;
        record.field(field)
    }

    /// Sample `field` for every tick of the window at `block`.
    ///
    /// The result holds exactly one entry per tick of the window.
    pub async fn sample_field(&self, block: &BlockHandle, field: TickField) -> TickDistribution {
        let mut distribution = TickDistribution::new();
        let mut failed = 0usize;

        for tick in self.window.ticks() {
            let value = match self.query_tick_field(tick, block, field).await {
                Ok(value) => value,
                Err(e) => {
                    tracing::warn!("Tick {tick} at block {}: {e}, using 0", block.number);
                    failed += 1;
                    0
                }
            };
            distribution.insert(tick, value);
        }

        tracing::info!(
            "Sampled {:?} for ticks [{}, {}] at block {}: {} ticks, {} failed",
            field,
            self.window.lower,
            self.window.upper,
            block.number,
            distribution.len(),
            failed
        );

        distribution
    }
}
