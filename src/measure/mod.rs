//! Pick accumulation, measurement records, and the measurement store.

mod accumulator;
mod mode;
mod record;
mod store;

pub use accumulator::{PickOutcome, SelectionAccumulator};
pub use mode::{MeasurementKind, MeasurementMode};
pub use record::{Measurement, MeasurementId};
pub use store::{KindFilter, MeasurementStats, MeasurementStore};
