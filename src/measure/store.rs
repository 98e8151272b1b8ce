//! Caller-held measurement collection with filtering, statistics, and
//! JSON export.
//!
//! The accumulator itself keeps no history; the embedding application
//! owns one of these per view and feeds it completed measurements.

use serde::{Deserialize, Serialize};

use super::mode::MeasurementKind;
use super::record::{Measurement, MeasurementId};
use crate::error::CaliperError;

/// Kind filter for listing and statistics.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum KindFilter {
    /// All measurements.
    #[default]
    All,
    /// Distances only.
    Distance,
    /// Angles only.
    Angle,
    /// Torsions only.
    Torsion,
}

impl KindFilter {
    /// Whether a measurement of `kind` passes this filter.
    #[must_use]
    pub const fn matches(self, kind: MeasurementKind) -> bool {
        matches!(
            (self, kind),
            (Self::All, _)
                | (Self::Distance, MeasurementKind::Distance)
                | (Self::Angle, MeasurementKind::Angle)
                | (Self::Torsion, MeasurementKind::Torsion)
        )
    }
}

/// Summary statistics over a filtered measurement view.
///
/// Mixes units when the filter is [`KindFilter::All`], exactly as the
/// measurement panel's stats strip does.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeasurementStats {
    /// Number of measurements in the view.
    pub count: usize,
    /// Arithmetic mean of the values.
    pub mean: f64,
    /// Smallest value.
    pub min: f64,
    /// Largest value.
    pub max: f64,
}

/// One row of the JSON export payload.
#[derive(Serialize)]
struct ExportEntry {
    kind: MeasurementKind,
    value: f64,
    atoms: String,
    timestamp: String,
}

/// Insertion-ordered measurement list owned by the embedding application.
#[derive(Debug, Default, Clone)]
pub struct MeasurementStore {
    measurements: Vec<Measurement>,
}

impl MeasurementStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored measurements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.measurements.len()
    }

    /// Whether the store is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.measurements.is_empty()
    }

    /// All measurements in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Measurement> {
        self.measurements.iter()
    }

    /// Measurements passing `filter`, in insertion order.
    pub fn filtered(
        &self,
        filter: KindFilter,
    ) -> impl Iterator<Item = &Measurement> {
        self.measurements
            .iter()
            .filter(move |m| filter.matches(m.kind))
    }

    /// Append a completed measurement.
    pub fn add(&mut self, measurement: Measurement) {
        self.measurements.push(measurement);
    }

    /// Remove a measurement by id, returning it if present.
    pub fn remove(&mut self, id: MeasurementId) -> Option<Measurement> {
        let index = self.measurements.iter().position(|m| m.id == id)?;
        Some(self.measurements.remove(index))
    }

    /// Remove all measurements, returning how many were dropped.
    pub fn clear(&mut self) -> usize {
        let count = self.measurements.len();
        self.measurements.clear();
        count
    }

    /// Flip a measurement's highlight flag. Returns the new state, or
    /// `None` if the id is unknown.
    pub fn toggle_highlight(&mut self, id: MeasurementId) -> Option<bool> {
        let m = self.measurements.iter_mut().find(|m| m.id == id)?;
        m.highlighted = !m.highlighted;
        Some(m.highlighted)
    }

    /// Look up a measurement by id.
    #[must_use]
    pub fn get(&self, id: MeasurementId) -> Option<&Measurement> {
        self.measurements.iter().find(|m| m.id == id)
    }

    /// Summary statistics over the measurements passing `filter`, or
    /// `None` when the view is empty.
    #[must_use]
    pub fn stats(&self, filter: KindFilter) -> Option<MeasurementStats> {
        let mut count = 0usize;
        let mut sum = 0.0f64;
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for m in self.filtered(filter) {
            count += 1;
            sum += m.value;
            min = min.min(m.value);
            max = max.max(m.value);
        }
        // Stores are interactive-session sized; u32 covers them.
        let n = f64::from(u32::try_from(count).unwrap_or(u32::MAX));
        (count > 0).then(|| MeasurementStats {
            count,
            mean: sum / n,
            min,
            max,
        })
    }

    /// Pretty-printed JSON export of all measurements: kind, value, the
    /// residue path string (`"GLY12 → ALA13"`), and the creation time as
    /// an ISO-8601 UTC string.
    pub fn export_json(&self) -> Result<String, CaliperError> {
        let entries: Vec<ExportEntry> = self
            .measurements
            .iter()
            .map(|m| ExportEntry {
                kind: m.kind,
                value: m.value,
                atoms: m.atom_path(),
                timestamp: m.created_at_iso(),
            })
            .collect();
        serde_json::to_string_pretty(&entries).map_err(CaliperError::from)
    }
}

impl<'a> IntoIterator for &'a MeasurementStore {
    type Item = &'a Measurement;
    type IntoIter = std::slice::Iter<'a, Measurement>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
