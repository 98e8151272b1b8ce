//! Finalized measurement records.

use serde::{Deserialize, Serialize};
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;
use web_time::{SystemTime, UNIX_EPOCH};

use super::mode::MeasurementKind;
use crate::atom::Atom;
use crate::options::FormatOptions;

/// Identifier for a measurement, unique within the session that created
/// it. Ids are handed out monotonically by the accumulator.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
)]
pub struct MeasurementId(pub u64);

/// A finalized geometric measurement derived from 2–4 picked atoms.
///
/// Created exclusively by the accumulator when a selection completes, and
/// immutable thereafter except for [`highlighted`](Self::highlighted),
/// which belongs to the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    /// Creation-order identifier.
    pub id: MeasurementId,
    /// What was measured.
    pub kind: MeasurementKind,
    /// The atoms that produced the value, in pick order.
    pub atoms: Vec<Atom>,
    /// Angstroms for distance, degrees for angle/torsion.
    pub value: f64,
    /// Wall-clock creation time, unix milliseconds.
    pub created_at_ms: u64,
    /// UI highlight flag; this crate only toggles it on request.
    pub highlighted: bool,
}

impl Measurement {
    /// Format the value with its unit at the default precision
    /// (`"2.45 Å"`, `"109.5°"`).
    #[must_use]
    pub fn format_value(&self) -> String {
        self.format_value_with(&FormatOptions::default())
    }

    /// Format the value with its unit at the configured precision.
    #[must_use]
    pub fn format_value_with(&self, format: &FormatOptions) -> String {
        let decimals = match self.kind {
            MeasurementKind::Distance => format.distance_decimals,
            MeasurementKind::Angle | MeasurementKind::Torsion => {
                format.angle_decimals
            }
        };
        format!(
            "{:.*}{}",
            usize::from(decimals),
            self.value,
            self.kind.unit()
        )
    }

    /// Creation time as an ISO-8601 UTC string
    /// (`"2023-11-14T22:13:20Z"`).
    #[must_use]
    pub fn created_at_iso(&self) -> String {
        iso_utc(self.created_at_ms)
    }

    /// Residue path through the measured atoms: `"GLY12 → ALA13"`.
    #[must_use]
    pub fn atom_path(&self) -> String {
        self.atoms
            .iter()
            .map(Atom::short_label)
            .collect::<Vec<_>>()
            .join(" → ")
    }
}

/// Current wall-clock time as unix milliseconds. Saturates to 0 for
/// clocks set before the epoch.
pub(crate) fn unix_now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
}

/// Format unix milliseconds as an ISO-8601 (RFC 3339) UTC string.
/// Out-of-range input yields an empty string.
fn iso_utc(ms: u64) -> String {
    OffsetDateTime::from_unix_timestamp_nanos(i128::from(ms) * 1_000_000)
        .ok()
        .and_then(|t| t.format(&Rfc3339).ok())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::{unix_now_ms, Measurement, MeasurementId};
    use crate::atom::Atom;
    use crate::measure::mode::MeasurementKind;
    use crate::options::FormatOptions;
    use glam::DVec3;

    fn atom(residue_name: &str, residue_number: i32) -> Atom {
        Atom {
            id: format!("{residue_name}{residue_number}"),
            element: "C".into(),
            residue_name: residue_name.into(),
            residue_number,
            chain: "A".into(),
            atom_name: "CA".into(),
            position: DVec3::ZERO,
            b_factor: None,
            occupancy: None,
        }
    }

    fn measurement(kind: MeasurementKind, value: f64) -> Measurement {
        Measurement {
            id: MeasurementId(1),
            kind,
            atoms: vec![atom("GLY", 12), atom("ALA", 13)],
            value,
            created_at_ms: unix_now_ms(),
            highlighted: false,
        }
    }

    #[test]
    fn distance_formats_with_two_decimals_and_angstrom() {
        let m = measurement(MeasurementKind::Distance, 2.4478);
        assert_eq!(m.format_value(), "2.45 Å");
    }

    #[test]
    fn angle_formats_with_one_decimal_and_degree() {
        let m = measurement(MeasurementKind::Angle, 109.47);
        assert_eq!(m.format_value(), "109.5°");
    }

    #[test]
    fn format_respects_configured_precision() {
        let m = measurement(MeasurementKind::Distance, 2.4478);
        let format = FormatOptions {
            distance_decimals: 3,
            angle_decimals: 1,
        };
        assert_eq!(m.format_value_with(&format), "2.448 Å");
    }

    #[test]
    fn atom_path_joins_short_labels() {
        let m = measurement(MeasurementKind::Distance, 1.0);
        assert_eq!(m.atom_path(), "GLY12 → ALA13");
    }

    #[test]
    fn created_at_iso_is_rfc3339_utc() {
        let mut m = measurement(MeasurementKind::Distance, 1.0);
        m.created_at_ms = 1_700_000_000_000;
        assert_eq!(m.created_at_iso(), "2023-11-14T22:13:20Z");
    }
}
