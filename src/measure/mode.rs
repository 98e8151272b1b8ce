//! Measurement modes and kinds.

use std::fmt;

use serde::{Deserialize, Serialize};

/// How the accumulator interprets incoming picks.
///
/// `Select` is single-atom inspection; the measurement modes collect the
/// number of atoms their geometry needs before producing a value.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum MeasurementMode {
    /// Single-atom inspection; each pick replaces the current selection.
    #[default]
    Select,
    /// Two-atom distance, angstroms.
    Distance,
    /// Three-atom angle at the middle atom, degrees.
    Angle,
    /// Four-atom dihedral around the middle bond, degrees.
    Torsion,
}

impl MeasurementMode {
    /// Number of picks the mode consumes before producing a result.
    #[must_use]
    pub const fn required_picks(self) -> usize {
        match self {
            Self::Select => 1,
            Self::Distance => 2,
            Self::Angle => 3,
            Self::Torsion => 4,
        }
    }

    /// The measurement kind this mode produces, `None` for `Select`.
    #[must_use]
    pub const fn kind(self) -> Option<MeasurementKind> {
        match self {
            Self::Select => None,
            Self::Distance => Some(MeasurementKind::Distance),
            Self::Angle => Some(MeasurementKind::Angle),
            Self::Torsion => Some(MeasurementKind::Torsion),
        }
    }
}

/// Kind of a finalized measurement (mode minus `Select`).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum MeasurementKind {
    /// Pairwise distance, angstroms.
    Distance,
    /// Three-atom angle, degrees.
    Angle,
    /// Four-atom dihedral, degrees.
    Torsion,
}

impl MeasurementKind {
    /// Number of atoms a measurement of this kind records.
    #[must_use]
    pub const fn atom_count(self) -> usize {
        match self {
            Self::Distance => 2,
            Self::Angle => 3,
            Self::Torsion => 4,
        }
    }

    /// Unit suffix for display: `" Å"` or `"°"`.
    #[must_use]
    pub const fn unit(self) -> &'static str {
        match self {
            Self::Distance => " Å",
            Self::Angle | Self::Torsion => "°",
        }
    }
}

impl fmt::Display for MeasurementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Distance => "distance",
            Self::Angle => "angle",
            Self::Torsion => "torsion",
        };
        f.write_str(name)
    }
}
