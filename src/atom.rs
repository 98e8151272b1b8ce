//! Picked-atom records supplied by the external viewer.
//!
//! The embedding viewer owns picking, rendering, and coordinate
//! extraction; this crate only reads the atom records its pick callback
//! delivers.

use glam::DVec3;
use serde::{Deserialize, Serialize};

/// A single picked atom with its chemical and residue metadata.
///
/// Produced by the viewer's pick callback. Identity fields are never
/// mutated by this crate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Atom {
    /// Opaque unique identifier assigned by the viewer.
    pub id: String,
    /// Chemical element symbol (e.g. `"C"`).
    pub element: String,
    /// Three-letter residue code (e.g. `"GLY"`).
    pub residue_name: String,
    /// Sequence position within the chain.
    pub residue_number: i32,
    /// Chain identifier (e.g. `"A"`).
    pub chain: String,
    /// Atom label within the residue (e.g. `"CA"`).
    pub atom_name: String,
    /// Cartesian position in angstroms.
    pub position: DVec3,
    /// Crystallographic temperature factor, when the viewer reports one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub b_factor: Option<f64>,
    /// Site occupancy, when the viewer reports one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub occupancy: Option<f64>,
}

impl Atom {
    /// Short residue label: `"GLY12"`.
    #[must_use]
    pub fn short_label(&self) -> String {
        format!("{}{}", self.residue_name, self.residue_number)
    }

    /// Full label: `"GLY 12:A.CA"`.
    #[must_use]
    pub fn label(&self) -> String {
        format!(
            "{} {}:{}.{}",
            self.residue_name, self.residue_number, self.chain, self.atom_name
        )
    }

    /// NGL-style selection term: `"12:A.CA"`.
    #[must_use]
    pub fn selection_term(&self) -> String {
        format!("{}:{}.{}", self.residue_number, self.chain, self.atom_name)
    }
}

/// Join pick selection terms into an NGL selection string.
///
/// E.g. `"12:A.CA or 13:A.N"` — the input the viewer's highlight
/// representation expects. Empty input yields an empty string.
#[must_use]
pub fn selection_string(atoms: &[Atom]) -> String {
    atoms
        .iter()
        .map(Atom::selection_term)
        .collect::<Vec<_>>()
        .join(" or ")
}
