//! Converts a stream of atom picks into completed measurements.
//!
//! The accumulator is the only owner of the pending pick sequence. It is
//! synchronous and single-threaded by contract: every call completes
//! immediately, and callers that share a view across threads must
//! serialize access themselves (one accumulator per view).

use super::mode::{MeasurementKind, MeasurementMode};
use super::record::{unix_now_ms, Measurement, MeasurementId};
use crate::atom::Atom;
use crate::geometry::{self, GeometryError};

/// Result of processing one pick through the accumulator.
#[derive(Debug, Clone, PartialEq)]
pub enum PickOutcome {
    /// Select mode: the current selection was replaced with this atom.
    Selected(Atom),
    /// More picks are needed to finish the active measurement.
    Pending {
        /// Atoms collected so far, in pick order.
        have: Vec<Atom>,
        /// Picks still required.
        need: usize,
    },
    /// The pick completed a measurement.
    Completed(Measurement),
    /// The final pick produced degenerate geometry (coincident or
    /// collinear atoms); the attempt is abandoned and the pending
    /// selection cleared. The picked atoms are handed back so the caller
    /// can message the user.
    Degenerate {
        /// The atoms of the rejected attempt, in pick order.
        atoms: Vec<Atom>,
        /// What made the geometry degenerate.
        error: GeometryError,
    },
}

/// Accumulates atom picks into measurements according to the active mode.
///
/// State machine over `{Idle, Accumulating(n)}` with
/// `0 <= n < required(mode)`: a pick either extends the pending sequence
/// or, on reaching the mode's required count, emits a [`Measurement`] and
/// resets. [`set_mode`](Self::set_mode) and [`clear`](Self::clear) force
/// the machine back to idle; there is no terminal state.
///
/// Invariant: in the measurement modes,
/// `pending.len() < mode.required_picks()` between calls. The length can
/// never exceed the requirement because each pick appends at most one
/// atom and the accumulator resets exactly at the boundary, so no
/// overflow guard exists. Select mode sits outside the invariant: its
/// pending selection simply holds the last picked atom.
#[derive(Debug)]
pub struct SelectionAccumulator {
    mode: MeasurementMode,
    pending: Vec<Atom>,
    next_id: u64,
}

impl Default for SelectionAccumulator {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectionAccumulator {
    /// Create an idle accumulator in [`MeasurementMode::Select`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            mode: MeasurementMode::default(),
            pending: Vec::new(),
            next_id: 1,
        }
    }

    /// The active mode.
    #[must_use]
    pub const fn mode(&self) -> MeasurementMode {
        self.mode
    }

    /// Atoms collected so far for the active mode, in pick order.
    #[must_use]
    pub fn pending(&self) -> &[Atom] {
        &self.pending
    }

    /// Picks still required before the active mode produces a result.
    /// Used for prompt text ("select 2 more atoms").
    #[must_use]
    pub fn remaining_picks(&self) -> usize {
        self.mode.required_picks().saturating_sub(self.pending.len())
    }

    /// Switch the active mode, discarding any pending picks.
    ///
    /// Switching tools abandons in-progress measurements; there is no
    /// resume semantics.
    pub fn set_mode(&mut self, mode: MeasurementMode) {
        self.mode = mode;
        self.pending.clear();
    }

    /// Abandon the pending selection without changing mode (Escape key,
    /// Clear button).
    pub fn clear(&mut self) {
        self.pending.clear();
    }

    /// Process one atom-pick event from the viewer.
    pub fn pick(&mut self, atom: Atom) -> PickOutcome {
        let Some(kind) = self.mode.kind() else {
            // Select mode: single-atom inspection, replace not append.
            self.pending.clear();
            self.pending.push(atom.clone());
            return PickOutcome::Selected(atom);
        };

        self.pending.push(atom);
        let required = self.mode.required_picks();
        if self.pending.len() < required {
            return PickOutcome::Pending {
                have: self.pending.clone(),
                need: required - self.pending.len(),
            };
        }

        let atoms = std::mem::take(&mut self.pending);
        match evaluate(kind, &atoms) {
            Ok(value) => {
                let id = MeasurementId(self.next_id);
                self.next_id += 1;
                log::debug!("completed {kind} measurement {id:?}: {value}");
                PickOutcome::Completed(Measurement {
                    id,
                    kind,
                    atoms,
                    value,
                    created_at_ms: unix_now_ms(),
                    highlighted: false,
                })
            }
            Err(error) => {
                log::warn!("rejected {kind} measurement: {error}");
                PickOutcome::Degenerate { atoms, error }
            }
        }
    }
}

/// Compute the measurement value for a completed pick set.
///
/// `atoms.len()` equals `kind.atom_count()` by the accumulator invariant.
fn evaluate(
    kind: MeasurementKind,
    atoms: &[Atom],
) -> Result<f64, GeometryError> {
    match kind {
        MeasurementKind::Distance => {
            Ok(geometry::distance(atoms[0].position, atoms[1].position))
        }
        MeasurementKind::Angle => geometry::angle(
            atoms[1].position,
            atoms[0].position,
            atoms[2].position,
        ),
        MeasurementKind::Torsion => geometry::torsion(
            atoms[0].position,
            atoms[1].position,
            atoms[2].position,
            atoms[3].position,
        ),
    }
}
