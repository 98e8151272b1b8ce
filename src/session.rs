//! Command-driven measurement session.
//!
//! Every user-facing measurement operation — whether triggered by a key
//! press, toolbar button, or the viewer's pick callback — is represented
//! as a [`MeasureCommand`]. Consumers construct commands and pass them to
//! [`MeasureSession::execute`], which returns the [`SessionEvent`]s the
//! UI should surface (prompts, notifications, completed measurements).

use crate::atom::Atom;
use crate::geometry::GeometryError;
use crate::measure::{
    Measurement, MeasurementId, MeasurementMode, MeasurementStore,
    PickOutcome, SelectionAccumulator,
};

/// A discrete or parameterized measurement operation.
///
/// The session never cares *how* a command was triggered — keyboard,
/// toolbar, or API all look identical:
///
/// ```
/// use caliper::measure::MeasurementMode;
/// use caliper::session::{MeasureCommand, MeasureSession};
///
/// let mut session = MeasureSession::new();
/// let _ = session.execute(MeasureCommand::SetMode(MeasurementMode::Distance));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum MeasureCommand {
    /// Switch the active measurement mode (discards pending picks).
    SetMode(MeasurementMode),
    /// Process one atom pick from the viewer.
    Pick(Atom),
    /// Abandon the in-progress selection (Escape / Clear button).
    ClearSelection,
    /// Drop every stored measurement.
    ClearMeasurements,
    /// Remove a single stored measurement.
    RemoveMeasurement(MeasurementId),
    /// Flip a stored measurement's highlight flag.
    ToggleHighlight(MeasurementId),
}

/// What the UI should surface after executing a command.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    /// The active mode changed.
    ModeChanged(MeasurementMode),
    /// Select mode: this atom is now the current selection.
    AtomSelected(Atom),
    /// A measurement is in progress; prompt for more picks.
    PicksNeeded {
        /// Atoms collected so far.
        have: usize,
        /// Picks still required.
        need: usize,
    },
    /// A measurement completed and was added to the store.
    MeasurementCompleted(Measurement),
    /// The final pick was geometrically degenerate; the attempt was
    /// abandoned.
    DegeneratePick {
        /// The rejected atoms, in pick order.
        atoms: Vec<Atom>,
        /// What made the geometry degenerate.
        error: GeometryError,
    },
    /// The pending selection was cleared.
    SelectionCleared,
    /// All measurements were dropped.
    MeasurementsCleared {
        /// How many were removed.
        count: usize,
    },
    /// One measurement was removed.
    MeasurementRemoved(Measurement),
    /// A measurement's highlight flag changed.
    HighlightToggled {
        /// Which measurement.
        id: MeasurementId,
        /// The new highlight state.
        highlighted: bool,
    },
}

/// One accumulator plus one store, driven by [`MeasureCommand`]s.
///
/// One session per view; the session is synchronous and never blocks.
#[derive(Debug, Default)]
pub struct MeasureSession {
    accumulator: SelectionAccumulator,
    store: MeasurementStore,
}

impl MeasureSession {
    /// Create a session in select mode with an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The active measurement mode.
    #[must_use]
    pub const fn mode(&self) -> MeasurementMode {
        self.accumulator.mode()
    }

    /// The in-progress pick sequence.
    #[must_use]
    pub fn pending(&self) -> &[Atom] {
        self.accumulator.pending()
    }

    /// The stored measurements.
    #[must_use]
    pub const fn store(&self) -> &MeasurementStore {
        &self.store
    }

    /// Mutable access to the stored measurements, for callers that
    /// manage the list directly.
    pub fn store_mut(&mut self) -> &mut MeasurementStore {
        &mut self.store
    }

    /// Execute one command, returning the events the UI should surface.
    pub fn execute(&mut self, command: MeasureCommand) -> Vec<SessionEvent> {
        match command {
            MeasureCommand::SetMode(mode) => {
                self.accumulator.set_mode(mode);
                vec![SessionEvent::ModeChanged(mode)]
            }
            MeasureCommand::Pick(atom) => self.handle_pick(atom),
            MeasureCommand::ClearSelection => {
                self.accumulator.clear();
                vec![SessionEvent::SelectionCleared]
            }
            MeasureCommand::ClearMeasurements => {
                self.accumulator.clear();
                let count = self.store.clear();
                log::info!("cleared {count} measurements");
                vec![
                    SessionEvent::SelectionCleared,
                    SessionEvent::MeasurementsCleared { count },
                ]
            }
            MeasureCommand::RemoveMeasurement(id) => self
                .store
                .remove(id)
                .map(SessionEvent::MeasurementRemoved)
                .into_iter()
                .collect(),
            MeasureCommand::ToggleHighlight(id) => self
                .store
                .toggle_highlight(id)
                .map(|highlighted| SessionEvent::HighlightToggled {
                    id,
                    highlighted,
                })
                .into_iter()
                .collect(),
        }
    }

    fn handle_pick(&mut self, atom: Atom) -> Vec<SessionEvent> {
        match self.accumulator.pick(atom) {
            PickOutcome::Selected(atom) => {
                vec![SessionEvent::AtomSelected(atom)]
            }
            PickOutcome::Pending { have, need } => {
                vec![SessionEvent::PicksNeeded {
                    have: have.len(),
                    need,
                }]
            }
            PickOutcome::Completed(measurement) => {
                log::info!(
                    "new {} measurement: {}",
                    measurement.kind,
                    measurement.format_value()
                );
                self.store.add(measurement.clone());
                vec![SessionEvent::MeasurementCompleted(measurement)]
            }
            PickOutcome::Degenerate { atoms, error } => {
                vec![SessionEvent::DegeneratePick { atoms, error }]
            }
        }
    }
}
