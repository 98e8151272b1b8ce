//! Keyboard bindings for measurement commands.
//!
//! The embedding viewer owns the event loop; it forwards physical key
//! strings here and executes whatever command comes back:
//!
//! ```
//! use caliper::input::KeyBindings;
//! use caliper::session::MeasureSession;
//!
//! let bindings = KeyBindings::default();
//! let mut session = MeasureSession::new();
//! if let Some(cmd) = bindings.lookup("KeyD") {
//!     let _ = session.execute(cmd);
//! }
//! ```

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::measure::MeasurementMode;
use crate::session::MeasureCommand;

/// Maps physical key strings to [`MeasureCommand`] variants.
///
/// Key strings use the `winit::keyboard::KeyCode` debug format:
/// `"KeyD"`, `"Escape"`, etc.
///
/// Only *discrete* commands (mode switches, cancellation) make sense as
/// key bindings — parameterized commands like `Pick` are produced by the
/// viewer's pick callback, not key lookups.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct KeyBindings {
    /// Forward map: key string → command tag.
    bindings: FxHashMap<String, KeyCommandTag>,
}

/// Serializable tag for the subset of [`MeasureCommand`] that can be
/// key-bound (discrete, parameterless actions).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum KeyCommandTag {
    /// Switch to single-atom select mode.
    SelectMode,
    /// Switch to distance measurement mode.
    DistanceMode,
    /// Switch to angle measurement mode.
    AngleMode,
    /// Switch to torsion measurement mode.
    TorsionMode,
    /// Cancel the in-progress selection.
    Cancel,
    /// Drop every stored measurement.
    ClearMeasurements,
}

impl KeyCommandTag {
    /// Convert to the corresponding parameterless [`MeasureCommand`].
    fn to_command(self) -> MeasureCommand {
        match self {
            Self::SelectMode => {
                MeasureCommand::SetMode(MeasurementMode::Select)
            }
            Self::DistanceMode => {
                MeasureCommand::SetMode(MeasurementMode::Distance)
            }
            Self::AngleMode => {
                MeasureCommand::SetMode(MeasurementMode::Angle)
            }
            Self::TorsionMode => {
                MeasureCommand::SetMode(MeasurementMode::Torsion)
            }
            Self::Cancel => MeasureCommand::ClearSelection,
            Self::ClearMeasurements => MeasureCommand::ClearMeasurements,
        }
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let bindings = FxHashMap::from_iter([
            ("KeyS".into(), KeyCommandTag::SelectMode),
            ("KeyD".into(), KeyCommandTag::DistanceMode),
            ("KeyA".into(), KeyCommandTag::AngleMode),
            ("KeyT".into(), KeyCommandTag::TorsionMode),
            ("Escape".into(), KeyCommandTag::Cancel),
        ]);
        Self { bindings }
    }
}

impl KeyBindings {
    /// Look up the command for a physical key string.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<MeasureCommand> {
        self.bindings.get(key).map(|tag| tag.to_command())
    }

    /// Bind (or rebind) a key to a command tag.
    pub fn bind(&mut self, key: impl Into<String>, tag: KeyCommandTag) {
        let _ = self.bindings.insert(key.into(), tag);
    }
}
