// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Measurement math compares against exact constants (0.0, 180.0)
#![allow(clippy::float_cmp)]

//! Atom-selection and measurement core for interactive protein viewers.
//!
//! Caliper turns the stream of atom picks emitted by an embedding 3D
//! viewer into distance, angle, and dihedral measurements. It owns no
//! rendering, parsing, or camera logic — the viewer delivers one
//! [`atom::Atom`] per pick and this crate does the rest.
//!
//! # Key entry points
//!
//! - [`measure::SelectionAccumulator`] - the pick-accumulation state
//!   machine
//! - [`measure::MeasurementStore`] - the caller-held measurement list
//!   (filtering, statistics, JSON export)
//! - [`session::MeasureSession`] - command-driven wrapper tying the two
//!   together for a UI event loop
//! - [`options::Options`] - runtime configuration (value formatting,
//!   keybindings)
//!
//! # Architecture
//!
//! The accumulator is a small synchronous state machine: each pick either
//! extends the pending selection or completes a measurement, computed by
//! the pure functions in [`geometry`]. Completed records are handed back
//! by return value; nothing in this crate holds a long-lived collection
//! except the explicitly caller-owned [`measure::MeasurementStore`].

pub mod atom;
pub mod error;
pub mod geometry;
pub mod input;
pub mod measure;
pub mod options;
pub mod session;
