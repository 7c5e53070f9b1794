//! # rover-core
//!
//! Instruction-processing core for the grid-bounded rover service.
//!
//! This crate is the whole brain of the system: it parses and validates a
//! starting position and an instruction string, then replays the
//! instructions against an inclusive rectangular grid.  It has zero
//! dependencies on sockets, async runtimes, or any transport — transports
//! (such as `rover-gateway`) extract raw request fields, call
//! [`process_instructions`], and serialize the outcome.
//!
//! # Architecture overview
//!
//! The computation is a pure pipeline with two components:
//!
//! - **Position parser/validator** ([`parse_position`]) – turns a raw
//!   `"X Y ORIENTATION"` string into a validated [`Position`], checking
//!   format, integer syntax, grid bounds, and orientation in that fixed
//!   order.
//!
//! - **Instruction simulator** ([`parse_instructions`] + [`execute`]) –
//!   validates the L/R/M instruction alphabet, then drives the rover's
//!   4-state orientation automaton across the grid.  Moves that would leave
//!   the grid are clamped, never errors.
//!
//! Every error the core can produce is a [`ValidationError`] carrying a
//! deterministic, client-visible message; there is no internal failure mode.
//! Each request's computation is independent and side-effect-free, so
//! callers may run any number of them concurrently without coordination.

pub mod domain;
pub mod process;

// Re-export the full public surface at the crate root so callers can write
// `rover_core::process_instructions` instead of the longer module paths.
pub use domain::parse::{parse_instructions, parse_position};
pub use domain::rover::{GridBounds, Instruction, Orientation, Position, ValidationError};
pub use domain::simulate::execute;
pub use process::{process_instructions, ProcessOutcome};
