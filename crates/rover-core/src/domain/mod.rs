//! Domain layer for the rover core.
//!
//! Everything in this module is pure business logic: no I/O, no async, no
//! clocks, no shared state.  A request is a value in, a value (or a typed
//! validation error) out, which is what makes the core trivially unit- and
//! property-testable without any doubles.
//!
//! # Sub-modules
//!
//! - **`rover`** – the data model: orientation cycle, position, grid bounds,
//!   instruction alphabet, and the validation error taxonomy.
//! - **`parse`** – the position parser/validator and the instruction-string
//!   validator.  First failing check wins; nothing is aggregated.
//! - **`simulate`** – instruction execution.  Error-free by construction:
//!   it only ever sees validated inputs.

pub mod parse;
pub mod rover;
pub mod simulate;
