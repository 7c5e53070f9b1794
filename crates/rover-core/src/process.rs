//! The single operation exposed to transport collaborators.
//!
//! [`process_instructions`] is the whole external surface of the core: a
//! synchronous, stateless transformation from raw request fields to either a
//! final position or a validation error.  Transports own status-code
//! assignment and serialization; the core only classifies the outcome and
//! supplies the client-visible message text.

use tracing::debug;

use crate::domain::parse::{parse_instructions, parse_position};
use crate::domain::rover::{GridBounds, Position, ValidationError};
use crate::domain::simulate::execute;

/// Outcome of a successfully simulated instruction run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessOutcome {
    /// Rover state after the last instruction was applied.
    pub position: Position,
}

impl ProcessOutcome {
    /// Renders the canonical success message, e.g. `"Final position: 1 3 N"`.
    pub fn message(&self) -> String {
        format!("Final position: {}", self.position)
    }
}

/// Validates a rover request and simulates it.
///
/// Validation runs position-first, then instructions; the first failing
/// check short-circuits and its reason is the only one reported.  Execution
/// cannot fail — every error case is caught during validation.
///
/// # Errors
///
/// Returns the [`ValidationError`] of the first failing check.  All
/// variants are expected client errors; their `Display` output is the
/// deterministic client-visible message.
///
/// # Examples
///
/// ```rust
/// use rover_core::process_instructions;
///
/// let outcome = process_instructions("1 2 N", "LMLMLMLMM", 5, 5).unwrap();
/// assert_eq!(outcome.message(), "Final position: 1 3 N");
///
/// let error = process_instructions("6 6 N", "MM", 5, 5).unwrap_err();
/// assert_eq!(
///     error.to_string(),
///     "Coordinates must be within the limits: X [0, 5], Y [0, 5]."
/// );
/// ```
pub fn process_instructions(
    initial_position: &str,
    instructions: &str,
    max_coordinate_x: i32,
    max_coordinate_y: i32,
) -> Result<ProcessOutcome, ValidationError> {
    let bounds = GridBounds::new(max_coordinate_x, max_coordinate_y);

    let start = match parse_position(initial_position, &bounds) {
        Ok(position) => position,
        Err(e) => {
            debug!("rejected starting position {initial_position:?}: {e}");
            return Err(e);
        }
    };

    let program = match parse_instructions(instructions) {
        Ok(program) => program,
        Err(e) => {
            debug!("rejected instruction string {instructions:?}: {e}");
            return Err(e);
        }
    };

    let position = execute(start, &program, &bounds);
    debug!(
        "simulated {} instructions on a {}x{} grid: {start} -> {position}",
        program.len(),
        bounds.max_x,
        bounds.max_y
    );

    Ok(ProcessOutcome { position })
}

// ── Tests ─────────────────────────────────────────────────────────────────────
