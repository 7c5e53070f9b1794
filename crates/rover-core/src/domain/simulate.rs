//! Instruction execution against a validated starting state.
//!
//! Execution is the second phase of the simulator: by the time a program
//! reaches [`execute`], both the starting position and the instruction
//! alphabet have already been validated, so this phase has no error
//! conditions at all.
//!
//! The rover's orientation is a 4-state cyclic automaton: 'L' and 'R' are
//! its only transitions, and 'M' is a self-transition on position guarded by
//! the bounds invariant.  There is no terminal state — processing simply
//! ends when the program is exhausted.

use crate::domain::rover::{GridBounds, Instruction, Position};

/// Replays `program` from `start` and returns the final position.
///
/// Instructions are applied left to right, one at a time.  Moves that would
/// exit `bounds` are dropped (the rover clamps at the boundary), so the
/// result is always within bounds whenever `start` is.
///
/// # Examples
///
/// ```rust
/// use rover_core::{execute, parse_instructions, GridBounds, Orientation, Position};
///
/// let bounds = GridBounds::new(5, 5);
/// let program = parse_instructions("LMLMLMLMM").unwrap();
/// let end = execute(Position::new(1, 2, Orientation::North), &program, &bounds);
/// assert_eq!(end.to_string(), "1 3 N");
/// ```
pub fn execute(start: Position, program: &[Instruction], bounds: &GridBounds) -> Position {
    let mut rover = start;
    for instruction in program {
        match instruction {
            Instruction::Left => rover.rotate_left(),
            Instruction::Right => rover.rotate_right(),
            Instruction::Move => rover.advance(bounds),
        }
    }
    rover
}

// ── Tests ─────────────────────────────────────────────────────────────────────
