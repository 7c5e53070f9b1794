//! Rover domain entities.
//!
//! The data model is deliberately small: a rover is a [`Position`] (integer
//! coordinates plus an [`Orientation`]) confined to inclusive [`GridBounds`],
//! and a mission is a sequence of [`Instruction`]s. All types are plain
//! values constructed fresh per request; nothing here persists or touches
//! I/O.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Validation failures for rover requests.
///
/// Every variant is an expected, recoverable client error — there is no
/// internal failure mode in the core.  The `Display` output of each variant
/// is the exact client-visible reason string; callers never need to build
/// their own wording.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The starting position string does not split into exactly 3 tokens.
    #[error("Invalid format for starting position. Example: \"0 0 N\".")]
    Format,

    /// The X or Y token is not a well-formed integer.
    #[error("The X and Y coordinates must be integers.")]
    CoordinatesNotIntegers,

    /// The starting coordinates fall outside the configured grid.
    #[error("Coordinates must be within the limits: X [0, {max_x}], Y [0, {max_y}].")]
    OutOfBounds { max_x: i32, max_y: i32 },

    /// The orientation token is not one of N, E, S, W.
    #[error("Invalid direction. Valid directions are: N, E, S, W.")]
    Orientation,

    /// The instruction string is empty or contains a character outside L, R, M.
    #[error("Invalid instructions. Only the characters L, R and M are allowed.")]
    Instructions,
}

// ── Orientation ───────────────────────────────────────────────────────────────

/// One of the four compass orientations, forming a cycle under rotation.
///
/// The cycle order is [N, E, S, W]: [`right`](Self::right) advances the cycle
/// and [`left`](Self::left) reverses it.  Modeled as an explicit enum with
/// successor/predecessor methods so the rotation contract is visible in the
/// type rather than hidden in index arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Orientation {
    #[serde(rename = "N")]
    North,
    #[serde(rename = "E")]
    East,
    #[serde(rename = "S")]
    South,
    #[serde(rename = "W")]
    West,
}

impl Orientation {
    /// Returns the orientation one step counter-clockwise (an 'L' turn).
    pub fn left(self) -> Self {
        match self {
            Orientation::North => Orientation::West,
            Orientation::West => Orientation::South,
            Orientation::South => Orientation::East,
            Orientation::East => Orientation::North,
        }
    }

    /// Returns the orientation one step clockwise (an 'R' turn).
    pub fn right(self) -> Self {
        match self {
            Orientation::North => Orientation::East,
            Orientation::East => Orientation::South,
            Orientation::South => Orientation::West,
            Orientation::West => Orientation::North,
        }
    }

    /// Returns the unit step vector `(dx, dy)` for a forward move.
    ///
    /// North increases y, east increases x.
    pub fn step(self) -> (i32, i32) {
        match self {
            Orientation::North => (0, 1),
            Orientation::East => (1, 0),
            Orientation::South => (0, -1),
            Orientation::West => (-1, 0),
        }
    }

    /// Parses an orientation token, tolerating lowercase input.
    ///
    /// Returns `None` for anything other than a single N/E/S/W letter.
    pub fn from_token(token: &str) -> Option<Self> {
        match token.to_ascii_uppercase().as_str() {
            "N" => Some(Orientation::North),
            "E" => Some(Orientation::East),
            "S" => Some(Orientation::South),
            "W" => Some(Orientation::West),
            _ => None,
        }
    }

    /// Returns the single-letter form used on the wire and in messages.
    pub fn as_char(self) -> char {
        match self {
            Orientation::North => 'N',
            Orientation::East => 'E',
            Orientation::South => 'S',
            Orientation::West => 'W',
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

// ── Grid bounds ───────────────────────────────────────────────────────────────

/// The inclusive rectangular region `[0, max_x] × [0, max_y]`.
///
/// Supplied by the caller per request and never mutated.  Both position
/// validation and movement clamping are expressed through
/// [`contains`](Self::contains).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridBounds {
    /// Largest valid x coordinate.
    pub max_x: i32,
    /// Largest valid y coordinate.
    pub max_y: i32,
}

impl GridBounds {
    /// Creates bounds for the region `[0, max_x] × [0, max_y]`.
    pub fn new(max_x: i32, max_y: i32) -> Self {
        Self { max_x, max_y }
    }

    /// Returns `true` if `(x, y)` lies within the region.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && x <= self.max_x && y >= 0 && y <= self.max_y
    }
}

// ── Position ──────────────────────────────────────────────────────────────────

/// The rover's state: grid coordinates plus orientation.
///
/// `Display` renders the canonical `"{x} {y} {orientation}"` form, e.g.
/// `"1 3 N"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
    pub orientation: Orientation,
}

impl Position {
    /// Creates a position without any bounds check — validation happens in
    /// the parser, movement clamping in [`advance`](Self::advance).
    pub fn new(x: i32, y: i32, orientation: Orientation) -> Self {
        Self { x, y, orientation }
    }

    /// Turns the rover 90° counter-clockwise in place.
    pub fn rotate_left(&mut self) {
        self.orientation = self.orientation.left();
    }

    /// Turns the rover 90° clockwise in place.
    pub fn rotate_right(&mut self) {
        self.orientation = self.orientation.right();
    }

    /// Moves one cell in the current orientation, clamped to `bounds`.
    ///
    /// A move that would leave the grid is silently dropped: the rover stays
    /// on its current cell rather than erroring.  This keeps the invariant
    /// that a position inside the bounds can never leave them.
    pub fn advance(&mut self, bounds: &GridBounds) {
        let (dx, dy) = self.orientation.step();
        let (next_x, next_y) = (self.x + dx, self.y + dy);
        if bounds.contains(next_x, next_y) {
            self.x = next_x;
            self.y = next_y;
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.x, self.y, self.orientation)
    }
}

// ── Instructions ──────────────────────────────────────────────────────────────

/// One symbol of the rover instruction alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    /// 'L': rotate 90° counter-clockwise.
    Left,
    /// 'R': rotate 90° clockwise.
    Right,
    /// 'M': move one cell forward (bounds permitting).
    Move,
}

impl TryFrom<char> for Instruction {
    type Error = ();

    /// Maps an already-uppercased character to an instruction.
    fn try_from(value: char) -> Result<Self, ()> {
        match value {
            'L' => Ok(Instruction::Left),
            'R' => Ok(Instruction::Right),
            'M' => Ok(Instruction::Move),
            _ => Err(()),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    // ── Orientation cycle ─────────────────────────────────────────────────────

    #[test]
    fn test_right_advances_the_cycle_n_e_s_w() {
        assert_eq!(Orientation::North.right(), Orientation::East);
        assert_eq!(Orientation::East.right(), Orientation::South);
        assert_eq!(Orientation::South.right(), Orientation::West);
        assert_eq!(Orientation::West.right(), Orientation::North);
    }

    #[test]
    fn test_left_reverses_the_cycle() {
        assert_eq!(Orientation::North.left(), Orientation::West);
        assert_eq!(Orientation::West.left(), Orientation::South);
        assert_eq!(Orientation::South.left(), Orientation::East);
        assert_eq!(Orientation::East.left(), Orientation::North);
    }

    #[test]
    fn test_left_then_right_is_identity_for_every_orientation() {
        for orientation in [
            Orientation::North,
            Orientation::East,
            Orientation::South,
            Orientation::West,
        ] {
            assert_eq!(orientation.left().right(), orientation);
            assert_eq!(orientation.right().left(), orientation);
        }
    }

    #[test]
    fn test_four_right_turns_are_identity() {
        for orientation in [
            Orientation::North,
            Orientation::East,
            Orientation::South,
            Orientation::West,
        ] {
            assert_eq!(orientation.right().right().right().right(), orientation);
        }
    }

    #[test]
    fn test_step_vectors_point_the_right_way() {
        assert_eq!(Orientation::North.step(), (0, 1));
        assert_eq!(Orientation::South.step(), (0, -1));
        assert_eq!(Orientation::East.step(), (1, 0));
        assert_eq!(Orientation::West.step(), (-1, 0));
    }

    #[test]
    fn test_from_token_accepts_lowercase() {
        assert_eq!(Orientation::from_token("n"), Some(Orientation::North));
        assert_eq!(Orientation::from_token("w"), Some(Orientation::West));
    }

    #[test]
    fn test_from_token_rejects_non_orientation_tokens() {
        assert_eq!(Orientation::from_token("Q"), None);
        assert_eq!(Orientation::from_token("NE"), None);
        assert_eq!(Orientation::from_token(""), None);
    }

    // ── GridBounds ────────────────────────────────────────────────────────────

    #[test]
    fn test_contains_accepts_corners_inclusively() {
        let bounds = GridBounds::new(5, 5);
        assert!(bounds.contains(0, 0));
        assert!(bounds.contains(5, 5));
        assert!(bounds.contains(0, 5));
        assert!(bounds.contains(5, 0));
    }

    #[test]
    fn test_contains_rejects_positions_past_either_limit() {
        let bounds = GridBounds::new(5, 5);
        assert!(!bounds.contains(6, 0));
        assert!(!bounds.contains(0, 6));
        assert!(!bounds.contains(-1, 0));
        assert!(!bounds.contains(0, -1));
    }

    // ── Position movement ─────────────────────────────────────────────────────

    #[test]
    fn test_advance_moves_one_cell_in_current_orientation() {
        let bounds = GridBounds::new(5, 5);
        let mut rover = Position::new(2, 2, Orientation::North);

        rover.advance(&bounds);

        assert_eq!(rover, Position::new(2, 3, Orientation::North));
    }

    #[test]
    fn test_advance_is_a_no_op_at_the_boundary() {
        let bounds = GridBounds::new(5, 5);
        let mut rover = Position::new(5, 4, Orientation::East);

        rover.advance(&bounds);

        assert_eq!(rover, Position::new(5, 4, Orientation::East), "rover must clamp at x=5");
    }

    #[test]
    fn test_advance_clamps_at_the_origin_too() {
        let bounds = GridBounds::new(5, 5);
        let mut rover = Position::new(0, 0, Orientation::South);

        rover.advance(&bounds);

        assert_eq!(rover, Position::new(0, 0, Orientation::South));
    }

    #[test]
    fn test_rotations_do_not_move_the_rover() {
        let mut rover = Position::new(3, 3, Orientation::North);

        rover.rotate_left();
        rover.rotate_right();
        rover.rotate_right();

        assert_eq!((rover.x, rover.y), (3, 3));
        assert_eq!(rover.orientation, Orientation::East);
    }

    // ── Display / wire form ───────────────────────────────────────────────────

    #[test]
    fn test_position_display_is_x_y_letter() {
        let rover = Position::new(1, 3, Orientation::North);
        assert_eq!(rover.to_string(), "1 3 N");
    }

    #[test]
    fn test_orientation_serializes_as_single_letter() {
        let json = serde_json::to_string(&Orientation::West).unwrap();
        assert_eq!(json, "\"W\"");
    }

    #[test]
    fn test_position_serde_round_trip() {
        let rover = Position::new(4, 0, Orientation::South);

        let json = serde_json::to_string(&rover).unwrap();
        let restored: Position = serde_json::from_str(&json).unwrap();

        assert_eq!(rover, restored);
        assert!(json.contains("\"orientation\":\"S\""));
    }

    // ── Error messages ────────────────────────────────────────────────────────

    #[test]
    fn test_validation_error_messages_are_client_facing() {
        assert_eq!(
            ValidationError::Format.to_string(),
            "Invalid format for starting position. Example: \"0 0 N\"."
        );
        assert_eq!(
            ValidationError::CoordinatesNotIntegers.to_string(),
            "The X and Y coordinates must be integers."
        );
        assert_eq!(
            ValidationError::OutOfBounds { max_x: 5, max_y: 7 }.to_string(),
            "Coordinates must be within the limits: X [0, 5], Y [0, 7]."
        );
        assert_eq!(
            ValidationError::Orientation.to_string(),
            "Invalid direction. Valid directions are: N, E, S, W."
        );
        assert_eq!(
            ValidationError::Instructions.to_string(),
            "Invalid instructions. Only the characters L, R and M are allowed."
        );
    }
}
