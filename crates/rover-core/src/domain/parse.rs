//! Parsing and validation of raw request fields.
//!
//! Both entry points are pure functions of their inputs and short-circuit on
//! the first failing check.  Validation order for positions is fixed by the
//! contract: token count, then integer parsing, then bounds, then
//! orientation.
//!
//! Normalization treats any run of whitespace and/or commas as one
//! separator, so `"1, 2, N"`, `" 1  2  N "` and `"1 2 N"` are equivalent.

use crate::domain::rover::{GridBounds, Instruction, Orientation, Position, ValidationError};

/// Separator predicate shared by both parsers.
fn is_separator(c: char) -> bool {
    c.is_whitespace() || c == ','
}

/// Parses and validates a starting position string against `bounds`.
///
/// The expected shape is three separator-delimited tokens: `"X Y ORIENTATION"`.
/// Coordinate tokens are parsed strictly — trailing garbage such as `"4abc"`
/// is a failure, not a 4.  A leading `+`/`-` sign is accepted (signed
/// coordinates parse fine; they are then rejected by the bounds check).
///
/// # Errors
///
/// In precedence order:
///
/// - [`ValidationError::Format`] — token count is not exactly 3.
/// - [`ValidationError::CoordinatesNotIntegers`] — X or Y does not parse.
/// - [`ValidationError::OutOfBounds`] — X or Y falls outside `bounds`.
/// - [`ValidationError::Orientation`] — third token is not N/E/S/W.
///
/// # Examples
///
/// ```rust
/// use rover_core::{parse_position, GridBounds, Orientation};
///
/// let bounds = GridBounds::new(5, 5);
/// let position = parse_position("1, 2, n", &bounds).unwrap();
/// assert_eq!((position.x, position.y), (1, 2));
/// assert_eq!(position.orientation, Orientation::North);
/// ```
pub fn parse_position(raw: &str, bounds: &GridBounds) -> Result<Position, ValidationError> {
    // Splitting on the separator predicate and dropping empty tokens
    // collapses separator runs and trims both ends in one pass.
    let tokens: Vec<&str> = raw.split(is_separator).filter(|t| !t.is_empty()).collect();

    if tokens.len() != 3 {
        return Err(ValidationError::Format);
    }

    let x: i32 = tokens[0]
        .parse()
        .map_err(|_| ValidationError::CoordinatesNotIntegers)?;
    let y: i32 = tokens[1]
        .parse()
        .map_err(|_| ValidationError::CoordinatesNotIntegers)?;

    if !bounds.contains(x, y) {
        return Err(ValidationError::OutOfBounds {
            max_x: bounds.max_x,
            max_y: bounds.max_y,
        });
    }

    let orientation = Orientation::from_token(tokens[2]).ok_or(ValidationError::Orientation)?;

    Ok(Position::new(x, y, orientation))
}

/// Validates an instruction string and compiles it to [`Instruction`]s.
///
/// Whitespace and commas are stripped and letters are uppercased before
/// checking, so `"  l r m "` compiles to the same program as `"LRM"`.
///
/// # Errors
///
/// Returns [`ValidationError::Instructions`] when the cleaned string is
/// empty or contains any character outside {L, R, M}.  The empty case is
/// deliberately the same error as a foreign character — an instruction-less
/// request is treated as malformed, not as a valid no-op.
pub fn parse_instructions(raw: &str) -> Result<Vec<Instruction>, ValidationError> {
    let mut program = Vec::with_capacity(raw.len());

    for c in raw.chars().filter(|c| !is_separator(*c)) {
        let instruction = Instruction::try_from(c.to_ascii_uppercase())
            .map_err(|_| ValidationError::Instructions)?;
        program.push(instruction);
    }

    if program.is_empty() {
        return Err(ValidationError::Instructions);
    }

    Ok(program)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
