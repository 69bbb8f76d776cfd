use sweeper_core::{Coord, Coord2};
use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum CoordError {
    #[error("Invalid input format.")]
    TooShort,
    #[error("Row out of bounds.")]
    RowOutOfBounds,
    #[error("Column must be a number.")]
    ColumnNotNumeric,
    #[error("Column out of bounds.")]
    ColumnOutOfBounds,
}

/// Parses a typed square such as `A1` or `c3` into `(row, col)` on a `size`x`size` board.
///
/// The row is a case-insensitive letter, the column a 1-based number directly after it.
pub fn parse_coordinate(input: &str, size: Coord) -> Result<Coord2, CoordError> {
    use CoordError::*;

    let input = input.trim().to_uppercase();
    let mut chars = input.chars();
    let Some(row_label) = chars.next() else {
        return Err(TooShort);
    };
    let column = chars.as_str();
    if column.is_empty() {
        return Err(TooShort);
    }

    let row = u32::from(row_label)
        .checked_sub(u32::from('A'))
        .and_then(|row| Coord::try_from(row).ok())
        .filter(|&row| row < size)
        .ok_or(RowOutOfBounds)?;

    let col: i64 = column.parse().map_err(|_| ColumnNotNumeric)?;
    let col = col
        .checked_sub(1)
        .and_then(|col| Coord::try_from(col).ok())
        .filter(|&col| col < size)
        .ok_or(ColumnOutOfBounds)?;

    Ok((row, col))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_upper_case() {
        assert_eq!(parse_coordinate("B2", 5), Ok((1, 1)));
        assert_eq!(parse_coordinate("A1", 5), Ok((0, 0)));
    }

    #[test]
    fn parses_lower_case_and_surrounding_space() {
        assert_eq!(parse_coordinate("c3", 5), Ok((2, 2)));
        assert_eq!(parse_coordinate("  e5\n", 5), Ok((4, 4)));
    }

    #[test]
    fn parses_multi_digit_column() {
        assert_eq!(parse_coordinate("A10", 10), Ok((0, 9)));
    }

    #[test]
    fn rejects_short_input() {
        assert_eq!(parse_coordinate("A", 5), Err(CoordError::TooShort));
        assert_eq!(parse_coordinate("", 5), Err(CoordError::TooShort));
        assert_eq!(parse_coordinate("   ", 5), Err(CoordError::TooShort));
        assert_eq!(
            CoordError::TooShort.to_string(),
            "Invalid input format."
        );
    }

    #[test]
    fn rejects_row_outside_board() {
        assert_eq!(parse_coordinate("Z1", 5), Err(CoordError::RowOutOfBounds));
        assert_eq!(parse_coordinate("F1", 5), Err(CoordError::RowOutOfBounds));
        assert_eq!(parse_coordinate("11", 5), Err(CoordError::RowOutOfBounds));
    }

    #[test]
    fn rejects_non_numeric_column() {
        assert_eq!(parse_coordinate("AB", 5), Err(CoordError::ColumnNotNumeric));
        assert_eq!(parse_coordinate("A 1", 5), Err(CoordError::ColumnNotNumeric));
    }

    #[test]
    fn rejects_column_outside_board() {
        assert_eq!(parse_coordinate("A10", 5), Err(CoordError::ColumnOutOfBounds));
        assert_eq!(parse_coordinate("A0", 5), Err(CoordError::ColumnOutOfBounds));
        assert_eq!(parse_coordinate("A-1", 5), Err(CoordError::ColumnOutOfBounds));
        assert_eq!(
            CoordError::ColumnOutOfBounds.to_string(),
            "Column out of bounds."
        );
    }
}
