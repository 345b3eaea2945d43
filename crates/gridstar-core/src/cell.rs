//! The [`CellState`] type — whether a grid cell can be entered.

/// Occupancy of a single grid cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    #[default]
    Passable,
    Blocked,
}

impl CellState {
    /// Whether the cell can be entered.
    #[inline]
    pub const fn is_passable(self) -> bool {
        matches!(self, CellState::Passable)
    }

    /// Parse a single character of the text grid format.
    ///
    /// `.` and `1` are passable, `#` and `0` are blocked.
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            '.' | '1' => Some(CellState::Passable),
            '#' | '0' => Some(CellState::Blocked),
            _ => None,
        }
    }

    /// Character used when printing a grid.
    #[inline]
    pub const fn to_char(self) -> char {
        match self {
            CellState::Passable => '.',
            CellState::Blocked => '#',
        }
    }
}

/// Integer literal form: `1` is passable, anything else is blocked.
impl From<i32> for CellState {
    fn from(v: i32) -> Self {
        if v == 1 {
            CellState::Passable
        } else {
            CellState::Blocked
        }
    }
}

impl From<CellState> for i32 {
    fn from(c: CellState) -> Self {
        match c {
            CellState::Passable => 1,
            CellState::Blocked => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_literals() {
        assert_eq!(CellState::from(1), CellState::Passable);
        assert_eq!(CellState::from(0), CellState::Blocked);
        assert_eq!(CellState::from(7), CellState::Blocked);
        assert_eq!(i32::from(CellState::Passable), 1);
    }

    #[test]
    fn chars() {
        assert_eq!(CellState::from_char('.'), Some(CellState::Passable));
        assert_eq!(CellState::from_char('0'), Some(CellState::Blocked));
        assert_eq!(CellState::from_char('x'), None);
        assert_eq!(CellState::Blocked.to_char(), '#');
    }
}
