use serde::{Deserialize, Serialize};

/// Life state of a single grid position, one byte per cell.
#[repr(u8)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Dead = 0,
    Alive = 1,
}

impl Cell {
    #[inline(always)]
    pub fn is_alive(self) -> bool {
        self == Cell::Alive
    }

    #[inline(always)]
    pub fn toggled(self) -> Self {
        match self {
            Cell::Dead => Cell::Alive,
            Cell::Alive => Cell::Dead,
        }
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        if alive {
            Cell::Alive
        } else {
            Cell::Dead
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_repr() {
        assert_eq!(Cell::Dead as u8, 0);
        assert_eq!(Cell::Alive as u8, 1);
        assert_eq!(Cell::default(), Cell::Dead);
    }

    #[test]
    fn test_toggle() {
        assert_eq!(Cell::Dead.toggled(), Cell::Alive);
        assert_eq!(Cell::Alive.toggled(), Cell::Dead);
        assert!(Cell::from(true).is_alive());
    }
}
