use serde::Serialize;

/// Reservation state of a single seat. The only transition is `Free -> Reserved`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SeatState {
    Free,
    Reserved,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Seat {
    row: i32,
    column: i32,
    state: SeatState,
}

impl Seat {
    pub(crate) fn new(row: i32, column: i32) -> Self {
        Self {
            row,
            column,
            state: SeatState::Free,
        }
    }

    pub fn row(&self) -> i32 {
        self.row
    }

    pub fn column(&self) -> i32 {
        self.column
    }

    pub fn state(&self) -> SeatState {
        self.state
    }

    pub fn is_reserved(&self) -> bool {
        self.state == SeatState::Reserved
    }

    /// Символ для схемы зала: `B` - куплено, `S` - свободно.
    pub fn symbol(&self) -> char {
        match self.state {
            SeatState::Reserved => 'B',
            SeatState::Free => 'S',
        }
    }

    /// Moves the seat to `Reserved`. Returns `false` if it already was.
    pub(crate) fn reserve(&mut self) -> bool {
        match self.state {
            SeatState::Free => {
                self.state = SeatState::Reserved;
                true
            }
            SeatState::Reserved => false,
        }
    }
}
