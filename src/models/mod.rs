pub mod grid;
pub mod seat;
pub mod stats;

pub use grid::SeatGrid;
pub use seat::{Seat, SeatState};
pub use stats::Stats;
