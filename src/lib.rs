pub mod config;
pub mod controllers;
pub mod error;
pub mod models;
pub mod services;

pub use error::TheaterError;
pub use models::{Seat, SeatGrid, SeatState, Stats};
pub use services::{PricingPolicy, Theater};

// Состояние сессии оператора: настройки + один зал.
// Создаётся в main и передаётся явно, глобальных синглтонов нет.
pub struct AppState {
    pub config: crate::config::Config,
    pub theater: Theater,
}

impl AppState {
    pub fn new(config: crate::config::Config, theater: Theater) -> Self {
        Self { config, theater }
    }
}
