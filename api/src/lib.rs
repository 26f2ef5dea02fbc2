pub mod clock;
pub mod config;
pub mod dto;
pub mod errors;
pub mod logging;
pub mod routes;
pub mod server;
pub mod service;
pub mod states;

pub use states::AppState;
