pub mod dto;
pub mod errors;
pub mod extract;
pub mod models;
pub mod routes;
pub mod service;
pub mod states;
pub mod store;

pub use routes::app;
pub use states::AppState;
