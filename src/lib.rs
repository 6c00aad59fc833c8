pub mod app;
pub mod client;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod mood;
pub mod normalize;
pub mod state;
pub mod ui;
pub mod view;

pub use app::router;
pub use config::{Config, Variant};
pub use state::AppState;
