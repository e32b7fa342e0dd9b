mod api_models;
pub mod error;
mod extractors;
mod fetcher;
mod handlers;
mod router;
mod state;

pub use api_models::{FlightRecord, RegionFlightRecord};
pub use router::router;
pub use state::AppState;
