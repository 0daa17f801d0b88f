pub mod app;
pub mod deserializers;
pub mod error;
pub mod routes;

pub use app::{app, run_server, AppState};
pub use error::{ApiError, ApiResponse};
