use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("File not found or could not be read: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse network JSON: {0}")]
    DeserializationError(#[from] serde_json::Error),

    #[error("Network definition is inconsistent: {0}")]
    InvalidNetwork(String),

    #[error("No route exists from '{origin}' to '{destination}'")]
    RouteNotFound { origin: String, destination: String },

    #[error("Flight '{0}' is fully booked")]
    FlightFull(String),

    #[error("Flight '{0}' is already registered")]
    DuplicateFlight(String),
}

pub type Result<T> = std::result::Result<T, Error>;
