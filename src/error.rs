// Error types surfaced by geocoding and route optimization

use thiserror::Error;

/// Failures a route optimization request can end in
///
/// Every variant is terminal for the request that produced it; no partial
/// route is ever returned alongside an error.
#[derive(Error, Debug)]
pub enum RouteError {
    /// A location name was empty after trimming whitespace
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Fewer than two usable destination names were supplied
    #[error("at least 2 destinations are required, found {found}")]
    InsufficientDestinations { found: usize },

    /// The geocoding collaborator could not resolve a name
    #[error("geocoding failed for \"{name}\": {message}")]
    Geocoding { name: String, message: String },

    /// Cancellation was requested before the route was finished
    #[error("route optimization cancelled")]
    Cancelled,
}
