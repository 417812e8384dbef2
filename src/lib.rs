// Public modules
pub mod algorithms;
pub mod error;
pub mod geocoding;
pub mod models;
pub mod optimizer;
pub mod utils;

// Re-exports for convenience
pub use algorithms::plan_route;
pub use error::RouteError;
pub use geocoding::{Geocoder, SimulatedGeocoder};
pub use models::{Coordinate, Location, OptimizedRoute, RouteLeg};
pub use optimizer::{CancelToken, RouteOptimizer};
