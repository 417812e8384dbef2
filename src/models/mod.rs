// Models module - exports all model types

mod coordinate;
mod location;
mod route;

// Re-export model types
pub use self::coordinate::Coordinate;
pub use self::location::Location;
pub use self::route::{OptimizedRoute, RouteLeg};

// Common type aliases for improved code readability
pub type Degrees = f64;
pub type Kilometers = f64;
