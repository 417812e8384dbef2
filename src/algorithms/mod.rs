// Route construction algorithms

pub mod nearest_neighbor;

pub use self::nearest_neighbor::plan_route;
