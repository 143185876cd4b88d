mod geometry;

pub use geometry::build_config;
