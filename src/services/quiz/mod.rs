pub mod generator;
pub mod sampling;
