pub mod builder;
pub mod matcher;
pub mod normalize;
