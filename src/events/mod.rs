pub mod date;
pub mod model;
pub mod normalizer;
