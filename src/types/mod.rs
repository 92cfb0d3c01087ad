pub mod coordinates;
pub mod data_source;
pub mod date_range;
pub mod frames;
pub mod payload;
