pub mod bucket;
pub mod exclude;
pub mod region;
