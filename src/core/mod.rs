pub mod coordinates;
pub mod lifecycle;
