pub mod charts;
pub mod current;
pub mod forecast;
pub mod help;
pub mod overlays;
mod shared;
