pub mod digest;
pub mod weather;
