pub mod dashboard;
pub mod events;
pub mod preferences;
pub mod resolver;
pub mod state;
