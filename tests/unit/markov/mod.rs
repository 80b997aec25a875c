pub mod config;
pub mod steady_state;
