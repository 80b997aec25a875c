pub mod backend;
pub mod provider;
