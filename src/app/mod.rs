pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod services;
mod context;

pub use context::AppContext;
