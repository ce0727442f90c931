// Library exports for FitMe
// This allows testing of internal modules

pub mod api;
pub mod commands;
pub mod config;
pub mod models;
pub mod projection;
pub mod state;
pub mod ui;
