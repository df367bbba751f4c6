pub mod api;
pub mod args;
pub mod config;
pub mod generation;
pub mod logging;
pub mod mvi;
pub mod player;
pub mod ui;
