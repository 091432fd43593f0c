pub mod app;
pub mod cli;
pub mod config;
pub mod input;
pub mod logging;
pub mod playback;
pub mod reading;
pub mod rendering;
pub mod speech;
pub mod sync;
pub mod ui;
