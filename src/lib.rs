pub mod config;
pub mod generate;
pub mod logging;
pub mod shutdown;
pub mod ui;
