pub mod cli;
pub mod configuration;
pub mod export;
pub mod logging;
