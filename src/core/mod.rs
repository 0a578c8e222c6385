pub mod add;
pub mod backup;
pub mod calculator;
pub mod config;
pub mod del;
pub mod log;
pub mod logic;
pub mod settings;
pub mod setup;
