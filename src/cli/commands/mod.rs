pub mod add;
pub mod backup;
pub mod config;
pub mod db;
pub mod delete;
pub mod init;
pub mod list;
pub mod log;
pub mod off;
pub mod restore;
pub mod setting;
pub mod setup;
pub mod summary;
