pub mod backup;
pub mod event;
pub mod period;
pub mod setting;
pub mod summary;
