pub mod backup;
pub mod clock;
pub mod config;
pub mod elapsed;
pub mod export;
pub mod log;
pub mod store;
pub mod ticker;
