pub mod add;
pub mod auth;
pub mod config;
pub mod del;
pub mod edit;
pub mod init;
pub mod insights;
pub mod list;
pub mod stats;
