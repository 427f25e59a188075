pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod routine;
pub mod scorer;
pub mod session;
// cmd and reports are binary modules (see main.rs).
