pub mod config;
pub mod logging;

pub mod control;
pub mod error;
pub mod grab;
pub mod media;
pub mod resolve;
pub mod transfer;
pub mod validate;
