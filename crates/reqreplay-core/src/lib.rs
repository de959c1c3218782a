pub mod config;
pub mod logging;

pub mod outline;
pub mod replay;
pub mod retry;
pub mod url_model;
