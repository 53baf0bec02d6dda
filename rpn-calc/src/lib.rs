pub mod backend;
pub mod batch;
pub mod cli;
pub mod logging;
pub mod session;
