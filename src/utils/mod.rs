// Error handling, the success envelope and small shared helpers

pub mod error_handler;
pub mod response_handler;
pub mod utils;
