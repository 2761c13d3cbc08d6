// Success envelope shared by every handler

#[allow(clippy::module_inception)]
pub mod response_handler;

pub use response_handler::{response_wrapper, HandlerResponse, ResponseFormat};
