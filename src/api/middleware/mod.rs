pub mod request_context;

pub use request_context::{request_context_middleware, RequestContext, REQUEST_ID_HEADER};
