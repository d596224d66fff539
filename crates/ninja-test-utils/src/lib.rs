pub mod fixtures;
pub mod mock_request;

pub use fixtures::*;
pub use mock_request::MockRequest;
