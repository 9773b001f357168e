//! Static resources served for every non-chat request.
//!
//! [`StaticRequestHandler`] answers requests in the server role;
//! [`ResponseHandler`] reads responses in the client role.

pub mod handler;
pub mod mime;
pub mod response;

pub use handler::{StaticFileError, StaticRequestHandler, StaticResource, StaticResponse};
pub use mime::MimeTable;
pub use response::{ResponseError, ResponseHandler};
