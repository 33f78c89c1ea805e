mod connection;
mod messages;

pub use connection::HttpConnection;
pub use connection::MockHttpConnection;
pub use connection::ReqwestConnection;
pub use messages::header;
pub use messages::HeaderMap;
pub use messages::HttpError;
pub use messages::HttpRequest;
pub use messages::HttpResponse;
pub use messages::HttpResult;
pub use messages::Method;
pub use messages::StatusCode;
