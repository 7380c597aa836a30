pub mod http;
pub mod session_service;
pub mod api_client;

pub use http::GlooTransport;
pub use session_service::SessionStore;
pub use api_client::ApiClient;
