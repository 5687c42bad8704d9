pub mod http;

pub use http::{HttpConfig, HttpTransport};
