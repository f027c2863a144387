mod http;

pub use http::ModeController;
