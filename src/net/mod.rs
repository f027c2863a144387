pub(crate) mod http_server;

pub(crate) use http_server::{HttpHandler, HttpServer};
