pub mod latest_handler;
pub mod post_handler;
pub mod routes;
pub mod session_handler;
