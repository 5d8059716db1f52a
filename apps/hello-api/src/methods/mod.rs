pub mod fallback;
pub mod health_check;
pub mod hello;
pub mod routes;
