pub mod classification;
pub mod config;
pub mod models;
pub mod openapi;
pub mod reporter;
pub mod routes;
