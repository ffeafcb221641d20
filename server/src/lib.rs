pub mod app;
pub mod conf;
