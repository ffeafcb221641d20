pub mod conf;
pub mod input;
pub mod render;
pub mod session;
pub mod state;
pub mod view;
pub mod wallet;
