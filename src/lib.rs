pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod policy;
pub mod proto;
pub mod scanner;
pub mod services;

pub use config::Config;
pub use error::{AppError, AppResult};
