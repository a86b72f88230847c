pub mod error;
pub mod health;
pub mod orders;
mod pages;

pub use error::AppError;
