pub mod config;
pub mod creature;
pub mod error;
pub mod food;
pub mod health;
pub mod input;
pub mod vector;
pub mod world;
