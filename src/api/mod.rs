//! API handlers for Bookshelf REST endpoints

pub mod books;
pub mod customers;
pub mod health;
pub mod openapi;
