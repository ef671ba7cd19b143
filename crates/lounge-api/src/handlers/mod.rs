//! Route handlers
//!
//! All HTTP request handlers organized by domain.

pub mod auth;
pub mod bookings;
pub mod faq;
pub mod game;
pub mod health;
pub mod jobs;
pub mod ratings;
pub mod requests;
pub mod users;
