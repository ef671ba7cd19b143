//! Entity to model mappers
//!
//! Conversions between domain entities (lounge-core) and database models.
//! `From<Model> for Entity` converts database rows into domain objects;
//! inserts bind entity fields directly in the repositories.

mod booking;
mod dj_rating;
mod faq;
mod prompt;
mod song_request;
mod user;
mod vote;
