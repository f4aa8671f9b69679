//! HTTP Handlers

mod book;
mod ping;
mod user;

pub use book::*;
pub use ping::*;
pub use user::*;
