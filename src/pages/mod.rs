//! One component per route.

mod auth;
mod game;
mod home;
mod not_found;
mod profile;
mod upload;

pub use auth::*;
pub use game::*;
pub use home::*;
pub use not_found::*;
pub use profile::*;
pub use upload::*;
