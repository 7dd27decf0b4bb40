//! Data structures

mod auth;
mod environment;
mod input;
mod policy;
mod request;

pub use auth::*;
pub use environment::*;
pub use input::*;
pub use policy::*;
pub use request::*;
