//! Line-oriented text front end for jiang.

pub mod command;
pub mod error;
pub mod session;

pub use command::{Command, SessionOption, parse_command};
pub use error::PlayError;
pub use session::{Flow, Session, SessionConfig};
