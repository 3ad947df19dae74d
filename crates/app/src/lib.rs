//! Terminal bootstrap for the mailboard page.

pub mod command;
pub mod config;
pub mod mentions;
pub mod page;
pub mod terminal;

pub use command::{Command, CommandError};
pub use config::{AppConfig, ConfigError};
pub use page::Page;
