//! Brainrot Manager - menu-driven browser and editor for brainrot bases
//!
//! One invocation handles one navigation request:
//! - the query string is parsed into an `Action` (see `router`)
//! - the action reads the catalogue or changes the collection
//! - prompts go through a `Dialog`, results come back as a `Response`
//!
//! The binary renders the response as text or JSON.

pub mod app;
pub mod config;
pub mod dialog;
mod error;
pub mod listing;
pub mod render;
pub mod router;
pub mod view;

pub use app::{App, Response};
pub use config::{Config, ConfigError, SortOrder};
pub use dialog::{Dialog, NoticeLevel, TerminalDialog};
pub use error::{AppError, Result};
pub use render::{render, OutputFormat};
pub use router::{Action, Request, RouteError};
pub use view::{ContextItem, Directory, InfoTag, ListItem};
