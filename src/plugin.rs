mod catalog;
mod command;
mod metadata;

pub use catalog::PluginCatalog;
pub use command::CommandName;
pub use metadata::{parse_metadata, PluginMetadata};
