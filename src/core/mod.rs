pub mod error;
pub mod logging;
pub mod settings;

pub use error::{Result, SettingsError};
pub use logging::LogSettings;
pub use settings::ChunkingSettings;
