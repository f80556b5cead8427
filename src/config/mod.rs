mod languages;
mod manager;
mod session;

pub use languages::{DEFAULT_LANGUAGES, LanguageTable};
pub use manager::{ConfigError, ConfigFile, ConfigManager, Credentials};
pub use session::{LoadStatus, Session};
