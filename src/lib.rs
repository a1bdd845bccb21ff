pub mod config;
pub mod error;
pub mod logging;
pub mod paths;
pub mod report;
pub mod scaffold;
pub mod structure;
pub mod template;

// Re-export commonly used types
pub use config::Config;
pub use error::ScaffoldError;
pub use scaffold::Scaffolder;
pub use template::Branding;
