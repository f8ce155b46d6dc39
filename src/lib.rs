pub mod bootstrap;
pub mod config;
pub mod dev_env;
pub mod environment;
pub mod error;
pub mod logging;
pub mod paths;
pub mod process;

// Re-export commonly used types
pub use bootstrap::{execute, BootstrapSummary};
pub use config::RunConfig;
pub use environment::HostOs;
pub use error::CommandError;
pub use process::{CommandRunner, Invocation, SystemRunner};
