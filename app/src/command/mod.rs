//! Static strategy pattern for CLI commands.
//!
//! Each command is a separate strategy with its own type and input, dispatched
//! statically from `main`.

use std::path::Path;

use casetab_config::Config;

mod extract;
mod info;
mod init;
mod version;

pub use extract::{ExtractInput, ExtractStrategy};
pub use info::InfoStrategy;
pub use init::InitStrategy;
pub use version::VersionStrategy;

/// Loads the config from `path`, or from `~/casetab/config.json` when no path
/// is given.
fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

/// Contract shared by all command strategies.
///
/// # Example
/// ```rust,ignore
/// struct MyStrategy;
///
/// impl CommandStrategy for MyStrategy {
///     type Input = MyInput;
///
///     fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
///         Ok(())
///     }
/// }
/// ```
pub trait CommandStrategy {
    /// The input type this strategy accepts.
    type Input;

    /// # Errors
    /// Returns an error if command execution fails.
    fn execute(&self, input: Self::Input) -> anyhow::Result<()>;
}
