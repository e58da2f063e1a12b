use casetab_config::Config;

/// Strategy for initializing the configuration.
///
/// Writes the default configuration to `~/casetab/config.json` and refuses to
/// overwrite an existing file.
#[derive(Debug, Clone, Copy)]
pub struct InitStrategy;

impl super::CommandStrategy for InitStrategy {
    type Input = ();

    fn execute(&self, _input: Self::Input) -> anyhow::Result<()> {
        Config::create_config().map(drop)
    }
}
