use std::path::{Path, PathBuf};

use crate::adapters::gateway::azure_cli::AzureCliGateway;
use crate::adapters::operator::console::ConsoleOperator;
use crate::adapters::parsers::dotenv_source::DotenvSource;
use crate::adapters::preferences::file_store::FilePreferenceStore;
use crate::cli::output;
use crate::config::app_config::AppConfig;
use crate::core::errors::Result;
use crate::core::services::orchestrator::{RunOutcome, UploadOrchestrator};

/// Execute the `slotsync push` command: wire the concrete adapters and
/// run the whole pipeline once.
pub fn execute(prefs: Option<&Path>, config: Option<&Path>, verbose: bool) -> Result<()> {
    let config = AppConfig::load(config)?;

    let gateway = AzureCliGateway::with_path(PathBuf::from(&config.azure.cli_path));
    let operator = ConsoleOperator::new();
    let source = DotenvSource;
    let store = FilePreferenceStore::new(
        prefs
            .map(Path::to_path_buf)
            .unwrap_or_else(FilePreferenceStore::default_path),
    );

    output::header("slotsync — push configuration");
    if verbose {
        println!("  stored target file: {}", store.path().display());
    }

    let orchestrator = UploadOrchestrator::new(
        &gateway,
        &operator,
        &source,
        &store,
        &config.slot_settings.defaults,
    );

    match orchestrator.run()? {
        RunOutcome::Completed { target } => output::pushed(&target),
        RunOutcome::Cancelled { reason } => output::cancelled(&reason),
    }

    Ok(())
}
