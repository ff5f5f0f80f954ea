use anyhow::Context;
use eulerbrick::interactive::Session;
use eulerbrick::logging::init_tracing;
use eulerbrick::{AppConfig, CheckerApp};

fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env().context("Failed to read configuration")?;
    init_tracing(config.log_format);

    Session::run(CheckerApp::new(config))
}
