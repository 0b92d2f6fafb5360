//! Marketscan CLI
//!
//! Runs the market discovery pipeline stage by stage or end to end, checks
//! generated reports and manages the config file.

#![forbid(unsafe_code)]

mod cli;
mod commands;
mod config;
mod config_handlers;

use anyhow::Result;
use clap::Parser;
use marketscan_pipeline::StageContext;
use tracing_subscriber::EnvFilter;

use cli::{Args, Command};
use config::{ConfigSource, MarketscanConfig};

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let stage = args.command.stage();
    let source = ConfigSource::resolve(args.config.as_deref());

    if let Err(e) = dispatch(&source, args.command) {
        if e.is_missing_input()
            && let Some(previous) = stage.and_then(|s| s.previous())
        {
            eprintln!("hint: run `marketscan {previous}` first");
        }
        tracing::error!(error = %e, "Command failed");
        return Err(e.into());
    }
    Ok(())
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with_writer(std::io::stderr)
        .init();
}

fn dispatch(source: &ConfigSource, command: Command) -> marketscan_core::Result<()> {
    match command {
        Command::Config { action } => config_handlers::handle_config_command(source, action),
        Command::Verify { report } => commands::cmd_verify(&report),
        command => {
            let config = MarketscanConfig::load(source)?;
            let ctx = StageContext::new(config.store(), config.pipeline);
            tracing::debug!(run_id = %ctx.run_id(), config = ?source.path(), "Resolved configuration");
            run_pipeline_command(&ctx, command)
        }
    }
}

fn run_pipeline_command(ctx: &StageContext, command: Command) -> marketscan_core::Result<()> {
    match command {
        Command::Collect => commands::cmd_collect(ctx),
        Command::ImportReddit { file } => commands::cmd_import_reddit(ctx, &file),
        Command::Analyze => commands::cmd_analyze(ctx),
        Command::Synthesize => commands::cmd_synthesize(ctx),
        Command::Validate => commands::cmd_validate(ctx),
        Command::Report => commands::cmd_report(ctx),
        Command::Run => commands::cmd_run(ctx),
        Command::Verify { .. } | Command::Config { .. } => Ok(()),
    }
}
