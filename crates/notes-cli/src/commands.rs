use anyhow::Context;
use colored::Colorize;
use notes_server::{NotesServer, ServerConfig};

use crate::cli::*;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Serve(args) => cmd_serve(args),
        Command::Config(args) => cmd_config(args, &cli.format),
    }
}

/// Config file (or defaults) with command-line overrides applied.
fn resolve_config(settings: &SettingsArgs) -> anyhow::Result<ServerConfig> {
    let mut config = match &settings.config {
        Some(path) => ServerConfig::load(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => ServerConfig::default(),
    };
    if let Some(bind) = settings.bind {
        config.bind_addr = bind;
    }
    if let Some(root) = &settings.root {
        config.notes_root = root.clone();
    }
    config.validate()?;
    Ok(config)
}

fn cmd_serve(args: ServeArgs) -> anyhow::Result<()> {
    let config = resolve_config(&args.settings)?;
    println!(
        "{} Notes server on {} (notes at {})",
        "✓".green().bold(),
        config.bind_addr.to_string().bold(),
        config.notes_root.yellow()
    );
    let runtime = tokio::runtime::Runtime::new().context("failed to start async runtime")?;
    runtime.block_on(NotesServer::new(config).serve())?;
    Ok(())
}

fn cmd_config(args: ConfigArgs, format: &OutputFormat) -> anyhow::Result<()> {
    let config = resolve_config(&args.settings)?;
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&config)?),
        OutputFormat::Text => {
            let source = args
                .settings
                .config
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "defaults".into());
            println!("{} {}", "# effective configuration from".dimmed(), source.cyan());
            print!("{}", config.to_toml_string()?);
        }
    }
    Ok(())
}
