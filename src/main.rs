use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use release_check::{ProxyNodeResolver, SourceConfig, UpdateChecker};

#[derive(Parser)]
#[command(name = "release-check")]
#[command(version, about = "Check GitHub releases for application updates")]
struct Cli {
    /// GitHub repository in owner/name form
    #[arg(long)]
    repo: Option<String>,

    /// Mirror site serving the package manifest and the forwarding function
    #[arg(long)]
    site: Option<String>,

    /// Version to compare against instead of this binary's own version
    #[arg(long)]
    current: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Print the currently ranked GitHub mirror endpoints
    Nodes,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(run(cli))
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    if let Some(Command::Nodes) = cli.command {
        for node in ProxyNodeResolver::new().get_proxy_nodes().await {
            println!("{node}");
        }
        return Ok(());
    }

    let repo = cli.repo.context("--repo is required")?;
    let mut config = SourceConfig::new(&repo);
    if let Some(site) = &cli.site {
        config = config.with_site_base(site);
    }

    let checker = UpdateChecker::new(&config);
    match checker.check_update(cli.current.as_deref()).await {
        Some(result) => println!("{}", serde_json::to_string_pretty(&result)?),
        None => println!("{}", serde_json::json!({ "hasUpdate": false })),
    }

    Ok(())
}
