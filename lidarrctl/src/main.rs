#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod args;

use args::{Args, Command};
use clap::Parser;
use lidarr_client::LidarrClient;
use lidarr_config::Config;
use lidarr_provider::apply;
use lidarr_provider::diag::{self, Diagnostics, Severity};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    init_tracing();

    let config = Config::load(&args.config)?;

    tracing::info!(
        config_path = %args.config.display(),
        url = %config.connection.url,
        "starting lidarrctl"
    );

    let client = LidarrClient::new(config.connection.url.as_str(), config.connection.api_key.clone())?;

    let mut diags = Diagnostics::new();

    match args.command {
        Command::Check => check(&client).await?,
        Command::Plan => run_plan(&client, &config, &mut diags).await,
        Command::Apply => run_apply(&client, &config, &mut diags).await,
    }

    render_diagnostics(&diags);
    if diags.has_errors() {
        std::process::exit(1);
    }

    Ok(())
}

/// Ping the server and confirm it is actually a Lidarr
async fn check(client: &LidarrClient) -> anyhow::Result<()> {
    let status = client
        .system_status()
        .await
        .map_err(|err| anyhow::anyhow!(diag::client_error_detail("read", "system status", &err)))?;

    if status.app_name != "Lidarr" {
        anyhow::bail!("server reports application '{}', expected Lidarr", status.app_name);
    }

    println!("connected to {} {}", status.app_name, status.version);
    Ok(())
}

async fn run_plan(client: &LidarrClient, config: &Config, diags: &mut Diagnostics) {
    let Some(state) = apply::fetch_state(client, diags).await else {
        return;
    };

    let desired = apply::DesiredState::from(&config.resources);
    let plan = apply::plan(&desired, &state);
    print_plan(&plan);
}

async fn run_apply(client: &LidarrClient, config: &Config, diags: &mut Diagnostics) {
    let Some(state) = apply::fetch_state(client, diags).await else {
        return;
    };

    let desired = apply::DesiredState::from(&config.resources);
    let plan = apply::plan(&desired, &state);

    if plan.is_empty() {
        println!("no changes, server matches the declared state");
        return;
    }

    let summary = apply::execute(client, &plan, diags).await;
    println!(
        "apply complete: {} created, {} removed, {} failed",
        summary.created, summary.removed, summary.failed
    );
}

fn print_plan(plan: &apply::Plan) {
    if plan.is_empty() {
        println!("no changes, server matches the declared state");
        return;
    }

    for label in &plan.create_tags {
        println!("+ tag '{label}'");
    }
    for tag in &plan.remove_tags {
        println!("- tag '{}' (id {})", tag.label, tag.id);
    }
    for path in &plan.create_root_folders {
        println!("+ root folder '{path}'");
    }

    println!("{} operation(s) planned", plan.operation_count());
}

/// Print accumulated diagnostics to stderr, errors and warnings alike
fn render_diagnostics(diags: &Diagnostics) {
    for d in diags {
        match d.severity {
            Severity::Error => eprintln!("Error: {}\n\n{}\n", d.summary, d.detail),
            Severity::Warning => eprintln!("Warning: {}\n\n{}\n", d.summary, d.detail),
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();
}
