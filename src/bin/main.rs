use anyhow::Result;
use clap::Parser;
use indicatif::ProgressBar;
use tracing_subscriber::EnvFilter;

use taskenv::aws::{self, EcsDirectory, SsmStore};
use taskenv::prompt::{Prompter, TermPrompter};
use taskenv::resolver::ParameterResolver;
use taskenv::session;

#[derive(Parser)]
#[command(name = "taskenv")]
#[command(about = "Rebuild a .env file from an ECS task definition, resolving SSM secrets")]
struct Cli {
    /// AWS region
    #[arg(short, long, default_value = "us-east-1")]
    region: String,

    /// Maximum number of parameter lookups in flight at once
    #[arg(short, long, default_value_t = 5)]
    concurrency: usize,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_env("TASKENV_LOG")
        .unwrap_or_else(|_| EnvFilter::new("taskenv=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();

    let prompter = TermPrompter;

    // The profile answer is threaded into client construction; nothing
    // reads or writes AWS_PROFILE.
    let profile = prompter.input("Enter AWS profile name", "")?;
    let profile = profile.trim();
    let config = aws::load_config((!profile.is_empty()).then_some(profile), &cli.region).await;

    let directory = EcsDirectory::new(&config);
    let resolver = ParameterResolver::new(SsmStore::new(&config));

    let bar = ProgressBar::new(0);
    let block = session::run(
        &prompter,
        &directory,
        &resolver,
        cli.concurrency.max(1),
        |done, total| {
            bar.set_length(total as u64);
            bar.set_position(done as u64);
        },
    )
    .await?;
    bar.finish_and_clear();

    println!("{block}");
    Ok(())
}
