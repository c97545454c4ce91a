use anyhow::Result;
use bigramprob::{report, BigramProbabilityModel, TEST_SENTENCE};
use clap::Parser;
use std::path::PathBuf;

const DEFAULT_DATA_PATH: &str = "../Part A Dataset/Data_3.txt";

/// Bigram probability of the exercise test sentence, with and without
/// Laplace smoothing.
#[derive(Parser, Debug)]
#[command(name = "bigramprob")]
struct Cli {
    /// Exercise file holding the training corpus
    #[arg(default_value = DEFAULT_DATA_PATH)]
    data: PathBuf,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("bigramprob=info".parse()?),
        )
        .init();

    let cli = Cli::parse();
    let model = BigramProbabilityModel::from_file(&cli.data).await?;

    let stdout = std::io::stdout();
    report::write_report(&mut stdout.lock(), &model, TEST_SENTENCE)?;
    Ok(())
}
