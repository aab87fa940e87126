use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;

use lumi_dashboard::metrics::{BrowserFilter, ResultFilter, StatusFilter};
use lumi_dashboard::server::{DashboardServer, ServerConfig};
use lumi_dashboard::store::{seed, ResultStore};
use lumi_dashboard::generate_report;

#[derive(Parser)]
#[command(name = "lumi-dashboard")]
#[command(author = "NL Team")]
#[command(version = "0.1.0")]
#[command(about = "E2E test results dashboard with printable PDF export", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the dashboard server
    Serve {
        /// Bind address
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Server port
        #[arg(short, long, default_value = "5000")]
        port: u16,

        /// Seed N deterministic synthetic results instead of the demo suite
        #[arg(long)]
        synthetic: Option<usize>,

        /// Seed for the synthetic generator
        #[arg(long, default_value = "1")]
        seed: u64,
    },

    /// Generate a report from the seeded demo data
    Report {
        /// Output format (html, pdf)
        #[arg(short, long, default_value = "html")]
        format: String,

        /// Output file path (prints HTML to stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Case-insensitive search over title and description
        #[arg(long, default_value = "")]
        search: String,

        /// Status filter (all, passed, failed, skipped)
        #[arg(long, default_value = "all")]
        status: String,

        /// Browser filter (all, or a browser label)
        #[arg(long, default_value = "all")]
        browser: String,

        /// Seed N deterministic synthetic results instead of the demo suite
        #[arg(long)]
        synthetic: Option<usize>,

        /// Seed for the synthetic generator
        #[arg(long, default_value = "1")]
        seed: u64,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve {
            host,
            port,
            synthetic,
            seed,
        } => {
            println!(
                "{} Starting dashboard on {}:{}",
                "▶".green().bold(),
                host.cyan(),
                port.to_string().cyan()
            );
            if let Some(count) = synthetic {
                println!(
                    "  Synthetic data: {} results (seed {})",
                    count.to_string().yellow(),
                    seed.to_string().yellow()
                );
            }

            let server = DashboardServer::new(ServerConfig {
                host,
                port,
                synthetic,
                seed,
            });
            server.start().await?;
        }

        Commands::Report {
            format,
            output,
            search,
            status,
            browser,
            synthetic,
            seed: generator_seed,
        } => {
            println!(
                "{} Generating {} report...",
                "📊".to_string().blue(),
                format.cyan()
            );

            let store = ResultStore::new();
            match synthetic {
                Some(count) => seed::seed_synthetic(&store, generator_seed, count),
                None => seed::seed_sample_data(&store),
            }

            let filter = ResultFilter {
                search,
                status: StatusFilter::parse(&status).map_err(|e| anyhow::anyhow!(e))?,
                browser: BrowserFilter::parse(&browser),
            };

            generate_report(&store, &filter, &format, output.as_deref()).await?;
        }
    }

    Ok(())
}
