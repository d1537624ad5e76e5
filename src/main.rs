use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod core;
mod mcp;
mod ui;

use commands::{config, search};
use crate::core::config::Config;
use crate::core::params::{
    ExperienceLevel, JobType, DEFAULT_COUNTRY, DEFAULT_INDEED_ITEMS, DEFAULT_LINKEDIN_RESULTS,
};

#[derive(Parser)]
#[command(name = "jobscrape")]
#[command(about = "LinkedIn and Indeed job search over MCP, backed by Apify actors")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run as MCP server over stdio
    #[command(name = "mcp-server")]
    McpServer,

    /// Search LinkedIn job postings
    #[command(alias = "li")]
    Linkedin {
        /// Job title to search (e.g., 'Software Engineer')
        job_title: String,

        /// Location filter (e.g., 'San Francisco, CA' or 'Remote')
        #[arg(short, long)]
        location: Option<String>,

        /// Number of results to return (1-100)
        #[arg(short = 'm', long, default_value_t = DEFAULT_LINKEDIN_RESULTS)]
        max_results: i64,

        /// Experience level, e.g. 'Entry level' or 'Mid-Senior level'
        #[arg(short, long)]
        experience_level: Option<ExperienceLevel>,

        /// Job type, e.g. 'Full-time' or 'Contract'
        #[arg(short, long)]
        job_type: Option<JobType>,

        /// Restrict to a company (repeatable)
        #[arg(short, long = "company", value_name = "NAME")]
        companies: Vec<String>,
    },

    /// Search Indeed job postings
    #[command(alias = "in")]
    Indeed {
        /// Job position to search (e.g., 'web developer')
        position: String,

        /// Country code (e.g., 'US', 'UK', 'CA')
        #[arg(short, long, default_value = DEFAULT_COUNTRY)]
        country: String,

        /// City or region filter
        #[arg(short, long)]
        location: Option<String>,

        /// Number of results to return (1-100)
        #[arg(short = 'm', long, default_value_t = DEFAULT_INDEED_ITEMS)]
        max_items: i64,

        /// Fetch detailed company info (slower)
        #[arg(long)]
        parse_company_details: bool,
    },

    /// Configure the Apify credentials
    #[command(alias = "c")]
    Config {
        /// Set Apify API key
        #[arg(long)]
        api_key: Option<String>,

        /// Set custom Apify API base URL
        #[arg(long)]
        base_url: Option<String>,

        /// Show current configuration
        #[arg(long)]
        show: bool,
    },
}

/// Logs always go to stderr; stdout belongs to MCP frames and search output.
fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::McpServer => {
            init_tracing("info");
            let server = mcp::McpServer::new(Config::load_or_default().resolve());
            server.run().await?;
        }
        Commands::Linkedin {
            job_title,
            location,
            max_results,
            experience_level,
            job_type,
            companies,
        } => {
            init_tracing("warn");
            search::run_linkedin(search::LinkedInOptions {
                job_title,
                location,
                max_results,
                experience_level,
                job_type,
                companies,
            })
            .await?;
        }
        Commands::Indeed {
            position,
            country,
            location,
            max_items,
            parse_company_details,
        } => {
            init_tracing("warn");
            search::run_indeed(search::IndeedOptions {
                position,
                country,
                location,
                max_items,
                parse_company_details,
            })
            .await?;
        }
        Commands::Config {
            api_key,
            base_url,
            show,
        } => {
            config::run(config::ConfigOptions {
                api_key,
                base_url,
                show,
            })
            .await?;
        }
    }

    Ok(())
}
