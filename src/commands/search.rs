use anyhow::Result;

use crate::core::actor_client::ActorClient;
use crate::core::config::Config;
use crate::core::params::{clamp_limit, ExperienceLevel, IndeedSearch, JobType, LinkedInSearch};
use crate::mcp::protocol::ToolCallResult;
use crate::mcp::tools;
use crate::ui::job_display::print_jobs;
use crate::ui::progress::ActorSpinner;

pub struct LinkedInOptions {
    pub job_title: String,
    pub location: Option<String>,
    pub max_results: i64,
    pub experience_level: Option<ExperienceLevel>,
    pub job_type: Option<JobType>,
    pub companies: Vec<String>,
}

pub struct IndeedOptions {
    pub position: String,
    pub country: String,
    pub location: Option<String>,
    pub max_items: i64,
    pub parse_company_details: bool,
}

pub async fn run_linkedin(options: LinkedInOptions) -> Result<()> {
    let config = Config::load_or_default().resolve();
    let client = ActorClient::from_config(&config);

    let search = LinkedInSearch {
        location: options.location,
        max_results: clamp_limit(options.max_results),
        experience_level: options.experience_level,
        job_type: options.job_type,
        company_name: if options.companies.is_empty() {
            None
        } else {
            Some(options.companies)
        },
        ..LinkedInSearch::new(options.job_title)
    };

    let spinner = ActorSpinner::start(&format!("Searching LinkedIn for \"{}\"", search.job_title));
    let result = tools::search_linkedin(&config, &client, &search).await;
    report(spinner, result)
}

pub async fn run_indeed(options: IndeedOptions) -> Result<()> {
    let config = Config::load_or_default().resolve();
    let client = ActorClient::from_config(&config);

    let search = IndeedSearch {
        country: options.country,
        location: options.location,
        max_items: clamp_limit(options.max_items),
        parse_company_details: options.parse_company_details,
        ..IndeedSearch::new(options.position)
    };

    let spinner = ActorSpinner::start(&format!(
        "Searching Indeed ({}) for \"{}\"",
        search.country, search.position
    ));
    let result = tools::search_indeed(&config, &client, &search).await;
    report(spinner, result)
}

fn report(spinner: ActorSpinner, result: ToolCallResult) -> Result<()> {
    if result.is_error() {
        spinner.fail("Search failed");
        anyhow::bail!("{}", result.text());
    }

    spinner.finish("Search complete");
    println!();
    print_jobs(result.text());
    Ok(())
}
