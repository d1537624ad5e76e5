//! Job search tools: schemas and handlers
//!
//! Handlers never fail past this boundary. Missing credentials, upstream
//! failures and malformed datasets all come back as tool text.

use serde_json::{json, Value};
use tracing::{info, warn};

use crate::core::actor_client::{ActorRunner, INDEED_ACTOR, LINKEDIN_ACTOR};
use crate::core::config::ServiceConfig;
use crate::core::error::ScrapeError;
use crate::core::format::{format_indeed_jobs, format_linkedin_jobs};
use crate::core::jobs::{parse_jobs, IndeedJob, LinkedInJob};
use crate::core::params::{ExperienceLevel, IndeedSearch, JobType, LinkedInSearch};

use super::protocol::{ToolCallResult, ToolDefinition};

pub const LINKEDIN_TOOL: &str = "scrape_linkedin_jobs";
pub const INDEED_TOOL: &str = "scrape_indeed_jobs";

pub fn definitions() -> Vec<ToolDefinition> {
    let experience_levels: Vec<&str> = ExperienceLevel::ALL.iter().map(|l| l.as_str()).collect();
    let job_types: Vec<&str> = JobType::ALL.iter().map(|t| t.as_str()).collect();

    vec![
        ToolDefinition {
            name: LINKEDIN_TOOL.to_string(),
            description: "Search LinkedIn job postings by title, location, experience level, job type and company.".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "jobTitle": {
                        "type": "string",
                        "description": "Job title to search (e.g., 'Software Engineer')"
                    },
                    "location": {
                        "type": "string",
                        "description": "Location filter (e.g., 'San Francisco, CA' or 'Remote')"
                    },
                    "maxResults": {
                        "type": "number",
                        "minimum": 1,
                        "maximum": 100,
                        "default": 10,
                        "description": "Number of results to return"
                    },
                    "experienceLevel": {
                        "type": "string",
                        "enum": experience_levels,
                        "description": "Filter by experience level"
                    },
                    "jobType": {
                        "type": "string",
                        "enum": job_types,
                        "description": "Filter by job type"
                    },
                    "companyName": {
                        "type": "array",
                        "items": { "type": "string" },
                        "description": "Filter by specific companies"
                    }
                },
                "required": ["jobTitle"]
            }),
        },
        ToolDefinition {
            name: INDEED_TOOL.to_string(),
            description: "Search Indeed job postings by position, country and location.".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "position": {
                        "type": "string",
                        "description": "Job position to search (e.g., 'web developer')"
                    },
                    "country": {
                        "type": "string",
                        "default": "US",
                        "description": "Country code (e.g., 'US', 'UK', 'CA')"
                    },
                    "location": {
                        "type": "string",
                        "description": "City or region filter"
                    },
                    "maxItems": {
                        "type": "number",
                        "minimum": 1,
                        "maximum": 100,
                        "default": 50,
                        "description": "Number of results to return"
                    },
                    "parseCompanyDetails": {
                        "type": "boolean",
                        "default": false,
                        "description": "Fetch detailed company info (slower)"
                    }
                },
                "required": ["position"]
            }),
        },
    ]
}

/// Validate arguments and run the named tool.
pub async fn call_tool(
    name: &str,
    args: Option<&Value>,
    config: &ServiceConfig,
    runner: &dyn ActorRunner,
) -> ToolCallResult {
    match name {
        LINKEDIN_TOOL => match LinkedInSearch::from_arguments(args) {
            Ok(search) => search_linkedin(config, runner, &search).await,
            Err(e) => ToolCallResult::error(format!("Invalid arguments: {}", e)),
        },
        INDEED_TOOL => match IndeedSearch::from_arguments(args) {
            Ok(search) => search_indeed(config, runner, &search).await,
            Err(e) => ToolCallResult::error(format!("Invalid arguments: {}", e)),
        },
        _ => ToolCallResult::error(format!("Unknown tool: {}", name)),
    }
}

pub async fn search_linkedin(
    config: &ServiceConfig,
    runner: &dyn ActorRunner,
    search: &LinkedInSearch,
) -> ToolCallResult {
    if !config.has_api_key() {
        return missing_key();
    }

    let result = async {
        let items = runner
            .invoke(LINKEDIN_ACTOR, &search.actor_input(), &config.api_key)
            .await?;
        parse_jobs::<LinkedInJob>(items)
    }
    .await;

    match result {
        Ok(jobs) => {
            info!(count = jobs.len(), title = %search.job_title, "LinkedIn search complete");
            ToolCallResult::success(format!(
                "Found {} LinkedIn job(s):\n\n{}",
                jobs.len(),
                format_linkedin_jobs(&jobs)
            ))
        }
        Err(e) => scrape_failed("LinkedIn", e),
    }
}

pub async fn search_indeed(
    config: &ServiceConfig,
    runner: &dyn ActorRunner,
    search: &IndeedSearch,
) -> ToolCallResult {
    if !config.has_api_key() {
        return missing_key();
    }

    let result = async {
        let items = runner
            .invoke(INDEED_ACTOR, &search.actor_input(), &config.api_key)
            .await?;
        parse_jobs::<IndeedJob>(items)
    }
    .await;

    match result {
        Ok(jobs) => {
            info!(count = jobs.len(), position = %search.position, "Indeed search complete");
            ToolCallResult::success(format!(
                "Found {} Indeed job(s):\n\n{}",
                jobs.len(),
                format_indeed_jobs(&jobs)
            ))
        }
        Err(e) => scrape_failed("Indeed", e),
    }
}

fn missing_key() -> ToolCallResult {
    warn!("Tool called without an Apify API key");
    ToolCallResult::error(format!("Error: {}", ScrapeError::Configuration))
}

fn scrape_failed(source: &str, err: ScrapeError) -> ToolCallResult {
    warn!(source, error = %err, "Job scrape failed");
    let mut message = err.to_string();
    if message.is_empty() {
        message = "Unknown error".to_string();
    }
    ToolCallResult::error(format!("Error scraping {}: {}", source, message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actor_client::ActorClient;
    use crate::core::error::Result as ScrapeResult;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const CONFIG_ERROR: &str =
        "Error: APIFY_API_KEY not configured. Add it to wrangler.jsonc vars.";

    /// Counts invocations and always returns an empty dataset.
    #[derive(Default)]
    struct CountingRunner {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl ActorRunner for CountingRunner {
        async fn invoke(&self, _: &str, _: &Value, _: &str) -> ScrapeResult<Vec<Value>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(vec![])
        }
    }

    fn linkedin_item(title: &str) -> Value {
        json!({
            "title": title,
            "company": "Acme",
            "location": "Remote",
            "link": format!("https://linkedin.com/jobs/{}", title),
            "extra": "dropped"
        })
    }

    #[tokio::test]
    async fn test_empty_key_short_circuits_both_tools() {
        let runner = CountingRunner::default();
        let config = ServiceConfig::new("");

        let linkedin = search_linkedin(&config, &runner, &LinkedInSearch::new("Engineer")).await;
        let indeed = search_indeed(&config, &runner, &IndeedSearch::new("dev")).await;

        assert_eq!(linkedin.text(), CONFIG_ERROR);
        assert_eq!(indeed.text(), CONFIG_ERROR);
        assert_eq!(runner.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_empty_key_makes_no_http_call() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(0)
            .mount(&server)
            .await;

        let config = ServiceConfig::new("").with_base_url(server.uri());
        let client = ActorClient::from_config(&config);
        let result = search_indeed(&config, &client, &IndeedSearch::new("dev")).await;

        assert_eq!(result.text(), CONFIG_ERROR);
        server.verify().await;
    }

    #[tokio::test]
    async fn test_linkedin_two_results_in_order() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(
                "/acts/bebity~linkedin-jobs-scraper/run-sync-get-dataset-items",
            ))
            .and(body_partial_json(json!({ "title": "Engineer", "rows": 2 })))
            .respond_with(
                ResponseTemplate::new(201)
                    .set_body_json(json!([linkedin_item("alpha"), linkedin_item("beta")])),
            )
            .expect(1)
            .mount(&server)
            .await;

        let config = ServiceConfig::new("key").with_base_url(server.uri());
        let client = ActorClient::from_config(&config);
        let mut search = LinkedInSearch::new("Engineer");
        search.max_results = 2;

        let result = search_linkedin(&config, &client, &search).await;
        let text = result.text();

        assert!(!result.is_error());
        assert!(text.starts_with("Found 2 LinkedIn job(s):\n\n1. **alpha** at Acme"));
        let alpha = text.find("1. **alpha**").unwrap();
        let beta = text.find("2. **beta**").unwrap();
        assert!(alpha < beta);
    }

    #[tokio::test]
    async fn test_linkedin_upstream_error_text() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_string("rate limited"))
            .mount(&server)
            .await;

        let config = ServiceConfig::new("key").with_base_url(server.uri());
        let client = ActorClient::from_config(&config);
        let result = search_linkedin(&config, &client, &LinkedInSearch::new("Engineer")).await;
        let text = result.text();

        assert!(result.is_error());
        assert!(text.contains("Error scraping LinkedIn:"));
        assert!(text.contains("500"));
        assert!(text.contains("rate limited"));
    }

    #[tokio::test]
    async fn test_indeed_malformed_items() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/acts/misceres~indeed-scraper/run-sync-get-dataset-items"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{ "title": 3 }])))
            .mount(&server)
            .await;

        let config = ServiceConfig::new("key").with_base_url(server.uri());
        let client = ActorClient::from_config(&config);
        let result = search_indeed(&config, &client, &IndeedSearch::new("dev")).await;

        assert!(result.text().starts_with("Error scraping Indeed: Malformed response"));
    }

    #[tokio::test]
    async fn test_indeed_empty_dataset() {
        let runner = CountingRunner::default();
        let config = ServiceConfig::new("key");
        let result = search_indeed(&config, &runner, &IndeedSearch::new("dev")).await;

        assert_eq!(
            result.text(),
            "Found 0 Indeed job(s):\n\nNo jobs found matching your criteria."
        );
        assert_eq!(runner.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_call_tool_rejects_invalid_enum_without_calling() {
        let runner = CountingRunner::default();
        let config = ServiceConfig::new("key");
        let args = json!({ "jobTitle": "Engineer", "jobType": "Freelance" });

        let result = call_tool(LINKEDIN_TOOL, Some(&args), &config, &runner).await;

        assert!(result.is_error());
        assert!(result.text().starts_with("Invalid arguments:"));
        assert_eq!(runner.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_call_tool_unknown_name() {
        let runner = CountingRunner::default();
        let result = call_tool("scrape_monster_jobs", None, &ServiceConfig::new("k"), &runner).await;
        assert_eq!(result.text(), "Unknown tool: scrape_monster_jobs");
    }

    #[test]
    fn test_definitions_declare_enums_and_required() {
        let defs = definitions();
        assert_eq!(defs.len(), 2);
        assert_eq!(defs[0].name, LINKEDIN_TOOL);
        assert_eq!(
            defs[0].input_schema["properties"]["jobType"]["enum"]
                .as_array()
                .unwrap()
                .len(),
            7
        );
        assert_eq!(defs[1].input_schema["required"], json!(["position"]));
    }
}
