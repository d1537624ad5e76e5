//! Job records as returned by the scraping actors
//!
//! Only the documented fields are kept; anything else the actor emits is
//! dropped while deserializing.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::core::error::{Result, ScrapeError};

/// Common view over both listing shapes, used by the formatter.
pub trait JobListing {
    fn title(&self) -> &str;
    fn company(&self) -> &str;
    fn location(&self) -> &str;
    fn link(&self) -> &str;
    fn salary(&self) -> Option<&str>;
    fn posted(&self) -> Option<&str>;
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LinkedInJob {
    pub title: String,
    pub company: String,
    pub location: String,
    pub link: String,
    #[serde(default)]
    pub posted_at: Option<String>,
    #[serde(default)]
    pub salary: Option<String>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct IndeedJob {
    pub title: String,
    pub company: String,
    pub location: String,
    pub url: String,
    #[serde(default)]
    pub posted: Option<String>,
    #[serde(default)]
    pub salary: Option<String>,
}

impl JobListing for LinkedInJob {
    fn title(&self) -> &str {
        &self.title
    }
    fn company(&self) -> &str {
        &self.company
    }
    fn location(&self) -> &str {
        &self.location
    }
    fn link(&self) -> &str {
        &self.link
    }
    fn salary(&self) -> Option<&str> {
        self.salary.as_deref()
    }
    fn posted(&self) -> Option<&str> {
        self.posted_at.as_deref()
    }
}

impl JobListing for IndeedJob {
    fn title(&self) -> &str {
        &self.title
    }
    fn company(&self) -> &str {
        &self.company
    }
    fn location(&self) -> &str {
        &self.location
    }
    fn link(&self) -> &str {
        &self.url
    }
    fn salary(&self) -> Option<&str> {
        self.salary.as_deref()
    }
    fn posted(&self) -> Option<&str> {
        self.posted.as_deref()
    }
}

/// Shape-check raw dataset items. One bad item fails the whole batch so a
/// caller never sees a partial list.
pub fn parse_jobs<J: DeserializeOwned>(items: Vec<Value>) -> Result<Vec<J>> {
    items
        .into_iter()
        .enumerate()
        .map(|(i, item)| {
            serde_json::from_value(item)
                .map_err(|e| ScrapeError::MalformedResponse(format!("item {}: {}", i + 1, e)))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_linkedin_drops_unknown_fields() {
        let jobs: Vec<LinkedInJob> = parse_jobs(vec![json!({
            "title": "Backend Engineer",
            "company": "Acme",
            "location": "Remote",
            "link": "https://linkedin.com/jobs/1",
            "postedAt": "2 days ago",
            "applicants": 42
        })])
        .unwrap();

        assert_eq!(jobs[0].posted_at.as_deref(), Some("2 days ago"));
        assert_eq!(jobs[0].salary, None);
    }

    #[test]
    fn test_parse_indeed_accepts_null_optionals() {
        let jobs: Vec<IndeedJob> = parse_jobs(vec![json!({
            "title": "Web Developer",
            "company": "Initech",
            "location": "Austin, TX",
            "url": "https://indeed.com/viewjob?jk=1",
            "salary": null
        })])
        .unwrap();

        assert_eq!(jobs[0].link(), "https://indeed.com/viewjob?jk=1");
        assert!(jobs[0].salary().is_none());
    }

    #[test]
    fn test_parse_missing_required_field_is_malformed() {
        let result: Result<Vec<IndeedJob>> = parse_jobs(vec![
            json!({ "title": "a", "company": "b", "location": "c", "url": "d" }),
            json!({ "title": "no company" }),
        ]);

        match result {
            Err(ScrapeError::MalformedResponse(msg)) => assert!(msg.starts_with("item 2:")),
            other => panic!("expected malformed response, got {:?}", other),
        }
    }
}
