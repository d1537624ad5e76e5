//! Plain-text rendering of job listings for tool responses

use crate::core::jobs::{IndeedJob, JobListing, LinkedInJob};

pub const NO_JOBS_MESSAGE: &str = "No jobs found matching your criteria.";

pub fn format_linkedin_jobs(jobs: &[LinkedInJob]) -> String {
    format_jobs(jobs)
}

pub fn format_indeed_jobs(jobs: &[IndeedJob]) -> String {
    format_jobs(jobs)
}

/// Numbered blocks separated by a blank line, in input order.
pub fn format_jobs<J: JobListing>(jobs: &[J]) -> String {
    if jobs.is_empty() {
        return NO_JOBS_MESSAGE.to_string();
    }

    jobs.iter()
        .enumerate()
        .map(|(i, job)| format_job(i + 1, job))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Optional lines end with the indent of the line after them, and a fixed
/// three-space gap sits before `Posted` and before `Link`.
fn format_job<J: JobListing>(n: usize, job: &J) -> String {
    let mut block = format!(
        "{}. **{}** at {}\n   Location: {}\n   ",
        n,
        job.title(),
        job.company(),
        job.location()
    );

    if let Some(salary) = non_empty(job.salary()) {
        block.push_str(&format!("Salary: {}\n   ", salary));
    }
    block.push_str("   ");
    if let Some(posted) = non_empty(job.posted()) {
        block.push_str(&format!("Posted: {}\n   ", posted));
    }

    block.push_str(&format!("   Link: {}", job.link()));
    block
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn linkedin(title: &str, salary: Option<&str>, posted_at: Option<&str>) -> LinkedInJob {
        LinkedInJob {
            title: title.to_string(),
            company: "Acme".to_string(),
            location: "Remote".to_string(),
            link: format!("https://linkedin.com/jobs/{}", title),
            posted_at: posted_at.map(String::from),
            salary: salary.map(String::from),
        }
    }

    #[test]
    fn test_empty_lists() {
        assert_eq!(format_linkedin_jobs(&[]), NO_JOBS_MESSAGE);
        assert_eq!(format_indeed_jobs(&[]), NO_JOBS_MESSAGE);
    }

    #[test]
    fn test_optional_lines_omitted() {
        let text = format_linkedin_jobs(&[linkedin("rust", None, Some(""))]);
        assert_eq!(
            text,
            "1. **rust** at Acme\n   Location: Remote\n      Link: https://linkedin.com/jobs/rust"
        );
        assert!(!text.contains("\n\n"));
    }

    #[test]
    fn test_salary_only() {
        let text = format_linkedin_jobs(&[linkedin("go", Some("$90k"), None)]);
        assert_eq!(
            text,
            "1. **go** at Acme\n   Location: Remote\n   Salary: $90k\n         Link: https://linkedin.com/jobs/go"
        );
    }

    #[test]
    fn test_all_lines_and_numbering() {
        let text = format_linkedin_jobs(&[
            linkedin("first", Some("$150k"), Some("1 day ago")),
            linkedin("second", None, None),
        ]);

        let expected = "1. **first** at Acme\n   Location: Remote\n   Salary: $150k\n      Posted: 1 day ago\n      Link: https://linkedin.com/jobs/first\n\n2. **second** at Acme\n   Location: Remote\n      Link: https://linkedin.com/jobs/second";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_indeed_uses_url_and_posted() {
        let job = IndeedJob {
            title: "Web Developer".to_string(),
            company: "Initech".to_string(),
            location: "Austin, TX".to_string(),
            url: "https://indeed.com/viewjob?jk=1".to_string(),
            posted: Some("Just posted".to_string()),
            salary: None,
        };

        let text = format_indeed_jobs(&[job]);
        assert!(text.contains("   Location: Austin, TX\n      Posted: Just posted\n"));
        assert!(text.ends_with("   Link: https://indeed.com/viewjob?jk=1"));
        assert!(!text.contains("Salary"));
    }
}
