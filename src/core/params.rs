//! Tool arguments: validation, defaults and actor input construction
//!
//! Arguments arrive as loose JSON from the MCP caller. They are checked here,
//! before any network call, into typed requests. Numeric limits are clamped,
//! enum values outside the declared set are rejected.

use serde_json::{json, Map, Value};
use std::fmt;
use std::str::FromStr;

use crate::core::error::ParamError;

pub const MAX_LIMIT: i64 = 100;
pub const DEFAULT_LINKEDIN_RESULTS: i64 = 10;
pub const DEFAULT_INDEED_ITEMS: i64 = 50;
pub const DEFAULT_COUNTRY: &str = "US";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExperienceLevel {
    Internship,
    EntryLevel,
    Associate,
    MidSeniorLevel,
    Director,
    Executive,
}

impl ExperienceLevel {
    pub const ALL: [ExperienceLevel; 6] = [
        ExperienceLevel::Internship,
        ExperienceLevel::EntryLevel,
        ExperienceLevel::Associate,
        ExperienceLevel::MidSeniorLevel,
        ExperienceLevel::Director,
        ExperienceLevel::Executive,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ExperienceLevel::Internship => "Internship",
            ExperienceLevel::EntryLevel => "Entry level",
            ExperienceLevel::Associate => "Associate",
            ExperienceLevel::MidSeniorLevel => "Mid-Senior level",
            ExperienceLevel::Director => "Director",
            ExperienceLevel::Executive => "Executive",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobType {
    FullTime,
    PartTime,
    Contract,
    Temporary,
    Volunteer,
    Internship,
    Other,
}

impl JobType {
    pub const ALL: [JobType; 7] = [
        JobType::FullTime,
        JobType::PartTime,
        JobType::Contract,
        JobType::Temporary,
        JobType::Volunteer,
        JobType::Internship,
        JobType::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            JobType::FullTime => "Full-time",
            JobType::PartTime => "Part-time",
            JobType::Contract => "Contract",
            JobType::Temporary => "Temporary",
            JobType::Volunteer => "Volunteer",
            JobType::Internship => "Internship",
            JobType::Other => "Other",
        }
    }
}

/// Exact, case-sensitive match against the declared literals.
fn parse_literal<T: Copy>(
    field: &'static str,
    value: &str,
    all: &[T],
    name: fn(&T) -> &'static str,
) -> Result<T, ParamError> {
    all.iter()
        .copied()
        .find(|v| name(v) == value)
        .ok_or_else(|| ParamError::NotAllowed {
            field,
            value: value.to_string(),
            allowed: all.iter().map(name).collect::<Vec<_>>().join(", "),
        })
}

impl FromStr for ExperienceLevel {
    type Err = ParamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_literal("experienceLevel", s, &Self::ALL, Self::as_str)
    }
}

impl FromStr for JobType {
    type Err = ParamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_literal("jobType", s, &Self::ALL, Self::as_str)
    }
}

impl fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for JobType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Clamp a requested result count into `1..=100`.
pub fn clamp_limit(n: i64) -> u32 {
    n.clamp(1, MAX_LIMIT) as u32
}

#[derive(Debug, Clone, PartialEq)]
pub struct LinkedInSearch {
    pub job_title: String,
    pub location: Option<String>,
    pub max_results: u32,
    pub experience_level: Option<ExperienceLevel>,
    pub job_type: Option<JobType>,
    pub company_name: Option<Vec<String>>,
}

impl LinkedInSearch {
    pub fn new(job_title: impl Into<String>) -> Self {
        Self {
            job_title: job_title.into(),
            location: None,
            max_results: DEFAULT_LINKEDIN_RESULTS as u32,
            experience_level: None,
            job_type: None,
            company_name: None,
        }
    }

    pub fn from_arguments(args: Option<&Value>) -> Result<Self, ParamError> {
        let args = Arguments::new(args)?;

        let experience_level = args
            .optional_str("experienceLevel")?
            .map(|s| s.parse::<ExperienceLevel>())
            .transpose()?;
        let job_type = args
            .optional_str("jobType")?
            .map(|s| s.parse::<JobType>())
            .transpose()?;

        Ok(Self {
            job_title: args.non_empty_str("jobTitle")?,
            location: args.optional_str("location")?,
            max_results: args.limit("maxResults", DEFAULT_LINKEDIN_RESULTS)?,
            experience_level,
            job_type,
            company_name: args.optional_str_list("companyName")?,
        })
    }

    /// Input for the `bebity~linkedin-jobs-scraper` actor. Absent filters are
    /// sent as empty values, which the actor treats as "no filter".
    pub fn actor_input(&self) -> Value {
        json!({
            "title": self.job_title,
            "location": self.location.clone().unwrap_or_default(),
            "rows": self.max_results,
            "companyName": self.company_name.clone().unwrap_or_default(),
            "experienceLevel": self.experience_level.map(|l| l.as_str()).unwrap_or_default(),
            "jobType": self.job_type.map(|t| t.as_str()).unwrap_or_default(),
            "proxy": {
                "useApifyProxy": true,
                "apifyProxyGroups": ["RESIDENTIAL"]
            }
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct IndeedSearch {
    pub position: String,
    pub country: String,
    pub location: Option<String>,
    pub max_items: u32,
    pub parse_company_details: bool,
}

impl IndeedSearch {
    pub fn new(position: impl Into<String>) -> Self {
        Self {
            position: position.into(),
            country: DEFAULT_COUNTRY.to_string(),
            location: None,
            max_items: DEFAULT_INDEED_ITEMS as u32,
            parse_company_details: false,
        }
    }

    pub fn from_arguments(args: Option<&Value>) -> Result<Self, ParamError> {
        let args = Arguments::new(args)?;

        Ok(Self {
            position: args.required_str("position")?,
            country: args
                .optional_str("country")?
                .unwrap_or_else(|| DEFAULT_COUNTRY.to_string()),
            location: args.optional_str("location")?,
            max_items: args.limit("maxItems", DEFAULT_INDEED_ITEMS)?,
            parse_company_details: args.optional_bool("parseCompanyDetails")?.unwrap_or(false),
        })
    }

    /// Input for the `misceres~indeed-scraper` actor.
    pub fn actor_input(&self) -> Value {
        json!({
            "position": self.position,
            "country": self.country,
            "location": self.location.clone().unwrap_or_default(),
            "maxItems": self.max_items,
            "parseCompanyDetails": self.parse_company_details,
            "saveOnlyUniqueItems": true,
            "followApplyRedirects": false
        })
    }
}

/// Typed accessors over a tool-call argument object. `null` counts as absent.
struct Arguments<'a> {
    map: Option<&'a Map<String, Value>>,
}

impl<'a> Arguments<'a> {
    fn new(args: Option<&'a Value>) -> Result<Self, ParamError> {
        match args {
            None | Some(Value::Null) => Ok(Self { map: None }),
            Some(Value::Object(map)) => Ok(Self { map: Some(map) }),
            Some(_) => Err(ParamError::WrongType {
                field: "arguments",
                expected: "an object",
            }),
        }
    }

    fn get(&self, field: &str) -> Option<&'a Value> {
        self.map
            .and_then(|m| m.get(field))
            .filter(|v| !v.is_null())
    }

    fn required_str(&self, field: &'static str) -> Result<String, ParamError> {
        self.optional_str(field)?.ok_or(ParamError::Missing(field))
    }

    /// Present and not blank.
    fn non_empty_str(&self, field: &'static str) -> Result<String, ParamError> {
        match self.required_str(field)? {
            s if s.trim().is_empty() => Err(ParamError::Missing(field)),
            s => Ok(s),
        }
    }

    fn optional_str(&self, field: &'static str) -> Result<Option<String>, ParamError> {
        match self.get(field) {
            None => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.clone())),
            Some(_) => Err(ParamError::WrongType {
                field,
                expected: "a string",
            }),
        }
    }

    fn optional_bool(&self, field: &'static str) -> Result<Option<bool>, ParamError> {
        match self.get(field) {
            None => Ok(None),
            Some(Value::Bool(b)) => Ok(Some(*b)),
            Some(_) => Err(ParamError::WrongType {
                field,
                expected: "a boolean",
            }),
        }
    }

    fn limit(&self, field: &'static str, default: i64) -> Result<u32, ParamError> {
        let wrong_type = ParamError::WrongType {
            field,
            expected: "a number",
        };
        let n = match self.get(field) {
            None => default,
            Some(v) => v
                .as_i64()
                .or_else(|| v.as_f64().map(|f| f.trunc() as i64))
                .ok_or(wrong_type)?,
        };
        Ok(clamp_limit(n))
    }

    fn optional_str_list(&self, field: &'static str) -> Result<Option<Vec<String>>, ParamError> {
        let wrong_type = || ParamError::WrongType {
            field,
            expected: "an array of strings",
        };
        match self.get(field) {
            None => Ok(None),
            Some(Value::Array(items)) => items
                .iter()
                .map(|item| item.as_str().map(String::from).ok_or_else(wrong_type))
                .collect::<Result<Vec<_>, _>>()
                .map(Some),
            Some(_) => Err(wrong_type()),
        }
    }
}
