use anyhow::Result;
use colored::Colorize;

use crate::core::config::{mask_key, Config, API_KEY_ENV, BASE_URL_ENV};

pub struct ConfigOptions {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub show: bool,
}

pub async fn run(options: ConfigOptions) -> Result<()> {
    let mut config = Config::load()?;

    if options.show {
        show_config(&config);
        return Ok(());
    }

    let mut updated = false;

    if let Some(key) = options.api_key {
        config.api_key = Some(key);
        updated = true;
        println!("{}", "✓ API key updated".green());
    }

    if let Some(url) = options.base_url {
        config.base_url = Some(url);
        updated = true;
        println!("{}", "✓ Base URL updated".green());
    }

    if updated {
        config.save()?;
    } else {
        show_config(&config);
    }

    Ok(())
}

fn show_config(config: &Config) {
    println!("{}", "jobscrape configuration".bold());
    println!();

    match config.get_api_key().filter(|k| !k.is_empty()) {
        Some(key) => println!("  {} {}", "API Key:".dimmed(), mask_key(&key)),
        None => println!("  {} {}", "API Key:".dimmed(), "(not set)".yellow()),
    }
    println!("  {} {}", "Base URL:".dimmed(), config.get_base_url());

    println!();
    println!("{}", "Environment variables:".dimmed());
    for var in [API_KEY_ENV, BASE_URL_ENV] {
        let state = if std::env::var(var).is_ok() { "set" } else { "unset" };
        println!("  {} {}", format!("{}:", var).dimmed(), state);
    }
}
