//! Spinner shown on stderr while an actor run is in flight

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

use super::theme::{Glyphs, Theme};

pub struct ActorSpinner {
    bar: ProgressBar,
}

impl ActorSpinner {
    pub fn start(message: &str) -> Self {
        let bar = ProgressBar::new_spinner();
        let style = ProgressStyle::default_spinner()
            .tick_strings(Glyphs::SPINNER)
            .template("{spinner:.cyan} {msg} {elapsed:.dim}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner());
        bar.set_style(style);
        bar.set_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(80));
        Self { bar }
    }

    pub fn finish(self, message: &str) {
        self.bar.finish_and_clear();
        eprintln!(
            "{} {}",
            Glyphs::CHECK.color(Theme::SUCCESS),
            message.color(Theme::SUBTLE)
        );
    }

    pub fn fail(self, message: &str) {
        self.bar.finish_and_clear();
        eprintln!(
            "{} {}",
            Glyphs::CROSS_MARK.color(Theme::FAILURE),
            message.color(Theme::FAILURE)
        );
    }
}
