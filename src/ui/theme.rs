//! Color theme and glyphs for terminal output

use colored::Color;

pub struct Theme;

impl Theme {
    pub const ACCENT: Color = Color::TrueColor {
        r: 0,
        g: 255,
        b: 255,
    };
    pub const HIGHLIGHT: Color = Color::TrueColor {
        r: 255,
        g: 0,
        b: 255,
    };
    pub const SUCCESS: Color = Color::TrueColor {
        r: 57,
        g: 255,
        b: 20,
    };
    pub const FAILURE: Color = Color::TrueColor {
        r: 255,
        g: 99,
        b: 71,
    };
    pub const SALARY: Color = Color::TrueColor {
        r: 255,
        g: 215,
        b: 0,
    };
    pub const SUBTLE: Color = Color::TrueColor {
        r: 160,
        g: 160,
        b: 160,
    };
}

pub struct Glyphs;

impl Glyphs {
    pub const DIAMOND: &'static str = "◆";
    pub const CHECK: &'static str = "✓";
    pub const CROSS_MARK: &'static str = "✗";
    pub const SPINNER: &'static [&'static str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
}
