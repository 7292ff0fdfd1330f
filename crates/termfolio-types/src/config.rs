//! Terminal configuration loaded from TOML.
//!
//! Every field has a default, so an empty file (or no file at all) yields the
//! stock placeholder portfolio.

use std::path::Path;

use serde::Deserialize;

use crate::error::{Result, TermfolioError};

/// The fixed set of theme names a host knows how to present.
pub const AVAILABLE_THEMES: [&str; 11] = [
    "dark",
    "light",
    "dracula",
    "onedark",
    "tokyo",
    "monokai",
    "nord",
    "cyberpunk",
    "hacker",
    "retro",
    "ocean",
];

/// Theme used when nothing else is configured.
pub const DEFAULT_THEME: &str = "dark";

/// Top-level configuration (`termfolio.toml`).
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TermfolioConfig {
    /// Prompt echoed in front of every submitted command.
    pub prompt: String,
    /// Theme active when a session starts.
    pub default_theme: String,
    /// Delay before the punchline of `joke` is printed.
    pub joke_delay_ms: u64,
    /// Maximum retained history entries (`None` = unbounded).
    pub history_capacity: Option<usize>,
    /// Portfolio content shown by the profile commands.
    pub profile: Profile,
}

impl Default for TermfolioConfig {
    fn default() -> Self {
        Self {
            prompt: "visitor@portfolio:~$".to_string(),
            default_theme: DEFAULT_THEME.to_string(),
            joke_delay_ms: 1000,
            history_capacity: None,
            profile: Profile::default(),
        }
    }
}

impl TermfolioConfig {
    /// Parse a configuration from TOML text and validate it.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| TermfolioError::Config(format!("{}: {e}", path.display())))?;
        let config = Self::from_toml_str(&text)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Check cross-field constraints serde cannot express.
    pub fn validate(&self) -> Result<()> {
        if self.prompt.trim().is_empty() {
            return Err(TermfolioError::Config("prompt must not be empty".into()));
        }
        let theme = self.default_theme.to_ascii_lowercase();
        if !AVAILABLE_THEMES.contains(&theme.as_str()) {
            return Err(TermfolioError::Config(format!(
                "unknown default_theme '{}' (expected one of: {})",
                self.default_theme,
                AVAILABLE_THEMES.join(", ")
            )));
        }
        if self.history_capacity == Some(0) {
            return Err(TermfolioError::Config(
                "history_capacity must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

/// Portfolio owner details and content.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub email: String,
    pub github_username: String,
    pub linkedin_profile: String,
    pub about: String,
    pub projects: Vec<Project>,
    pub skills: Vec<String>,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            email: "your.email@example.com".to_string(),
            github_username: "yourusername".to_string(),
            linkedin_profile: "yourlinkedinprofile".to_string(),
            about: "This is a terminal portfolio website. I'm a passionate developer \
                    interested in web technologies and creative coding."
                .to_string(),
            projects: vec![
                Project::new(
                    "Project Alpha",
                    "A cool thing I built using cutting-edge imaginary technology.",
                ),
                Project::new(
                    "Project Beta",
                    "An interesting endeavor into the realm of digital whatnots.",
                ),
                Project::new("Work In Progress", "Stay tuned for more!"),
            ],
            skills: [
                "HTML",
                "CSS",
                "JavaScript",
                "Node.js (conceptual)",
                "Python (for scripting)",
                "Problem Solving",
                "Debugging",
                "ASCII Artistry",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        }
    }
}

/// A single portfolio project.
#[derive(Debug, Clone, Deserialize)]
pub struct Project {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

impl Project {
    pub fn new(name: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
        }
    }
}
