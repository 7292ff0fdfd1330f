//! Portfolio commands: about, projects, skills, contact, github, linkedin, email.

use std::time::Duration;

use termfolio_types::config::{Profile, Project};
use termfolio_types::error::{Result, TermfolioError};

use crate::interpreter::{Command, CommandRegistry, Environment};
use crate::transcript::TranscriptLine;

/// Register the portfolio commands, baking `profile` into each of them.
pub fn register_profile_commands(reg: &mut CommandRegistry, profile: &Profile) {
    reg.register(Box::new(AboutCmd {
        about: profile.about.clone(),
    }));
    reg.register(Box::new(ProjectsCmd {
        projects: profile.projects.clone(),
    }));
    reg.register(Box::new(SkillsCmd {
        skills: profile.skills.clone(),
    }));
    reg.register(Box::new(ContactCmd {
        email: profile.email.clone(),
        github: profile.github_username.clone(),
        linkedin: profile.linkedin_profile.clone(),
    }));
    reg.register(Box::new(LinkCmd {
        name: "github",
        description: "Open the GitHub profile in a new browser tab.",
        site: "GitHub",
        url: format!("https://github.com/{}", profile.github_username),
        handle: profile.github_username.clone(),
    }));
    reg.register(Box::new(LinkCmd {
        name: "linkedin",
        description: "Open the LinkedIn profile in a new browser tab.",
        site: "LinkedIn",
        url: format!("https://linkedin.com/in/{}", profile.linkedin_profile),
        handle: profile.linkedin_profile.clone(),
    }));
    reg.register(Box::new(EmailCmd {
        email: profile.email.clone(),
    }));
}

// ---------------------------------------------------------------------------
// about
// ---------------------------------------------------------------------------

struct AboutCmd {
    about: String,
}

impl Command for AboutCmd {
    fn name(&self) -> &str {
        "about"
    }
    fn description(&self) -> &str {
        "Display information about the website owner."
    }
    fn execute(&self, _args: &[&str], env: &mut Environment<'_>) -> Result<()> {
        env.out.push_text(self.about.as_str());
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// projects / skills
// ---------------------------------------------------------------------------

struct ProjectsCmd {
    projects: Vec<Project>,
}

impl Command for ProjectsCmd {
    fn name(&self) -> &str {
        "projects"
    }
    fn description(&self) -> &str {
        "List portfolio projects."
    }
    fn execute(&self, _args: &[&str], env: &mut Environment<'_>) -> Result<()> {
        env.out.push_text("Projects:");
        for p in &self.projects {
            env.out.push_text(format!("- {}: {}", p.name, p.description));
        }
        Ok(())
    }
}

struct SkillsCmd {
    skills: Vec<String>,
}

impl Command for SkillsCmd {
    fn name(&self) -> &str {
        "skills"
    }
    fn description(&self) -> &str {
        "Show technical skills."
    }
    fn execute(&self, _args: &[&str], env: &mut Environment<'_>) -> Result<()> {
        env.out.push_text("Skills:");
        for s in &self.skills {
            env.out.push_text(format!("- {s}"));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// contact
// ---------------------------------------------------------------------------

struct ContactCmd {
    email: String,
    github: String,
    linkedin: String,
}

impl Command for ContactCmd {
    fn name(&self) -> &str {
        "contact"
    }
    fn description(&self) -> &str {
        "Show email and social media links."
    }
    fn execute(&self, _args: &[&str], env: &mut Environment<'_>) -> Result<()> {
        env.out.push_text("Contact Information:");
        env.out.push_text(format!(
            "- Email: {} (use 'email' command to copy)",
            self.email
        ));
        env.out.push_text(format!(
            "- GitHub: {} (use 'github' command to open)",
            self.github
        ));
        env.out.push_text(format!(
            "- LinkedIn: {} (use 'linkedin' command to open)",
            self.linkedin
        ));
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// github / linkedin
// ---------------------------------------------------------------------------

/// Opens a profile URL through the host link service.
struct LinkCmd {
    name: &'static str,
    description: &'static str,
    site: &'static str,
    url: String,
    handle: String,
}

impl Command for LinkCmd {
    fn name(&self) -> &str {
        self.name
    }
    fn description(&self) -> &str {
        self.description
    }
    fn execute(&self, _args: &[&str], env: &mut Environment<'_>) -> Result<()> {
        let links = env
            .links
            .ok_or_else(|| TermfolioError::Platform("cannot open links on this host".into()))?;
        links.open_link(&self.url)?;
        env.out.push_text(format!(
            "Opening {} profile for {}...",
            self.site, self.handle
        ));
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// email
// ---------------------------------------------------------------------------

struct EmailCmd {
    email: String,
}

impl Command for EmailCmd {
    fn name(&self) -> &str {
        "email"
    }
    fn description(&self) -> &str {
        "Copy the email address to clipboard."
    }
    fn execute(&self, _args: &[&str], env: &mut Environment<'_>) -> Result<()> {
        let result = match env.clipboard.as_deref_mut() {
            Some(clipboard) => clipboard.write_text(&self.email),
            None => Err(TermfolioError::Clipboard(
                "no clipboard on this host".into(),
            )),
        };
        // The clipboard reports back asynchronously on hosts that have one;
        // the outcome is delivered through the deferred queue either way.
        let lines = match result {
            Ok(()) => vec![TranscriptLine::Text(format!(
                "Email address '{}' copied to clipboard.",
                self.email
            ))],
            Err(e) => {
                log::warn!("Clipboard write failed: {e}");
                vec![
                    TranscriptLine::Text(format!(
                        "Error copying email: {e}. You might need to enable clipboard \
                         permissions or copy manually."
                    )),
                    TranscriptLine::Text(format!("Email: {}", self.email)),
                ]
            },
        };
        env.deferred.schedule(env.now, Duration::ZERO, lines);
        Ok(())
    }
}
