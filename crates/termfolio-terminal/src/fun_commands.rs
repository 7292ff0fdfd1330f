//! Fun commands: cowsay, fortune, joke, art.

use std::time::Duration;

use termfolio_types::error::Result;

use crate::interpreter::{Command, CommandRegistry, Environment};
use crate::transcript::{TranscriptLine, escape_html};

/// Register the fun commands. `joke_delay` is how long the punchline waits.
pub fn register_fun_commands(reg: &mut CommandRegistry, joke_delay: Duration) {
    reg.register(Box::new(CowsayCmd));
    reg.register(Box::new(FortuneCmd));
    reg.register(Box::new(JokeCmd { delay: joke_delay }));
    reg.register(Box::new(ArtCmd));
}

/// Cheap index into a small table; quality randomness is not needed here.
fn pick(len: usize) -> usize {
    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos() as usize;
    seed % len
}

// ---------------------------------------------------------------------------
// cowsay
// ---------------------------------------------------------------------------

struct CowsayCmd;
impl Command for CowsayCmd {
    fn name(&self) -> &str {
        "cowsay"
    }
    fn description(&self) -> &str {
        "Display an ASCII cow with the provided message."
    }
    fn usage(&self) -> Option<&str> {
        Some("cowsay <message>")
    }
    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> Result<()> {
        let message = args.join(" ");
        if message.is_empty() {
            env.out
                .push_text("What should the cow say? Moo-ve along if you have nothing for it!");
            env.out.push_text("Usage: cowsay <message>");
            return Ok(());
        }
        // The bubble is sized to the escaped message, which is what the
        // middle line holds.
        let escaped = escape_html(&message);
        let width = escaped.chars().count() + 2;
        let lines = [
            format!("  {}", "_".repeat(width)),
            format!("< {escaped} >"),
            format!("  {}", "-".repeat(width)),
            r"        \   ^__^".to_string(),
            r"         \  (oo)\_______".to_string(),
            r"            (__)\       )\/\".to_string(),
            r"                ||----w |".to_string(),
            r"                ||     ||".to_string(),
        ];
        for line in lines {
            env.out.push_text(line);
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// fortune
// ---------------------------------------------------------------------------

static FORTUNES: [&str; 5] = [
    "A beautiful adventure awaits you.",
    "You will find a forgotten treasure.",
    "Good news will come to you by mail (or email).",
    "Your creativity will shine today.",
    "An exciting opportunity lies ahead.",
];

struct FortuneCmd;
impl Command for FortuneCmd {
    fn name(&self) -> &str {
        "fortune"
    }
    fn description(&self) -> &str {
        "Display a random fortune cookie message."
    }
    fn execute(&self, _args: &[&str], env: &mut Environment<'_>) -> Result<()> {
        env.out.push_text(FORTUNES[pick(FORTUNES.len())]);
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// joke
// ---------------------------------------------------------------------------

static JOKES: [(&str, &str); 2] = [
    (
        "Why don't scientists trust atoms?",
        "Because they make up everything!",
    ),
    (
        "Why did the scarecrow win an award?",
        "Because he was outstanding in his field!",
    ),
];

struct JokeCmd {
    delay: Duration,
}

impl Command for JokeCmd {
    fn name(&self) -> &str {
        "joke"
    }
    fn description(&self) -> &str {
        "Tell a random joke."
    }
    fn execute(&self, _args: &[&str], env: &mut Environment<'_>) -> Result<()> {
        let (setup, punchline) = JOKES[pick(JOKES.len())];
        env.out.push_text(setup);
        env.deferred.schedule(
            env.now,
            self.delay,
            vec![TranscriptLine::Text(punchline.to_string())],
        );
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// art
// ---------------------------------------------------------------------------

static ART: [(&str, &[&str]); 4] = [
    (
        "heart",
        &[
            "  ***   ***",
            " ******* *****",
            " *************",
            "  ***********",
            "   *********",
            "    *******",
            "     *****",
            "      ***",
            "       *",
        ],
    ),
    (
        "smiley",
        &[
            r"   .--''''''--.",
            r" .'           `.",
            r"/   O      O    \",
            r"|    \  ^^  /    |",
            r" \     `----'     /",
            r"  `. ________ .' ",
            r"    `--------`",
        ],
    ),
    (
        "star",
        &[
            "      *",
            "     *** ",
            "    *****",
            "   *******",
            "  *********",
            "   *******",
            "    *****",
            "     *** ",
            "      *",
        ],
    ),
    (
        "coffee",
        &[
            r"    ( (",
            r"     ) )",
            r"  .........",
            r"  |       |___",
            r"  |       |_  |",
            r"  |       |_| |",
            r"  |_______|   /",
            r"   \_______/",
        ],
    ),
];

fn art_names() -> String {
    ART.iter().map(|(name, _)| *name).collect::<Vec<_>>().join(", ")
}

struct ArtCmd;
impl Command for ArtCmd {
    fn name(&self) -> &str {
        "art"
    }
    fn description(&self) -> &str {
        "Display predefined ASCII art."
    }
    fn usage(&self) -> Option<&str> {
        Some("art <art_name> | art list")
    }
    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> Result<()> {
        let name = match args.first() {
            None => "list".to_string(),
            Some(arg) => arg.to_lowercase(),
        };
        if name == "list" {
            env.out.push_text(format!("Available art: {}", art_names()));
            return Ok(());
        }
        match ART.iter().find(|(n, _)| *n == name) {
            Some((_, lines)) => {
                for line in lines.iter() {
                    env.out.push_text(*line);
                }
            },
            None => env.out.push_text(format!(
                "Art '{name}' not found. Available art: {}",
                art_names()
            )),
        }
        Ok(())
    }
}
