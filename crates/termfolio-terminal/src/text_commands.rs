//! Text commands: echo, date, calc.

use termfolio_types::error::{Result, TermfolioError};

use crate::calc;
use crate::interpreter::{Command, CommandRegistry, Environment};

/// Register the text commands.
pub fn register_text_commands(reg: &mut CommandRegistry) {
    reg.register(Box::new(EchoCmd));
    reg.register(Box::new(DateCmd));
    reg.register(Box::new(CalcCmd));
}

// ---------------------------------------------------------------------------
// echo
// ---------------------------------------------------------------------------

struct EchoCmd;
impl Command for EchoCmd {
    fn name(&self) -> &str {
        "echo"
    }
    fn description(&self) -> &str {
        "Print the provided text."
    }
    fn usage(&self) -> Option<&str> {
        Some("echo [text ...]")
    }
    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> Result<()> {
        env.out.push_text(args.join(" "));
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// date
// ---------------------------------------------------------------------------

struct DateCmd;
impl Command for DateCmd {
    fn name(&self) -> &str {
        "date"
    }
    fn description(&self) -> &str {
        "Display the current date and time."
    }
    fn execute(&self, _args: &[&str], env: &mut Environment<'_>) -> Result<()> {
        let time = env
            .time
            .ok_or_else(|| TermfolioError::Platform("no time service".into()))?;
        let now = time.now()?;
        env.out.push_text(now.to_string());
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// calc
// ---------------------------------------------------------------------------

struct CalcCmd;
impl Command for CalcCmd {
    fn name(&self) -> &str {
        "calc"
    }
    fn description(&self) -> &str {
        "Evaluate an arithmetic expression."
    }
    fn usage(&self) -> Option<&str> {
        Some("calc <expression>")
    }
    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> Result<()> {
        if args.is_empty() {
            env.out.push_text("Usage: calc <expression>");
            env.out.push_text("Example: calc 2 + 3 * (4 / 2)");
            return Ok(());
        }
        let expr = args.join(" ");
        match calc::evaluate(&expr) {
            Ok(value) => env.out.push_text(value.to_string()),
            Err(e) => {
                log::debug!("calc rejected {expr:?}: {e}");
                env.out.push_text(format!("Error: {e}"));
            },
        }
        Ok(())
    }
}
