//! Host service traits and desktop implementation.

use std::io::Write;
use std::process::{Command, Stdio};

use base64ct::{Base64, Encoding};
use termfolio_types::error::{Result, TermfolioError};

// ---------------------------------------------------------------------------
// Time service
// ---------------------------------------------------------------------------

/// A simple wall-clock timestamp (UTC).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SystemTime {
    pub year: u16,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

impl SystemTime {
    /// Break seconds since the Unix epoch into calendar fields.
    pub fn from_unix_secs(secs: u64) -> Self {
        let (year, month, day) = civil_from_days(secs / 86_400);
        let rem = secs % 86_400;
        Self {
            year,
            month,
            day,
            hour: (rem / 3600) as u8,
            minute: ((rem % 3600) / 60) as u8,
            second: (rem % 60) as u8,
        }
    }
}

impl std::fmt::Display for SystemTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute, self.second,
        )
    }
}

/// Abstraction over the host clock.
pub trait TimeService {
    /// Current wall-clock time.
    fn now(&self) -> Result<SystemTime>;
}

// ---------------------------------------------------------------------------
// Clipboard service
// ---------------------------------------------------------------------------

/// Abstraction over a shared clipboard the host may refuse to write.
pub trait ClipboardService {
    /// Place `text` on the clipboard.
    fn write_text(&mut self, text: &str) -> Result<()>;
}

// ---------------------------------------------------------------------------
// Link service
// ---------------------------------------------------------------------------

/// Abstraction over "open this URL in a new tab / browser".
pub trait LinkService {
    /// Open `url` in the host browser.
    fn open_link(&self, url: &str) -> Result<()>;
}

// ---------------------------------------------------------------------------
// Unified platform trait
// ---------------------------------------------------------------------------

/// Everything a full host provides.
pub trait Platform: TimeService + ClipboardService + LinkService {}

// ---------------------------------------------------------------------------
// Desktop implementation
// ---------------------------------------------------------------------------

/// Desktop terminal host services.
///
/// The clipboard is reached through the OSC 52 escape sequence, which most
/// modern terminal emulators forward to the system clipboard. Links are handed
/// to the platform opener.
#[derive(Debug, Clone)]
pub struct DesktopPlatform {
    opener: Option<&'static str>,
}

impl DesktopPlatform {
    pub fn new() -> Self {
        let opener = if cfg!(target_os = "macos") {
            Some("open")
        } else if cfg!(target_os = "windows") {
            Some("cmd")
        } else if cfg!(unix) {
            Some("xdg-open")
        } else {
            None
        };
        Self { opener }
    }
}

impl Default for DesktopPlatform {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeService for DesktopPlatform {
    fn now(&self) -> Result<SystemTime> {
        let secs = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_err(|e| TermfolioError::Platform(format!("clock before epoch: {e}")))?
            .as_secs();
        Ok(SystemTime::from_unix_secs(secs))
    }
}

impl ClipboardService for DesktopPlatform {
    fn write_text(&mut self, text: &str) -> Result<()> {
        let mut out = std::io::stdout().lock();
        out.write_all(osc52_sequence(text).as_bytes())
            .and_then(|()| out.flush())
            .map_err(|e| TermfolioError::Clipboard(e.to_string()))
    }
}

impl LinkService for DesktopPlatform {
    fn open_link(&self, url: &str) -> Result<()> {
        let opener = self
            .opener
            .ok_or_else(|| TermfolioError::Platform("no link opener on this platform".into()))?;
        let mut cmd = Command::new(opener);
        if opener == "cmd" {
            cmd.args(["/C", "start", ""]);
        }
        cmd.arg(url)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| TermfolioError::Platform(format!("{opener}: {e}")))?;
        log::debug!("Opened {url} with {opener}");
        Ok(())
    }
}

impl Platform for DesktopPlatform {}

/// Build the OSC 52 "set clipboard" escape sequence for `text`.
pub fn osc52_sequence(text: &str) -> String {
    format!("\x1b]52;c;{}\x07", Base64::encode_string(text.as_bytes()))
}

// ---------------------------------------------------------------------------
// Date helper
// ---------------------------------------------------------------------------

/// Convert days since the Unix epoch to (year, month, day), proleptic
/// Gregorian.
fn civil_from_days(days: u64) -> (u16, u8, u8) {
    let z = days as i64 + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = doy - (153 * mp + 2) / 5 + 1;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    let year = yoe + era * 400 + i64::from(month <= 2);
    (year as u16, month as u8, day as u8)
}
