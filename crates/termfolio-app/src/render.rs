//! Draw a session into a crossterm terminal.
//!
//! The transcript fills every row but the last; the last row holds the
//! prompt and the input field. Colors come from the active theme.

use std::io::{self, Write};

use crossterm::cursor::{MoveTo, Show};
use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor};
use crossterm::terminal::{Clear, ClearType};
use termfolio_terminal::{Session, TranscriptLine};

/// Colors for one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub text: Color,
    pub prompt: Color,
    /// Echoed command lines.
    pub echo: Color,
}

/// Hex colors per theme: background, text, prompt, echo.
static THEME_COLORS: [(&str, [&str; 4]); 11] = [
    ("dark", ["#1E1E1E", "#CCCCCC", "#50FA7B", "#8BE9FD"]),
    ("light", ["#FAFAFA", "#282828", "#008000", "#005AB4"]),
    ("dracula", ["#282A36", "#F8F8F2", "#50FA7B", "#BD93F9"]),
    ("onedark", ["#282C34", "#ABB2BF", "#98C379", "#61AFEF"]),
    ("tokyo", ["#1A1B26", "#A9B1D6", "#9ECE6A", "#7AA2F7"]),
    ("monokai", ["#272822", "#F8F8F2", "#A6E22E", "#66D9EF"]),
    ("nord", ["#2E3440", "#D8DEE9", "#A3BE8C", "#88C0D0"]),
    ("cyberpunk", ["#0D0221", "#00FFFF", "#FF00FF", "#FFFF00"]),
    ("hacker", ["#000000", "#00FF41", "#00C832", "#008F11"]),
    ("retro", ["#282828", "#FFB000", "#FFCC00", "#FF8C00"]),
    ("ocean", ["#0F2537", "#C8E6F0", "#64DCC8", "#50AAE6"]),
];

impl Palette {
    const FALLBACK: Self = Self {
        background: Color::Black,
        text: Color::Grey,
        prompt: Color::Green,
        echo: Color::Cyan,
    };

    /// Palette for a theme name. Unknown names get a plain ANSI palette.
    pub fn for_theme(name: &str) -> Self {
        THEME_COLORS
            .iter()
            .find(|(theme, _)| *theme == name)
            .and_then(|(_, [bg, text, prompt, echo])| {
                Some(Self {
                    background: parse_hex_color(bg)?,
                    text: parse_hex_color(text)?,
                    prompt: parse_hex_color(prompt)?,
                    echo: parse_hex_color(echo)?,
                })
            })
            .unwrap_or(Self::FALLBACK)
    }
}

/// Parse `#RRGGBB`.
pub fn parse_hex_color(s: &str) -> Option<Color> {
    let s = s.strip_prefix('#')?;
    if s.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(s.get(0..2)?, 16).ok()?;
    let g = u8::from_str_radix(s.get(2..4)?, 16).ok()?;
    let b = u8::from_str_radix(s.get(4..6)?, 16).ok()?;
    Some(Color::Rgb { r, g, b })
}

/// Rows available to the transcript on a terminal `rows` tall.
pub fn transcript_rows(rows: u16) -> usize {
    usize::from(rows.saturating_sub(1)).max(1)
}

fn fit(text: &str, cols: usize) -> String {
    text.chars().take(cols).collect()
}

/// Redraw the whole screen.
pub fn draw(
    out: &mut impl Write,
    session: &Session,
    (cols, rows): (u16, u16),
) -> io::Result<()> {
    let palette = Palette::for_theme(session.theme().active());
    let width = usize::from(cols);

    queue!(
        out,
        SetBackgroundColor(palette.background),
        Clear(ClearType::All)
    )?;

    for (row, line) in session.transcript().visible().iter().enumerate() {
        let color = match line {
            TranscriptLine::Markup(_) => palette.echo,
            TranscriptLine::Text(_) => palette.text,
        };
        queue!(
            out,
            MoveTo(0, row as u16),
            SetForegroundColor(color),
            Print(fit(&line.plain(), width))
        )?;
    }

    let prompt_row = rows.saturating_sub(1);
    let prompt = session.prompt();
    let prompt_width = prompt.chars().count() + 1;
    queue!(
        out,
        MoveTo(0, prompt_row),
        SetForegroundColor(palette.prompt),
        Print(fit(prompt, width)),
        Print(" "),
        SetForegroundColor(palette.text),
        Print(fit(session.input(), width.saturating_sub(prompt_width))),
        ResetColor
    )?;

    let cursor_col = (prompt_width + session.cursor()).min(width.saturating_sub(1));
    queue!(out, MoveTo(cursor_col as u16, prompt_row), Show)?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    use termfolio_types::config::{AVAILABLE_THEMES, TermfolioConfig};
    use termfolio_types::input::{Button, InputEvent};

    #[test]
    fn parse_hex_colors() {
        assert_eq!(
            parse_hex_color("#FF0000"),
            Some(Color::Rgb { r: 255, g: 0, b: 0 })
        );
        assert_eq!(parse_hex_color("FF0000"), None);
        assert_eq!(parse_hex_color("#GG0000"), None);
        assert_eq!(parse_hex_color("#FFF"), None);
    }

    #[test]
    fn every_theme_has_its_own_palette() {
        let mut backgrounds = Vec::new();
        for theme in AVAILABLE_THEMES {
            let palette = Palette::for_theme(theme);
            assert_ne!(palette, Palette::FALLBACK, "{theme} has no palette");
            assert!(!backgrounds.contains(&palette.background));
            backgrounds.push(palette.background);
        }
    }

    #[test]
    fn unknown_theme_falls_back() {
        assert_eq!(Palette::for_theme("neon"), Palette::FALLBACK);
    }

    #[test]
    fn transcript_leaves_room_for_prompt() {
        assert_eq!(transcript_rows(24), 23);
        assert_eq!(transcript_rows(1), 1);
        assert_eq!(transcript_rows(0), 1);
    }

    #[test]
    fn draw_shows_transcript_and_prompt() {
        let mut session = Session::new(&TermfolioConfig::default());
        let now = Instant::now();
        for c in "echo hi".chars() {
            session.handle_input(&InputEvent::TextInput(c), now);
        }
        session.handle_input(&InputEvent::ButtonPress(Button::Confirm), now);
        for c in "ab".chars() {
            session.handle_input(&InputEvent::TextInput(c), now);
        }

        let mut buf = Vec::new();
        draw(&mut buf, &session, (80, 24)).unwrap();
        let screen = String::from_utf8_lossy(&buf);
        assert!(screen.contains("visitor@portfolio:~$ echo hi"));
        assert!(screen.contains("hi"));
        assert!(screen.contains("ab"));
    }

    #[test]
    fn long_lines_are_clipped() {
        assert_eq!(fit("abcdef", 3), "abc");
        assert_eq!(fit("ab", 3), "ab");
    }
}
