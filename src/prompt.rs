use crate::error::WalkError;
use crossterm::tty::IsTty;
use dialoguer::theme::Theme;
use dialoguer::Input;
use std::fmt;
use std::io::{self, BufRead, Write};

/// Source of single-character commands for leaf steps.
pub trait Prompt {
    /// Ask until the answer is one of `allowed`. Empty input yields `default`.
    fn pick(&mut self, prompt: &str, default: char, allowed: &[char]) -> Result<char, WalkError>;
}

/// Interpret one raw input line. `None` means the line must be asked again.
pub fn pick_value(raw: &str, default: char, allowed: &[char]) -> Option<char> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Some(default);
    }

    let mut chars = trimmed.chars();
    let c = chars.next()?.to_ascii_lowercase();
    if chars.next().is_some() {
        return None;
    }
    allowed.contains(&c).then_some(c)
}

/// Prints the prompt exactly as given, without the `: ` suffix of the default theme.
pub struct PlainTheme;

impl Theme for PlainTheme {
    fn format_input_prompt(
        &self,
        f: &mut dyn fmt::Write,
        prompt: &str,
        _default: Option<&str>,
    ) -> fmt::Result {
        write!(f, "{}", prompt)
    }

    fn format_input_prompt_selection(
        &self,
        f: &mut dyn fmt::Write,
        prompt: &str,
        sel: &str,
    ) -> fmt::Result {
        write!(f, "{}{}", prompt, sel)
    }
}

/// Reads commands from the user's terminal, or line by line from stdin
/// when it is piped.
pub struct TerminalPrompt;

impl Prompt for TerminalPrompt {
    fn pick(&mut self, prompt: &str, default: char, allowed: &[char]) -> Result<char, WalkError> {
        if !(io::stdin().is_tty() && io::stderr().is_tty()) {
            let stdin = io::stdin();
            return LinePrompt::new(stdin.lock(), io::stderr()).pick(prompt, default, allowed);
        }

        let choices: String = allowed.iter().collect();
        let raw: String = Input::with_theme(&PlainTheme)
            .with_prompt(prompt)
            .allow_empty(true)
            .validate_with(|input: &String| -> Result<(), String> {
                match pick_value(input, default, allowed) {
                    Some(_) => Ok(()),
                    None => Err(format!("Please enter one of [{}]", choices)),
                }
            })
            .interact_text()?;

        Ok(pick_value(&raw, default, allowed).unwrap_or(default))
    }
}

/// Reads one answer per line from any buffered reader, echoing the prompt to `echo`.
pub struct LinePrompt<R: BufRead, E: Write> {
    input: R,
    echo: E,
}

impl<R: BufRead, E: Write> LinePrompt<R, E> {
    pub fn new(input: R, echo: E) -> Self {
        Self { input, echo }
    }
}

impl<R: BufRead, E: Write> Prompt for LinePrompt<R, E> {
    fn pick(&mut self, prompt: &str, default: char, allowed: &[char]) -> Result<char, WalkError> {
        loop {
            write!(self.echo, "{}", prompt)?;
            self.echo.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "no more input").into());
            }
            if let Some(c) = pick_value(&line, default, allowed) {
                return Ok(c);
            }
            let choices: String = allowed.iter().collect();
            writeln!(self.echo, "Please enter one of [{}]", choices)?;
        }
    }
}

/// Replays canned input lines, as a user typing them would.
#[cfg(test)]
pub struct ScriptedPrompt {
    lines: std::collections::VecDeque<String>,
    pub asked: usize,
}

#[cfg(test)]
impl ScriptedPrompt {
    pub fn new(lines: &[&str]) -> Self {
        Self {
            lines: lines.iter().map(|l| l.to_string()).collect(),
            asked: 0,
        }
    }

    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

#[cfg(test)]
impl Prompt for ScriptedPrompt {
    fn pick(&mut self, _prompt: &str, default: char, allowed: &[char]) -> Result<char, WalkError> {
        while let Some(line) = self.lines.pop_front() {
            self.asked += 1;
            if let Some(c) = pick_value(&line, default, allowed) {
                return Ok(c);
            }
        }
        Err(std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "input script exhausted").into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALLOWED: [char; 3] = ['n', 'p', 'q'];

    #[test]
    fn empty_input_takes_default() {
        assert_eq!(pick_value("", 'n', &ALLOWED), Some('n'));
        assert_eq!(pick_value("   \t", 'n', &ALLOWED), Some('n'));
    }

    #[test]
    fn accepts_allowed_char_trimmed_any_case() {
        assert_eq!(pick_value(" p ", 'n', &ALLOWED), Some('p'));
        assert_eq!(pick_value("Q", 'n', &ALLOWED), Some('q'));
    }

    #[test]
    fn rejects_unknown_or_long_input() {
        assert_eq!(pick_value("x", 'n', &ALLOWED), None);
        assert_eq!(pick_value("next", 'n', &ALLOWED), None);
        assert_eq!(pick_value("é", 'n', &ALLOWED), None);
    }

    #[test]
    fn line_prompt_reads_piped_input() {
        let input = std::io::Cursor::new("next\n\nP\n");
        let mut echo = Vec::new();
        let mut prompt = LinePrompt::new(input, &mut echo);

        assert_eq!(prompt.pick(">> ", 'n', &ALLOWED).unwrap(), 'n');
        assert_eq!(prompt.pick(">> ", 'n', &ALLOWED).unwrap(), 'p');
        let err = prompt.pick(">> ", 'n', &ALLOWED).unwrap_err();
        assert!(matches!(err, WalkError::Io(ref e) if e.kind() == std::io::ErrorKind::UnexpectedEof));

        let echoed = String::from_utf8(echo).unwrap();
        assert_eq!(
            echoed,
            ">> Please enter one of [npq]\n>> >> >> "
        );
    }

    #[test]
    fn plain_theme_keeps_prompt_verbatim() {
        let mut rendered = String::new();
        PlainTheme
            .format_input_prompt(&mut rendered, ">> ", None)
            .unwrap();
        assert_eq!(rendered, ">> ");

        let mut rendered = String::new();
        PlainTheme
            .format_input_prompt_selection(&mut rendered, ">> ", "q")
            .unwrap();
        assert_eq!(rendered, ">> q");
    }

    #[test]
    fn scripted_prompt_skips_invalid_lines() {
        let mut prompt = ScriptedPrompt::new(&["zz", "", "p"]);
        assert_eq!(prompt.pick(">> ", 'n', &ALLOWED).unwrap(), 'n');
        assert_eq!(prompt.asked, 2);
        assert_eq!(prompt.pick(">> ", 'n', &ALLOWED).unwrap(), 'p');
        assert_eq!(prompt.remaining(), 0);
    }

    #[test]
    fn scripted_prompt_runs_dry() {
        let mut prompt = ScriptedPrompt::new(&[]);
        let err = prompt.pick(">> ", 'n', &ALLOWED).unwrap_err();
        assert!(matches!(err, WalkError::Io(ref e) if e.kind() == std::io::ErrorKind::UnexpectedEof));
    }
}
