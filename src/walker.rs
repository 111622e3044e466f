use crate::error::WalkError;
use crate::model::Step;
use crate::nav::{NavCode, COMMANDS, DEFAULT_COMMAND};
use crate::prompt::Prompt;
use crossterm::style::{style, Stylize};
use log::debug;
use std::io::Write;

const PROMPT: &str = ">> ";

/// Walks a step tree depth-first, asking the user how to move at every leaf.
pub struct Walker<P: Prompt, W: Write> {
    prompt: P,
    out: W,
    styled: bool,
}

impl<P: Prompt, W: Write> Walker<P, W> {
    pub fn new(prompt: P, out: W) -> Self {
        Self {
            prompt,
            out,
            styled: false,
        }
    }

    /// Render descriptions in bold and the help banner in colour.
    pub fn styled(mut self, styled: bool) -> Self {
        self.styled = styled;
        self
    }

    /// Print the step itself. Leaves then wait for a command; parents return `Next`.
    pub fn show(&mut self, step: &Step) -> Result<NavCode, WalkError> {
        if self.styled {
            writeln!(self.out, "{}", style(&step.description).bold())?;
        } else {
            writeln!(self.out, "{}", step.description)?;
        }
        if !step.info.is_empty() {
            writeln!(self.out, "{}", step.info)?;
        }

        if !step.is_leaf() {
            return Ok(NavCode::Next);
        }

        loop {
            self.out.flush()?;
            let c = self.prompt.pick(PROMPT, DEFAULT_COMMAND, &COMMANDS)?;
            match NavCode::from_command(c) {
                Some(NavCode::Help) => self.write_help(step)?,
                Some(code) => return Ok(code),
                None => continue,
            }
        }
    }

    fn write_help(&mut self, step: &Step) -> Result<(), WalkError> {
        if step.help.is_empty() {
            writeln!(self.out, "no help available")?;
            return Ok(());
        }
        if self.styled {
            writeln!(self.out, "{}", style("--- help message ---").cyan())?;
        } else {
            writeln!(self.out, "--- help message ---")?;
        }
        writeln!(self.out, "{}", step.help)?;
        Ok(())
    }

    /// Show the step, then its children one at a time, following the
    /// user's commands. Returns `Next` once the children are exhausted.
    pub fn play(&mut self, step: &Step) -> Result<NavCode, WalkError> {
        let code = self.show(step)?;
        let total = step.children.len();
        if total == 0 {
            return Ok(code);
        }

        let mut pos = 0;
        loop {
            let code = self.play(&step.children[pos])?;
            let from = pos;
            match code {
                NavCode::Next => pos = step.next(pos, 1),
                NavCode::End => return Ok(NavCode::Next),
                NavCode::Previous => pos = step.previous(pos, 1),
                NavCode::StartOver => pos = 0,
                NavCode::Quit => return self.quit(),
                // show() answers help itself; the cursor stays put.
                NavCode::Help => {}
            }
            debug!(
                "{:?} in '{}': child {} -> {} of {}",
                code, step.description, from, pos, total
            );
            if pos >= total {
                return Ok(NavCode::Next);
            }
        }
    }

    /// Raise the quit signal. Nothing below the driver catches it.
    pub fn quit(&self) -> Result<NavCode, WalkError> {
        Err(WalkError::Quit)
    }
}
