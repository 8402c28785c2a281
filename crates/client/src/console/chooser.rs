//! Stdin-backed input.

use std::io::{self, BufRead, Write};

use game_core::{Chooser, Prompt};

use super::{hp_bar, skill_line};

/// Prints numbered options and reads 1-based answers.
///
/// Once input hits EOF every prompt answers with its way-out option and
/// pauses stop blocking, so a run always plays out to the end.
pub struct ConsoleChooser<R, W> {
    input: R,
    output: W,
    auto_continue: bool,
    closed: bool,
}

impl<R: BufRead, W: Write> ConsoleChooser<R, W> {
    pub fn new(input: R, output: W, auto_continue: bool) -> Self {
        Self {
            input,
            output,
            auto_continue,
            closed: false,
        }
    }

    /// Asks a free-text question; `None` on EOF or a blank answer.
    pub fn read_text(&mut self, question: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;
        let answer = self.read_line()?.map(|line| line.trim().to_owned());
        Ok(answer.filter(|text| !text.is_empty()))
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        if self.closed {
            return Ok(None);
        }
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            tracing::debug!("input closed");
            self.closed = true;
            return Ok(None);
        }
        Ok(Some(line))
    }

    fn render(&mut self, prompt: &Prompt) -> io::Result<()> {
        let out = &mut self.output;
        match prompt {
            Prompt::ChooseSkill { actor, skills } => {
                writeln!(out, "\nWhat should {} do?", actor.name)?;
                for (i, skill) in skills.iter().enumerate() {
                    writeln!(out, "[{}] {}", i + 1, skill_line(skill))?;
                }
                writeln!(out, "[{}] Pass", skills.len() + 1)?;
            }
            Prompt::ChooseTarget { candidates, .. } => {
                writeln!(out, "\nChoose a target:")?;
                for (i, candidate) in candidates.iter().enumerate() {
                    writeln!(out, "[{}] {} {}", i + 1, candidate.name, hp_bar(candidate))?;
                }
                writeln!(out, "[{}] Back", candidates.len() + 1)?;
            }
            Prompt::ConfirmGroup { members, .. } => {
                writeln!(out, "\nChoose a target:\n[1] All")?;
                for member in members {
                    writeln!(out, "{} {}", member.name, hp_bar(member))?;
                }
                writeln!(out, "\n[2] Back")?;
            }
            Prompt::YesNo { question } => {
                writeln!(out, "{}\n[1] Yes\n[2] No", question)?;
            }
        }
        Ok(())
    }

    fn ask(&mut self, prompt: &Prompt) -> io::Result<usize> {
        self.render(prompt)?;
        let options = prompt.option_count();
        loop {
            write!(self.output, "Option: ")?;
            self.output.flush()?;
            let Some(line) = self.read_line()? else {
                return Ok(prompt.cancel_index());
            };
            match line.trim().parse::<usize>() {
                Ok(picked) if (1..=options).contains(&picked) => return Ok(picked - 1),
                Ok(_) => writeln!(self.output, "value out of range!")?,
                Err(_) => writeln!(self.output, "Value is not valid!")?,
            }
        }
    }
}

impl<R: BufRead, W: Write> Chooser for ConsoleChooser<R, W> {
    fn select(&mut self, prompt: &Prompt) -> usize {
        self.ask(prompt).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "console input failed, taking the way out");
            self.closed = true;
            prompt.cancel_index()
        })
    }

    fn acknowledge(&mut self) {
        if self.auto_continue || self.closed {
            return;
        }
        let waited = writeln!(self.output, "\nPress enter to continue")
            .and_then(|_| self.output.flush())
            .and_then(|_| self.read_line());
        if let Err(e) = waited {
            tracing::warn!(error = %e, "console input failed");
            self.closed = true;
        }
    }
}
