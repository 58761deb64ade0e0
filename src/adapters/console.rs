use crate::domain::ports::Console;
use crate::utils::error::{OrderError, Result};
use std::collections::VecDeque;
use std::io::{BufRead, Write};

/// Console over any reader/writer pair; `stdio()` wires it to the terminal.
pub struct LineConsole<R: BufRead, W: Write> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LineConsole<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl LineConsole<std::io::StdinLock<'static>, std::io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(std::io::stdin().lock(), std::io::stdout())
    }
}

impl<R: BufRead, W: Write> Console for LineConsole<R, W> {
    fn prompt(&mut self, label: &str) -> Result<String> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(OrderError::InputClosedError {
                prompt: label.trim().to_string(),
            });
        }

        let trimmed_len = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed_len);
        Ok(line)
    }

    fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }
}

/// Test double that answers prompts from a script and records everything shown.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    answers: VecDeque<String>,
    prompts: Vec<String>,
    transcript: String,
}

impl ScriptedConsole {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            prompts: Vec::new(),
            transcript: String::new(),
        }
    }

    pub fn transcript(&self) -> &str {
        &self.transcript
    }

    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    pub fn remaining_answers(&self) -> usize {
        self.answers.len()
    }
}

impl Console for ScriptedConsole {
    fn prompt(&mut self, label: &str) -> Result<String> {
        self.prompts.push(label.to_string());
        self.transcript.push_str(label);

        let answer = self
            .answers
            .pop_front()
            .ok_or_else(|| OrderError::InputClosedError {
                prompt: label.trim().to_string(),
            })?;
        self.transcript.push_str(&answer);
        self.transcript.push('\n');
        Ok(answer)
    }

    fn say(&mut self, text: &str) -> Result<()> {
        self.transcript.push_str(text);
        self.transcript.push('\n');
        Ok(())
    }
}
