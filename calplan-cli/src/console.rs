use std::io::{self, BufRead, Write};

use calplan_core::questionnaire::Prompter;

/// Blocking stdin/stdout prompter. Follow-up questions are written on
/// their own line, matching the questionnaire wording.
pub struct ConsolePrompter;

impl ConsolePrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConsolePrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for ConsolePrompter {
    fn ask(&self, question: &str) -> io::Result<String> {
        let mut stdout = io::stdout();
        writeln!(stdout, "{}", question)?;
        stdout.flush()?;
        read_answer()
    }
}

/// Write an inline field prompt and read one line. Returns `None` on
/// end of input so the surrounding loop can terminate cleanly.
pub fn prompt_field(prompt: &str) -> io::Result<Option<String>> {
    let mut stdout = io::stdout();
    write!(stdout, "{}", prompt)?;
    stdout.flush()?;

    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn read_answer() -> io::Result<String> {
    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input closed before the questionnaire finished",
        ));
    }
    Ok(line.trim().to_string())
}
