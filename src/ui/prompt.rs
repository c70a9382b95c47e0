//! Blocking "Press Enter" prompts

use console::Term;
use std::io;

/// Something that can stop the run until the user acknowledges
pub trait Prompt {
    /// Show `message` and block until the user presses Enter
    fn acknowledge(&mut self, message: &str) -> io::Result<()>;
}

/// Prompt on the real terminal
#[derive(Debug)]
pub struct ConsolePrompt {
    term: Term,
}

impl ConsolePrompt {
    pub fn new() -> Self {
        Self {
            term: Term::stdout(),
        }
    }
}

impl Default for ConsolePrompt {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompt for ConsolePrompt {
    fn acknowledge(&mut self, message: &str) -> io::Result<()> {
        self.term.write_str(message)?;
        self.term.flush()?;

        if self.term.is_term() {
            self.term.read_line()?;
        } else {
            // Piped or closed stdin: a newline or EOF both count as Enter.
            let mut line = String::new();
            io::stdin().read_line(&mut line)?;
            println!();
        }
        Ok(())
    }
}
