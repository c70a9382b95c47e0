//! Console output: progress bars, prompts and message formatting

mod progress;
mod prompt;

pub use progress::{progress_callback, CopyProgress};
pub use prompt::{ConsolePrompt, Prompt};

/// Blank-line framed row of `=` used around the completion banner
pub fn separator() -> String {
    format!("\n{}\n", "=".repeat(80))
}
