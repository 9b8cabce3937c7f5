use colored::*;

pub struct ColorScheme;

impl ColorScheme {
    pub fn new(use_colors: bool) -> Self {
        if !use_colors {
            colored::control::set_override(false);
        }
        Self
    }

    pub fn location(&self, text: &str) -> ColoredString {
        text.yellow()
    }

    pub fn algorithm(&self, text: &str) -> ColoredString {
        text.cyan().bold()
    }

    pub fn success(&self, text: &str) -> ColoredString {
        text.green()
    }

    pub fn warning(&self, text: &str) -> ColoredString {
        text.magenta()
    }

    pub fn error(&self, text: &str) -> ColoredString {
        text.red()
    }

    pub fn step_number(&self, text: &str) -> ColoredString {
        text.blue()
    }

    pub fn number(&self, text: &str) -> ColoredString {
        text.green()
    }

    pub fn stats(&self, text: &str) -> ColoredString {
        text.blue()
    }

    pub fn rule(&self, text: &str) -> ColoredString {
        text.dimmed()
    }
}
