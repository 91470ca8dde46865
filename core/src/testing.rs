//! A [`Terminal`] fed from a fixed script, for driving whole sessions in tests.

use std::collections::VecDeque;

use registrar_common::RegistrarError;

use crate::terminal::Terminal;

/// Replays pre-split input tokens and records every rendered line as plain text.
#[derive(Debug, Default)]
pub struct ScriptedTerminal {
    input: VecDeque<String>,
    output: Vec<String>,
}

impl ScriptedTerminal {
    /// Splits `script` on whitespace, the same way the console reads tokens.
    pub fn new(script: &str) -> Self {
        Self {
            input: script.split_whitespace().map(str::to_string).collect(),
            output: Vec::new(),
        }
    }

    /// Appends a single token verbatim, which may be empty or contain spaces.
    pub fn push_token(&mut self, token: impl Into<String>) -> &mut Self {
        self.input.push_back(token.into());
        self
    }

    pub fn output(&self) -> &[String] {
        &self.output
    }

    pub fn transcript(&self) -> String {
        self.output.join("\n")
    }

    pub fn printed(&self, needle: &str) -> bool {
        self.output.iter().any(|line| line.contains(needle))
    }

    /// Number of rendered lines containing `needle`.
    pub fn count(&self, needle: &str) -> usize {
        self.output.iter().filter(|line| line.contains(needle)).count()
    }

    pub fn remaining_input(&self) -> usize {
        self.input.len()
    }
}

impl Terminal for ScriptedTerminal {
    fn read_token(&mut self, prompt: &str) -> anyhow::Result<Option<String>> {
        self.output.push(format!("{prompt}: "));
        Ok(self.input.pop_front())
    }

    fn print_title(&mut self, title: &str, lines: &[&str]) {
        self.output.push(title.to_string());
        self.output.extend(lines.iter().map(|l| l.to_string()));
    }

    fn print_header(&mut self, title: &str) {
        self.output.push(format!("--- {title} ---"));
    }

    fn print_menu(&mut self, options: &[&str]) {
        for (i, option) in options.iter().enumerate() {
            self.output.push(format!("{}. {option}", i + 1));
        }
    }

    fn print_line(&mut self, text: &str) {
        self.output.push(text.to_string());
    }

    fn print_entry(&mut self, text: &str) {
        self.output.push(format!("  - {text}"));
    }

    fn display_success(&mut self, text: &str) {
        self.output.push(format!("Success: {text}"));
    }

    fn display_notice(&mut self, text: &str) {
        self.output.push(text.to_string());
    }

    fn display_error(&mut self, err: &RegistrarError) {
        self.output.push(format!("Error: {err}"));
    }
}
