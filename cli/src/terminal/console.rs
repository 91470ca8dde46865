//! The [`Terminal`] the binary runs on: tokens from any buffered reader
//! (stdin in practice), rendering through [`print`].
//!
//! Input is consumed one whitespace-delimited token at a time. A line holding
//! several tokens answers several prompts in a row, and blank lines are
//! skipped until a token shows up. Bytes that are not UTF-8 decode to U+FFFD,
//! so a garbled line reaches the prompt as an ordinary bad answer.

use std::borrow::Cow;
use std::collections::VecDeque;
use std::io::BufRead;

use anyhow::Context;
use registrar_common::RegistrarError;
use tracing::warn;
use registrar_common::config::Config;
use registrar_core::terminal::Terminal;

use crate::terminal::print;

pub struct ConsoleTerminal<R> {
    input: R,
    pending: VecDeque<String>,
    quiet: u8,
}

impl<R: BufRead> ConsoleTerminal<R> {
    pub fn new(input: R, cfg: &Config) -> Self {
        Self {
            input,
            pending: VecDeque::new(),
            quiet: cfg.quiet,
        }
    }

    fn next_token(&mut self) -> anyhow::Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }

            let mut raw: Vec<u8> = Vec::new();
            let read: usize = self
                .input
                .read_until(b'\n', &mut raw)
                .context("failed to read from standard input")?;
            if read == 0 {
                return Ok(None);
            }

            let line = String::from_utf8_lossy(&raw);
            if let Cow::Owned(_) = line {
                warn!("input line was not valid UTF-8");
            }
            self.pending.extend(line.split_whitespace().map(str::to_string));
        }
    }
}

impl<R: BufRead> Terminal for ConsoleTerminal<R> {
    fn read_token(&mut self, prompt: &str) -> anyhow::Result<Option<String>> {
        print::prompt(prompt);
        let token: Option<String> = self.next_token()?;
        if token.is_none() {
            crate::mprint!();
        }
        Ok(token)
    }

    fn print_title(&mut self, title: &str, lines: &[&str]) {
        print::title(title, lines, self.quiet);
    }

    fn print_header(&mut self, title: &str) {
        crate::mprint!();
        print::header(title, self.quiet);
    }

    fn print_menu(&mut self, options: &[&str]) {
        print::menu(options);
    }

    fn print_line(&mut self, text: &str) {
        print::print_status(text);
    }

    fn print_entry(&mut self, text: &str) {
        print::tree_leaf(text);
    }

    fn display_success(&mut self, text: &str) {
        print::success(text);
    }

    fn display_notice(&mut self, text: &str) {
        print::notice(text);
    }

    fn display_error(&mut self, err: &RegistrarError) {
        print::failure(&format!("Error: {err}"));
    }
}
