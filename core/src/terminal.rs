//! # Terminal Port
//!
//! Everything the dashboards need from the outside world: reading the next
//! input token and showing results. The binary implements it on top of
//! stdin/stdout, tests implement it with a fixed script.

use registrar_common::RegistrarError;

pub trait Terminal {
    /// Reads the next whitespace-delimited token after showing `prompt`.
    ///
    /// Returns `Ok(None)` once input is exhausted.
    fn read_token(&mut self, prompt: &str) -> anyhow::Result<Option<String>>;

    /// Title block shown before every sign-in.
    fn print_title(&mut self, title: &str, lines: &[&str]);

    fn print_header(&mut self, title: &str);

    /// Numbered menu, the first option being choice `1`.
    fn print_menu(&mut self, options: &[&str]);

    fn print_line(&mut self, text: &str);

    /// An indented member of the list printed just before it.
    fn print_entry(&mut self, text: &str);

    fn display_success(&mut self, text: &str);

    /// Informational outcome that is neither a success nor a failure.
    fn display_notice(&mut self, text: &str);

    fn display_error(&mut self, err: &RegistrarError);
}
