use colored::*;
use console::Term;
use registrar_common::config::Config;
use unicode_width::UnicodeWidthStr;

use crate::terminal::colors;

pub const TOTAL_WIDTH: usize = 64;

#[macro_export]
macro_rules! mprint {
    () => {
        $crate::terminal::print::print("");
    };
    ($msg:expr) => {
        $crate::terminal::print::print($msg);
    };
}

const BANNER_0: &str = r#"
  ████   █████   ████  ███   ████  █████  ████    ███   ████
  █   █  █      █       █   █        █    █   █  █   █  █   █
  ████   ████   █  ██   █    ███     █    ████   █████  ████
  █  █   █      █   █   █       █    █    █  █   █   █  █  █
  █   █  █████   ████  ███  ████     █    █   █  █   █  █   █
"#;

const BANNER_1: &str = r#"
  ▓▓▓▓   ▓▓▓▓▓   ▓▓▓▓  ▓▓▓   ▓▓▓▓  ▓▓▓▓▓  ▓▓▓▓    ▓▓▓   ▓▓▓▓
  ▓   ▓  ▓      ▓       ▓   ▓        ▓    ▓   ▓  ▓   ▓  ▓   ▓
  ▓▓▓▓   ▓▓▓▓   ▓  ▓▓   ▓    ▓▓▓     ▓    ▓▓▓▓   ▓▓▓▓▓  ▓▓▓▓
  ▓  ▓   ▓      ▓   ▓   ▓       ▓    ▓    ▓  ▓   ▓   ▓  ▓  ▓
  ▓   ▓  ▓▓▓▓▓   ▓▓▓▓  ▓▓▓  ▓▓▓▓     ▓    ▓   ▓  ▓   ▓  ▓   ▓
"#;

pub fn print(msg: &str) {
    let _ = Term::stdout().write_line(msg);
}

/// Writes without a trailing newline so the answer lands on the same line.
pub fn prompt(label: &str) {
    let term: Term = Term::stdout();
    let _ = term.write_str(&format!("{} ", format!("{label}:").color(colors::ACCENT)));
    let _ = term.flush();
}

pub fn banner(cfg: &Config) {
    if cfg.no_banner || cfg.quiet > 0 {
        return;
    }

    let text_content: String = format!("⟦ REGISTRAR v{} ⟧ ", env!("CARGO_PKG_VERSION"));
    let text_width: usize = UnicodeWidthStr::width(text_content.as_str());
    let text: ColoredString = text_content.bright_green().bold();
    let sep: ColoredString = "═".repeat((TOTAL_WIDTH - text_width) / 2).bright_black();

    print(&format!("{}{}{}", sep, text, sep));

    match rand::random_range(0..=1u8) {
        0 => print(&format!("{}", BANNER_0.green())),
        _ => print(&format!("{}", BANNER_1.truecolor(80, 160, 220))),
    }
}

pub fn header(msg: &str, q_level: u8) {
    if q_level > 0 {
        print(&format!("--- {msg} ---"));
        return;
    }

    let formatted: String = format!("⟦ {} ⟧", msg);
    let msg_len: usize = UnicodeWidthStr::width(formatted.as_str());

    let dash_count: usize = TOTAL_WIDTH.saturating_sub(msg_len);
    let left: usize = dash_count / 2;
    let right: usize = dash_count - left;

    let line: ColoredString = format!(
        "{}{}{}",
        "─".repeat(left),
        formatted.to_uppercase().bright_green(),
        "─".repeat(right)
    )
    .bright_black();

    print(&format!("{}", line));
}

pub fn fat_separator() {
    let sep: ColoredString = "═".repeat(TOTAL_WIDTH).bright_black();
    print(&format!("{}", sep));
}

pub fn centerln(msg: &str) {
    let space: String =
        " ".repeat(TOTAL_WIDTH.saturating_sub(console::measure_text_width(msg)) / 2);
    print(&format!("{}{}", space, msg));
}

/// The title block shown above every sign-in prompt.
pub fn title(title: &str, lines: &[&str], q_level: u8) {
    if q_level > 1 {
        return;
    }

    mprint!();
    if q_level > 0 {
        print(title);
        lines.iter().for_each(|line| print(line));
        return;
    }

    fat_separator();
    centerln(&format!("{}", title.color(colors::PRIMARY).bold()));
    for line in lines {
        centerln(&format!("{}", line.color(colors::TEXT_DEFAULT).dimmed()));
    }
    fat_separator();
}

pub fn menu(options: &[&str]) {
    for (idx, option) in options.iter().enumerate() {
        let idx_str: String = format!("[{}]", (idx + 1).to_string().color(colors::ACCENT));
        print(&format!(
            "{} {}",
            idx_str.color(colors::SEPARATOR),
            option.color(colors::TEXT_DEFAULT)
        ));
    }
}

pub fn print_status<T: AsRef<str>>(msg: T) {
    let prefix: ColoredString = ">".color(colors::SEPARATOR);
    print(&format!("{} {}", prefix, msg.as_ref().color(colors::TEXT_DEFAULT)));
}

pub fn tree_leaf(msg: &str) {
    print(&format!(" {} {}", "├─".bright_black(), msg.color(colors::TEXT_DEFAULT)));
}

pub fn success(msg: &str) {
    print(&format!("{} {}", "[+]".green().bold(), msg.color(colors::SUCCESS)));
}

pub fn notice(msg: &str) {
    print(&format!("{} {}", "[*]".yellow().bold(), msg.color(colors::NOTICE)));
}

pub fn failure(msg: &str) {
    print(&format!("{} {}", "[-]".red().bold(), msg.color(colors::ERROR)));
}

pub fn end_of_program() {
    print(&format!(
        "{}",
        "═".repeat(TOTAL_WIDTH).color(colors::SEPARATOR)
    ));
}
