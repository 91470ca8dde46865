//! # Role Dashboards
//!
//! Each kind of user gets its own menu loop. A loop runs until the user picks
//! "Logout" or input runs out, and the caller learns which of the two happened
//! through [`Exit`].

use registrar_common::RegistrarError;

use crate::registry::{Identity, Registry};
use crate::terminal::Terminal;

/// Reads one token or leaves the surrounding dashboard when input is exhausted.
macro_rules! prompt {
    ($terminal:expr, $label:expr) => {
        match $terminal.read_token($label)? {
            Some(token) => token,
            None => return Ok($crate::dashboard::Exit::EndOfInput),
        }
    };
}

pub mod admin;
pub mod student;
pub mod teacher;

/// Why a dashboard loop returned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Exit {
    /// The user chose to log out; the sign-in loop carries on.
    Logout,
    /// Nothing left to read; the whole session ends.
    EndOfInput,
}

/// A menu entry of one dashboard, listed in [`MenuAction::ALL`] order.
pub trait MenuAction: Copy + 'static {
    const ALL: &'static [Self];

    fn label(self) -> &'static str;
}

/// Maps a typed menu number (starting at `1`) onto an action.
pub fn parse_choice<A: MenuAction>(token: &str) -> Result<A, RegistrarError> {
    token
        .trim()
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|idx| A::ALL.get(idx))
        .copied()
        .ok_or_else(|| RegistrarError::InvalidChoice(token.to_string()))
}

/// Shows the menu until a valid choice is typed.
///
/// Returns `Ok(None)` when input runs out first.
pub(crate) fn choose<A: MenuAction>(
    terminal: &mut dyn Terminal,
    title: &str,
) -> anyhow::Result<Option<A>> {
    let labels: Vec<&str> = A::ALL.iter().map(|a| a.label()).collect();

    loop {
        terminal.print_header(title);
        terminal.print_menu(&labels);

        let Some(token) = terminal.read_token("Choice")? else {
            return Ok(None);
        };

        match parse_choice::<A>(&token) {
            Ok(action) => return Ok(Some(action)),
            Err(e) => terminal.display_error(&e),
        }
    }
}

/// Hands the signed-in user over to the dashboard of their kind.
pub fn run(
    registry: &mut Registry,
    identity: Identity,
    terminal: &mut dyn Terminal,
) -> anyhow::Result<Exit> {
    match identity {
        Identity::Admin(_) => admin::run(registry, terminal),
        Identity::Teacher(idx) => teacher::run(registry, idx, terminal),
        Identity::Student(idx) => student::run(registry, idx, terminal),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::student::StudentAction;
    use crate::testing::ScriptedTerminal;

    #[test]
    fn choices_are_one_based() {
        assert_eq!(parse_choice::<StudentAction>("1"), Ok(StudentAction::ViewCourses));
        assert_eq!(parse_choice::<StudentAction>(" 4 "), Ok(StudentAction::Logout));
    }

    #[test]
    fn out_of_range_and_garbage_are_invalid() {
        for token in ["0", "5", "-1", "two", ""] {
            assert_eq!(
                parse_choice::<StudentAction>(token),
                Err(RegistrarError::InvalidChoice(token.to_string()))
            );
        }
    }

    #[test]
    fn menu_repeats_after_invalid_choice() {
        let mut terminal: ScriptedTerminal = ScriptedTerminal::new("abc 9 3");

        let action = choose::<StudentAction>(&mut terminal, "STUDENT DASHBOARD").unwrap();

        assert_eq!(action, Some(StudentAction::ViewGrades));
        assert_eq!(terminal.count("--- STUDENT DASHBOARD ---"), 3);
        assert_eq!(terminal.count("Invalid choice"), 2);
    }

    #[test]
    fn exhausted_input_yields_none() {
        let mut terminal: ScriptedTerminal = ScriptedTerminal::new("");
        let action = choose::<StudentAction>(&mut terminal, "STUDENT DASHBOARD").unwrap();
        assert_eq!(action, None);
    }
}
