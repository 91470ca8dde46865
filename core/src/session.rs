//! # Sign-in Loop
//!
//! Asks for an id and a password, opens the matching dashboard and starts
//! over once the user logs out. Typing `exit` as the id (any casing) stops
//! the loop before a password is asked for.

use tracing::info;

use crate::auth;
use crate::dashboard::{self, Exit};
use crate::registry::Registry;
use crate::terminal::Terminal;

pub const EXIT_SENTINEL: &str = "exit";

const TITLE: &str = "STUDENT COURSE REGISTRATION SYSTEM";
const CREDITS: &str = "Designed by Isha Sadiq, Muhammad Talha, Muhammad Owais";
const HINT: &str = "Type 'exit' as ID to stop system.";

pub fn run(registry: &mut Registry, terminal: &mut dyn Terminal) -> anyhow::Result<()> {
    loop {
        terminal.print_title(TITLE, &[CREDITS, HINT]);

        let Some(id) = terminal.read_token("Enter ID")? else {
            break;
        };
        if id.eq_ignore_ascii_case(EXIT_SENTINEL) {
            break;
        }
        let Some(password) = terminal.read_token("Enter Password")? else {
            break;
        };

        let identity = match auth::login(registry, &id, &password) {
            Ok(identity) => identity,
            Err(e) => {
                terminal.display_error(&e);
                continue;
            }
        };

        if let Some(user) = registry.user(identity) {
            let greeting: String = format!("Login Successful! Welcome, {}", user.account().name());
            terminal.display_success(&greeting);
        }

        info!("{id} opened the {} dashboard", identity.role());
        if dashboard::run(registry, identity, terminal)? == Exit::EndOfInput {
            break;
        }
        info!("{id} logged out");
    }

    info!("session closed");
    Ok(())
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;
    use crate::testing::ScriptedTerminal;

    #[test]
    fn exit_sentinel_ignores_case() {
        let mut registry: Registry = seed::bootstrap();
        let mut terminal: ScriptedTerminal = ScriptedTerminal::new("ExIt admin123");

        run(&mut registry, &mut terminal).unwrap();

        assert!(!terminal.printed("Enter Password"));
        assert_eq!(terminal.remaining_input(), 1);
    }

    #[test]
    fn bad_credentials_loop_back() {
        let mut registry: Registry = seed::bootstrap();
        let mut terminal: ScriptedTerminal = ScriptedTerminal::new("admin wrong exit");

        run(&mut registry, &mut terminal).unwrap();

        assert!(terminal.printed("Error: Invalid Credentials."));
        assert_eq!(terminal.count(TITLE), 2);
    }

    #[test]
    fn greets_and_returns_after_logout() {
        let mut registry: Registry = seed::bootstrap();
        let mut terminal: ScriptedTerminal = ScriptedTerminal::new("s02 owais123 4 exit");

        run(&mut registry, &mut terminal).unwrap();

        assert!(terminal.printed("Success: Login Successful! Welcome, Owais"));
        assert!(terminal.printed("--- STUDENT DASHBOARD (Owais) ---"));
        assert_eq!(terminal.count(TITLE), 2);
    }

    #[test]
    fn end_of_input_inside_dashboard_stops_everything() {
        let mut registry: Registry = seed::bootstrap();
        let mut terminal: ScriptedTerminal = ScriptedTerminal::new("admin admin123 5");

        run(&mut registry, &mut terminal).unwrap();

        assert_eq!(terminal.count(TITLE), 1);
        assert!(terminal.printed("All Teachers:"));
    }

    #[test]
    fn missing_password_stops_quietly() {
        let mut registry: Registry = seed::bootstrap();
        let mut terminal: ScriptedTerminal = ScriptedTerminal::new("admin");
        assert!(run(&mut registry, &mut terminal).is_ok());
    }
}
