mod commands;
mod terminal;

use std::io;

use commands::CommandLine;
use registrar_common::config::Config;
use registrar_core::{registry::Registry, seed, session};
use terminal::console::ConsoleTerminal;
use terminal::{logging, print};
use tracing::info;

fn main() -> anyhow::Result<()> {
    let cfg: Config = CommandLine::parse_args().into_config();

    logging::init_logging(&cfg)?;
    print::banner(&cfg);

    let mut registry: Registry = seed::bootstrap();
    info!(
        "loaded {} courses, {} teachers and {} students",
        registry.courses.len(),
        registry.teachers.len(),
        registry.students.len()
    );

    let stdin = io::stdin();
    let mut console: ConsoleTerminal<_> = ConsoleTerminal::new(stdin.lock(), &cfg);
    session::run(&mut registry, &mut console)?;

    print::end_of_program();
    Ok(())
}
