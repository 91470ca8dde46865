use clap::{ArgAction, Parser};
use registrar_common::config::Config;

#[derive(Parser, Debug)]
#[command(name = "registrar")]
#[command(about = "An in-memory course registration console.")]
#[command(version)]
pub struct CommandLine {
    /// Skip the start-up banner
    #[arg(long)]
    pub no_banner: bool,

    /// Less decoration (-q hides the banner and fancy headers, -qq also the title block)
    #[arg(short, long, action = ArgAction::Count)]
    pub quiet: u8,

    /// More log output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn into_config(self) -> Config {
        Config {
            no_banner: self.no_banner,
            quiet: self.quiet,
            verbose: self.verbose,
        }
    }
}
