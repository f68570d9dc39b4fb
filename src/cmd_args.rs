use std::ffi::OsString;

pub use clap::Parser;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct ClapArgs {
    /// Display refresh interval while the timer runs.
    /// Optional. Overrides LAPLINE_TICK_MS; values are clamped to 5..=1000.
    #[clap(short = 't', long = "tick-rate", help = "tick interval in milliseconds")]
    tick_rate: Option<u64>,

    /// Verbose logging on stderr.
    /// Optional. Equivalent to LAPLINE_LOG_LEVEL=debug when that variable is unset.
    #[clap(short = 'v', long, help = "enable verbose logging")]
    verbose: bool,
}

#[derive(Debug, Clone)]
pub struct CommandLineArgs {
    tick_rate: Option<u64>,
    verbose: bool,
}

impl CommandLineArgs {
    pub fn parse() -> Self {
        let args = ClapArgs::parse();
        Self {
            tick_rate: args.tick_rate,
            verbose: args.verbose,
        }
    }

    pub fn parse_from<I, T>(itr: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let args = ClapArgs::parse_from(itr);
        Self {
            tick_rate: args.tick_rate,
            verbose: args.verbose,
        }
    }

    pub fn tick_rate_ms(&self) -> Option<u64> {
        self.tick_rate
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }
}
