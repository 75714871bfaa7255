use stderrlog::{LogLevelNum, Timestamp};

/// Logging options shared by every command
#[derive(clap::Args, Debug)]
pub struct LogArgs {
    /// Silence log messages
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Show more log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Prefix log lines with a timestamp
    #[arg(long, global = true)]
    pub ts: bool,
}

impl LogArgs {
    /// Install the stderr logger; warnings and errors show by default
    pub fn setup_logging(&self) -> Result<(), log::SetLoggerError> {
        let level = match self.verbose {
            0 => LogLevelNum::Warn,
            1 => LogLevelNum::Info,
            2 => LogLevelNum::Debug,
            _ => LogLevelNum::Trace,
        };

        stderrlog::new()
            .module("regexlab_core")
            .module("regexlab")
            .quiet(self.quiet)
            .verbosity(level)
            .timestamp(if self.ts {
                Timestamp::Second
            } else {
                Timestamp::Off
            })
            .init()
    }
}
