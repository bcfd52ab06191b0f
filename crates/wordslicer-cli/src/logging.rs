use stderrlog::Timestamp;

/// Logging setup arg group.
#[derive(clap::Args, Debug)]
pub struct LogArgs {
    /// Silence log messages.
    #[clap(short, long)]
    pub quiet: bool,

    /// Raise verbosity above warnings (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, default_value = None)]
    verbose: Option<u8>,

    /// Enable timestamped logging.
    #[clap(short, long)]
    pub ts: bool,
}

impl LogArgs {
    /// The verbosity level; each `-v` raises `default` by one.
    fn level(
        &self,
        default: u8,
    ) -> u8 {
        match self.verbose {
            Some(verbose) if verbose > 0 => verbose.saturating_add(default),
            _ => default,
        }
    }

    /// Initialize `stderrlog`; `default` is the level used without `-v`.
    pub fn setup_logging(
        &self,
        default: u8,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let log_level = match self.level(default) {
            0 => stderrlog::LogLevelNum::Off,
            1 => stderrlog::LogLevelNum::Error,
            2 => stderrlog::LogLevelNum::Warn,
            3 => stderrlog::LogLevelNum::Info,
            4 => stderrlog::LogLevelNum::Debug,
            _ => stderrlog::LogLevelNum::Trace,
        };

        stderrlog::new()
            .quiet(self.quiet)
            .verbosity(log_level)
            .timestamp(if self.ts {
                Timestamp::Second
            } else {
                Timestamp::Off
            })
            .init()?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn log_args(verbose: Option<u8>) -> LogArgs {
        LogArgs {
            quiet: false,
            verbose,
            ts: false,
        }
    }

    #[test]
    fn test_level() {
        // warn by default; each -v steps up from there.
        assert_eq!(log_args(None).level(2), 2);
        assert_eq!(log_args(Some(0)).level(2), 2);
        assert_eq!(log_args(Some(1)).level(2), 3);
        assert_eq!(log_args(Some(3)).level(2), 5);
        assert_eq!(log_args(Some(u8::MAX)).level(2), u8::MAX);
    }
}
