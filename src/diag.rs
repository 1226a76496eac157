use colored::Colorize;

/// Progress and warning output for a single run, printed to stderr.
///
/// Constructed once from the CLI verbose flag and passed into the stages that
/// emit diagnostics. Whether diagnostics are enabled never changes what gets
/// parsed or reported.
#[derive(Debug, Clone, Copy, Default)]
pub struct Diagnostics {
    verbose: bool,
}

impl Diagnostics {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    /// Progress note, emitted only when verbose.
    pub fn progress(&self, msg: &str) {
        if self.verbose {
            eprintln!("{msg}");
        }
    }

    /// Recoverable-skip warning, emitted only when verbose.
    pub fn warn(&self, msg: &str) {
        if self.verbose {
            eprintln!("{} {msg}", "warning:".yellow().bold());
        }
    }
}
