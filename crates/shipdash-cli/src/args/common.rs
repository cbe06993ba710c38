use clap::Args;

#[derive(Debug, Clone, Default, Args)]
pub struct ViewModeArgs {
    #[arg(
        long,
        help = "Minimal output (keys and house bills only, for scripting)",
        group = "view_mode"
    )]
    pub quiet: bool,

    #[arg(long, help = "Compact output (one line per shipment)", group = "view_mode")]
    pub compact: bool,

    #[arg(long, help = "Verbose output (every column and window totals)", group = "view_mode")]
    pub verbose: bool,
}

impl ViewModeArgs {
    /// Resolve flags to a mode, falling back to `default` when none is given.
    pub fn resolve_or(&self, default: crate::presentation::ViewMode) -> crate::presentation::ViewMode {
        use crate::presentation::ViewMode;

        if self.quiet {
            ViewMode::Minimal
        } else if self.compact {
            ViewMode::Compact
        } else if self.verbose {
            ViewMode::Verbose
        } else {
            default
        }
    }
}
