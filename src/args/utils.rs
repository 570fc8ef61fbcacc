//! Shared utilities for argument processing.

/// What: Determine the log level from command-line arguments.
///
/// Inputs:
/// - `args`: Parsed command-line arguments.
///
/// Output:
/// - Log level string (trace, debug, info, warn, error).
///
/// Details:
/// - Verbose flag overrides the log_level argument.
#[must_use]
pub fn determine_log_level(args: &crate::args::Args) -> String {
    if args.verbose { "debug".to_string() } else { args.log_level.clone() }
}
