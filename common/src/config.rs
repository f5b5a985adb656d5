/// Invocation-wide options shared by every command.
///
/// Parsed once from the global CLI flags and passed by reference to the
/// handlers; there is no per-file state.
pub struct Config {
    /// Overwrite existing TypeScript files.
    ///
    /// When disabled, a conversion whose output file already exists is
    /// skipped with a warning instead of being rewritten.
    pub overwrite: bool,

    /// Delete the original JavaScript file after a successful write.
    pub replace: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            overwrite: true,
            replace: false,
        }
    }
}
