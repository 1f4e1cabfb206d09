/// Error codes with category prefix
///
/// Categories:
/// - IO: File system operations
/// - CFG: Configuration resolution/parsing
/// - PLG: Installed plugin metadata and plugin execution
/// - INS: External installer failures
/// - VAL: Input validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    // I/O errors (IO001-IO099)
    /// Generic I/O failure
    Io001,

    // Config errors (CFG001-CFG099)
    /// Invalid config file
    Cfg001,
    /// Forge home cannot be resolved
    Cfg002,

    // Plugin errors (PLG001-PLG099)
    /// Metadata unreadable
    Plg001,
    /// No executable entry point
    Plg002,
    /// Plugin executable could not be started
    Plg003,

    // Installer errors (INS001-INS099)
    /// Installer reported a failure
    Ins001,

    // Validation errors (VAL001-VAL099)
    /// Missing required option
    Val001,
    /// Invalid argument
    Val002,
}

impl ErrorCode {
    #[cfg(test)]
    pub const ALL: [ErrorCode; 9] = [
        ErrorCode::Io001,
        ErrorCode::Cfg001,
        ErrorCode::Cfg002,
        ErrorCode::Plg001,
        ErrorCode::Plg002,
        ErrorCode::Plg003,
        ErrorCode::Ins001,
        ErrorCode::Val001,
        ErrorCode::Val002,
    ];

    /// Returns the error code string (e.g., "PLG001")
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::Io001 => "IO001",
            ErrorCode::Cfg001 => "CFG001",
            ErrorCode::Cfg002 => "CFG002",
            ErrorCode::Plg001 => "PLG001",
            ErrorCode::Plg002 => "PLG002",
            ErrorCode::Plg003 => "PLG003",
            ErrorCode::Ins001 => "INS001",
            ErrorCode::Val001 => "VAL001",
            ErrorCode::Val002 => "VAL002",
        }
    }

    /// Returns the general cause description
    pub fn cause(&self) -> &'static str {
        match self {
            ErrorCode::Io001 => "A file system operation failed",
            ErrorCode::Cfg001 => "The forge configuration file has an invalid format",
            ErrorCode::Cfg002 => "Neither FORGE_HOME nor HOME is set",
            ErrorCode::Plg001 => "An installed plugin has unreadable installer metadata",
            ErrorCode::Plg002 => "The plugin does not expose any executable",
            ErrorCode::Plg003 => "The plugin executable could not be started",
            ErrorCode::Ins001 => "The package installer reported a failure",
            ErrorCode::Val001 => "A required option was not provided",
            ErrorCode::Val002 => "An invalid argument was provided",
        }
    }

    /// Returns remediation steps
    pub fn remediation(&self) -> &'static str {
        match self {
            ErrorCode::Io001 => "1. Check permissions on the forge home directory\n2. Verify the path exists",
            ErrorCode::Cfg001 => "1. Check the config.toml syntax\n2. Remove unknown keys\n3. Delete the file to fall back to defaults",
            ErrorCode::Cfg002 => "1. Set HOME, or\n2. Set FORGE_HOME to the forge data directory",
            ErrorCode::Plg001 => "1. Reinstall the plugin with 'forge add'\n2. Remove the broken plugin directory manually",
            ErrorCode::Plg002 => "1. Reinstall the plugin\n2. Report the issue to the plugin author",
            ErrorCode::Plg003 => "1. Make sure the installer's bin directory is on PATH\n2. Reinstall the plugin",
            ErrorCode::Ins001 => "1. Re-run with FORGE_LOG=debug for the full installer output\n2. Check that the installer is installed and up to date",
            ErrorCode::Val001 => "1. Check the command usage\n2. Use 'forge <command> --help'",
            ErrorCode::Val002 => "1. Check the argument format\n2. Use 'forge --help' for usage information",
        }
    }
}
