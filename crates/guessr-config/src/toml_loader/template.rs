//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> &'static str {
    r##"# guessr configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[game]
# variant = "classic"    # classic (guess until right), challenge (8 tries)
# seed = 42              # fixed seed for a repeatable secret

[logging]
# level = "WARNING"      # DEBUG, INFO, WARNING, ERROR
"##
}
