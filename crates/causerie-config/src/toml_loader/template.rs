//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> &'static str {
    r##"# Causerie Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[llm]
# model = "gemini-2.0-flash"
# max_tokens = 4096            # 1-65536
# temperature = 0.7            # 0.0-2.0
# connect_timeout_secs = 10    # 1-120
# request_timeout_secs = 120   # 1-600
# api_key = ""                 # leave unset to use GEMINI_API_KEY / GOOGLE_API_KEY

[session]
# debug = false                # log every outgoing question
# role = ""                    # initial system role; empty uses the default persona

# Custom personas are appended after the built-in ones.
# [[personas]]
# label = "Pirate"
# instructions = "You answer every question like a pirate."

[logging]
# level = "INFO"               # DEBUG, INFO, WARNING, ERROR
"##
}
