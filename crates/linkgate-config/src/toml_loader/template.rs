//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Linkgate Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[navigation]
# App scheme rendered inside the web view. "myapp" becomes "myapp://".
# url_scheme = "myapp"
# Open http(s) links in the in-app browser window (false: system browser).
# prefer_in_app_browser = true
# Schemes handed to the operating system (mail client, dialer, ...).
# Anything else that is not internal stays in the web view.
# handled_schemes = ["mailto", "tel", "sms"]

[window]
# title = "Linkgate"
# width = 1024           # 200-16384
# height = 768           # 200-16384
# start_page = "index.html"
# assets_dir = "/usr/share/linkgate/www"

[logging]
# level = "info"         # trace, debug, info, warn, error
"##
    .to_string()
}
