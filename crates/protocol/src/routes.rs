/// Default mount point of the toggle endpoint
pub const DEFAULT_API_BASE: &str = "/api/toggle";

/// Build the toggle path for a command under `api_base`
///
/// Trailing slashes on the base are ignored so `"/api/toggle/"` and
/// `"/api/toggle"` produce the same path. The command is used verbatim.
pub fn toggle_path(api_base: &str, command: &str) -> String {
    let base = api_base.trim_end_matches('/');
    format!("{base}/{command}")
}
