//! Path handling for the Zellij plugin sandbox.

use std::path::PathBuf;

/// Returns the plugin's data directory, `/host/.local/share/zellij/character-finder`.
///
/// In Zellij's plugin environment `/host` points to the cwd of the last focused
/// terminal, or the folder Zellij was started in, which is usually the home
/// directory. The trace file lives here.
///
/// # Examples
///
/// ```
/// use character_finder::infrastructure::get_data_dir;
///
/// assert!(get_data_dir().ends_with("zellij/character-finder"));
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("character-finder")
}

/// Maps a `~`-prefixed path from the configuration to its sandbox location.
///
/// # Examples
///
/// ```
/// use character_finder::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/themes/dark.toml"), "/host/themes/dark.toml");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/etc/theme.toml"), "/etc/theme.toml");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    match path.strip_prefix('~') {
        Some("") => "/host".to_string(),
        Some(rest) if rest.starts_with('/') => format!("/host{rest}"),
        _ => path.to_string(),
    }
}
