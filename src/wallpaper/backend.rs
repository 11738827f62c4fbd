use std::path::Path;

use super::runner::ShellCommand;

/// Desktop environment that knows how to show a wallpaper.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DesktopBackend {
    MacOs,
    Gnome,
    Unsupported(String),
}

impl DesktopBackend {
    /// Pick a backend: explicit override, then target OS, then
    /// `XDG_CURRENT_DESKTOP`.
    pub fn detect(override_name: Option<&str>) -> Self {
        if let Some(name) = override_name {
            return Self::from_name(name);
        }
        if cfg!(target_os = "macos") {
            return DesktopBackend::MacOs;
        }
        match std::env::var("XDG_CURRENT_DESKTOP") {
            Ok(desktop) => Self::from_xdg(&desktop),
            Err(_) => DesktopBackend::Unsupported(std::env::consts::OS.to_string()),
        }
    }

    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "macos" | "mac" | "darwin" => DesktopBackend::MacOs,
            "gnome" => DesktopBackend::Gnome,
            other => DesktopBackend::Unsupported(other.to_string()),
        }
    }

    fn from_xdg(desktop: &str) -> Self {
        // e.g. "ubuntu:GNOME"
        let is_gnome = desktop
            .split(':')
            .any(|part| part.eq_ignore_ascii_case("gnome"));
        if is_gnome {
            DesktopBackend::Gnome
        } else {
            DesktopBackend::Unsupported(desktop.to_string())
        }
    }

    /// Commands that point every desktop at `image`.
    pub fn apply_commands(&self, image: &Path) -> Vec<ShellCommand> {
        let path = image.to_string_lossy();
        match self {
            DesktopBackend::MacOs => {
                let script = format!(
                    "tell application \"System Events\" to tell every desktop to set picture to \"{}\"",
                    applescript_escape(&path)
                );
                vec![ShellCommand::new("osascript", ["-e".to_string(), script])]
            }
            DesktopBackend::Gnome => {
                let uri = file_uri(image);
                vec![
                    ShellCommand::new(
                        "gsettings",
                        ["set", "org.gnome.desktop.background", "picture-uri", uri.as_str()],
                    ),
                    ShellCommand::new(
                        "gsettings",
                        ["set", "org.gnome.desktop.background", "picture-uri-dark", uri.as_str()],
                    )
                    .best_effort(),
                ]
            }
            DesktopBackend::Unsupported(_) => Vec::new(),
        }
    }

    /// Restart of the shell component that draws the background, if the
    /// desktop needs one for the change to show.
    pub fn refresh_command(&self) -> Option<ShellCommand> {
        match self {
            DesktopBackend::MacOs => Some(ShellCommand::new("killall", ["Dock"])),
            DesktopBackend::Gnome | DesktopBackend::Unsupported(_) => None,
        }
    }
}

/// Percent-encoded `file://` URI; relative paths have no URI form and are
/// passed through unencoded.
fn file_uri(image: &Path) -> String {
    match reqwest::Url::from_file_path(image) {
        Ok(url) => url.to_string(),
        Err(()) => format!("file://{}", image.to_string_lossy()),
    }
}

fn applescript_escape(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
