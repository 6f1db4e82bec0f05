use serde::{Deserialize, Serialize};

use crate::geometry::{Position, Size};

/// Closed set of content renderers. The window manager never interprets the
/// kind beyond default sizing; the UI's content router matches on it
/// exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WindowKind {
    Terminal,
    Explorer,
    Notepad,
    Mail,
    Game,
    Chat,
    Music,
}

/// One open application instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowRecord {
    pub id: String,
    pub title: String,
    pub kind: WindowKind,
    pub is_minimized: bool,
    pub is_maximized: bool,
    /// Strictly increasing allocation; highest value renders topmost.
    /// Values need not be contiguous.
    pub z_index: u32,
    pub position: Position,
    /// Stored geometry survives maximize: the maximized state only
    /// overrides it visually.
    pub size: Size,
    /// Produced once at creation for content-bearing windows (project
    /// detail text), never mutated afterwards.
    pub content: Option<String>,
}

/// Static descriptor for a launchable app. One per desktop icon; `open`
/// uses it to find-or-create the singleton window with the same id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppDescriptor {
    pub id: String,
    pub title: String,
    /// Emoji glyph shown on the icon and title bar.
    pub icon: String,
    pub kind: WindowKind,
    /// CSS color tag for the icon tile.
    pub color: String,
}
