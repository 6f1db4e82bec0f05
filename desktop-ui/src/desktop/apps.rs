use desktop_core::{AppDescriptor, WindowKind};

/// The launchable apps, in desktop-icon order. The first entry is the
/// window the desktop boots with.
pub fn app_catalog() -> Vec<AppDescriptor> {
    vec![
        AppDescriptor {
            id: "about".to_string(),
            title: "About Me.txt".to_string(),
            icon: "📄".to_string(),
            kind: WindowKind::Notepad,
            color: "#60a5fa".to_string(),
        },
        AppDescriptor {
            id: "projects".to_string(),
            title: "My Projects".to_string(),
            icon: "📁".to_string(),
            kind: WindowKind::Explorer,
            color: "#facc15".to_string(),
        },
        AppDescriptor {
            id: "skills".to_string(),
            title: "Terminal".to_string(),
            icon: "🖥️".to_string(),
            kind: WindowKind::Terminal,
            color: "#34d399".to_string(),
        },
        AppDescriptor {
            id: "contact".to_string(),
            title: "Contact Me".to_string(),
            icon: "✉️".to_string(),
            kind: WindowKind::Mail,
            color: "#c084fc".to_string(),
        },
        AppDescriptor {
            id: "game".to_string(),
            title: "Rock Paper Scissors".to_string(),
            icon: "🎮".to_string(),
            kind: WindowKind::Game,
            color: "#f87171".to_string(),
        },
        AppDescriptor {
            id: "credits".to_string(),
            title: "credits.txt".to_string(),
            icon: "📄".to_string(),
            kind: WindowKind::Notepad,
            color: "#60a5fa".to_string(),
        },
        AppDescriptor {
            id: "chat".to_string(),
            title: "Chat (WIP)".to_string(),
            icon: "💬".to_string(),
            kind: WindowKind::Chat,
            color: "#22d3ee".to_string(),
        },
    ]
}

/// Title-bar and taskbar glyph for a window kind.
pub fn kind_icon(kind: WindowKind) -> &'static str {
    match kind {
        WindowKind::Terminal => "🖥️",
        WindowKind::Explorer => "📁",
        WindowKind::Notepad => "📄",
        WindowKind::Mail => "✉️",
        WindowKind::Game => "🎮",
        WindowKind::Chat => "💬",
        WindowKind::Music => "🎵",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_ids_are_unique() {
        let apps = app_catalog();
        for (i, app) in apps.iter().enumerate() {
            assert!(apps.iter().skip(i + 1).all(|other| other.id != app.id));
        }
    }

    #[test]
    fn catalog_boots_with_the_about_window() {
        let apps = app_catalog();
        assert_eq!(apps[0].id, "about");
        assert_eq!(apps[0].kind, WindowKind::Notepad);
    }
}
