use serde::{Deserialize, Serialize};

use crate::geometry::{Position, Size};
use crate::gesture::{MIN_HEIGHT, MIN_WIDTH};
use crate::window::{AppDescriptor, WindowKind, WindowRecord};

const DEFAULT_WIDTH: i32 = 640;
const DEFAULT_HEIGHT: i32 = 480;
/// Explorer windows open 1.2x wider than the base default.
const WIDE_WIDTH: i32 = DEFAULT_WIDTH * 6 / 5;
const PROJECT_DETAIL_SIZE: Size = Size::new(800, 600);
/// Each successive new window is offset from the base origin by this much
/// per already-open window, so fresh windows never stack exactly.
const STAGGER_STEP: i32 = 30;
const BASE_ORIGIN: Position = Position::new(50, 50);
const INITIAL_Z: u32 = 10;

/// The whole in-memory desktop: the ordered window store, the active window
/// id, and the running z-index counter. One per UI session, discarded on
/// reload.
///
/// Operations referencing an id with no matching window are silent no-ops.
/// The active id is allowed to dangle after `close` (and to reference a
/// minimized window after `toggle_minimize`): "no window focused" is a
/// valid state, and callers resolve it through [`DesktopSession::active_window`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesktopSession {
    windows: Vec<WindowRecord>,
    active_window: Option<String>,
    /// Monotonic allocation counter: never reused, never decreased.
    top_z: u32,
}

impl DesktopSession {
    /// A fresh desktop with the given app's window already open and focused
    /// at the initial z-index.
    pub fn new(initial: &AppDescriptor) -> Self {
        let window = WindowRecord {
            id: initial.id.clone(),
            title: initial.title.clone(),
            kind: initial.kind,
            is_minimized: false,
            is_maximized: false,
            z_index: INITIAL_Z,
            position: BASE_ORIGIN,
            size: Size::new(DEFAULT_WIDTH, DEFAULT_HEIGHT),
            content: None,
        };
        Self {
            active_window: Some(window.id.clone()),
            windows: vec![window],
            top_z: INITIAL_Z,
        }
    }

    pub fn windows(&self) -> &[WindowRecord] {
        &self.windows
    }

    pub fn window(&self, id: &str) -> Option<&WindowRecord> {
        self.windows.iter().find(|w| w.id == id)
    }

    /// The stored active id, which may reference a closed or minimized
    /// window.
    pub fn active_id(&self) -> Option<&str> {
        self.active_window.as_deref()
    }

    /// The active window, resolved against the store. `None` when nothing
    /// is focused or the stored id dangles.
    pub fn active_window(&self) -> Option<&WindowRecord> {
        self.active_window
            .as_deref()
            .and_then(|id| self.window(id))
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active_window.as_deref() == Some(id)
    }

    /// Derived id for a project detail window.
    pub fn project_window_id(project_id: u32) -> String {
        format!("project-{project_id}")
    }

    /// Launch an app. An already-open window with the descriptor's id is
    /// un-minimized and raised instead of duplicated; otherwise a new
    /// window is appended with staggered default geometry and becomes
    /// active at the new top z-index.
    pub fn open(&mut self, app: &AppDescriptor) {
        if self.window(&app.id).is_some() {
            self.raise(&app.id);
            return;
        }

        let width = if app.kind == WindowKind::Explorer {
            WIDE_WIDTH
        } else {
            DEFAULT_WIDTH
        };
        self.append(WindowRecord {
            id: app.id.clone(),
            title: app.title.clone(),
            kind: app.kind,
            is_minimized: false,
            is_maximized: false,
            z_index: 0,
            position: self.stagger_origin(),
            size: Size::new(width, DEFAULT_HEIGHT),
            content: None,
        });
    }

    /// Open (or raise) the detail window for a project. Keyed by the
    /// derived `project-<id>` id, so one window may exist per distinct
    /// project. `content` is the collaborator lookup, invoked only when the
    /// window is actually created; the result is stored immutably.
    pub fn open_project_detail(
        &mut self,
        project_id: u32,
        title: impl Into<String>,
        content: impl FnOnce() -> String,
    ) {
        let id = Self::project_window_id(project_id);
        if self.window(&id).is_some() {
            self.raise(&id);
            return;
        }

        self.append(WindowRecord {
            id,
            title: title.into(),
            kind: WindowKind::Notepad,
            is_minimized: false,
            is_maximized: false,
            z_index: 0,
            position: self.stagger_origin(),
            size: PROJECT_DETAIL_SIZE,
            content: Some(content()),
        });
    }

    /// Remove the window unconditionally. The active id is deliberately not
    /// reassigned; see the struct docs.
    pub fn close(&mut self, id: &str) {
        self.windows.retain(|w| w.id != id);
    }

    /// Flip the minimized flag. Restoring also raises the window to the
    /// front and makes it active; minimizing changes neither z-order nor
    /// the active id.
    pub fn toggle_minimize(&mut self, id: &str) {
        let Some(minimized) = self.window(id).map(|w| w.is_minimized) else {
            return;
        };
        if minimized {
            self.raise(id);
        } else if let Some(w) = self.windows.iter_mut().find(|w| w.id == id) {
            w.is_minimized = true;
        }
    }

    /// Flip the maximized flag, leaving stored geometry untouched so
    /// restoring returns the window to its prior place. A maximized window
    /// is always visible, so the minimized flag is cleared, and the window
    /// is focused.
    pub fn toggle_maximize(&mut self, id: &str) {
        let Some(w) = self.windows.iter_mut().find(|w| w.id == id) else {
            return;
        };
        w.is_maximized = !w.is_maximized;
        w.is_minimized = false;
        self.focus(id);
    }

    /// Make the window active and allocate it the new top z-index. A true
    /// no-op when the window is already active (the counter must not
    /// advance) or when the id is unknown.
    pub fn focus(&mut self, id: &str) {
        if self.is_active(id) || self.window(id).is_none() {
            return;
        }
        self.active_window = Some(id.to_string());
        self.bump_to_top(id);
    }

    /// Absolute position overwrite, no bounds clamping: windows may be
    /// dragged partially or fully off the viewport. Ignored while
    /// maximized (the gesture layer is suspended in that state and the
    /// model holds the same line).
    pub fn move_to(&mut self, id: &str, position: Position) {
        let Some(w) = self.windows.iter_mut().find(|w| w.id == id) else {
            return;
        };
        if w.is_maximized {
            return;
        }
        w.position = position;
    }

    /// Absolute size overwrite with the 300x200 floor, plus an optional
    /// position overwrite (north/west resizes move the origin to pin the
    /// opposite edge). Ignored while maximized.
    pub fn resize(&mut self, id: &str, size: Size, position: Option<Position>) {
        let Some(w) = self.windows.iter_mut().find(|w| w.id == id) else {
            return;
        };
        if w.is_maximized {
            return;
        }
        w.size = Size::new(size.width.max(MIN_WIDTH), size.height.max(MIN_HEIGHT));
        if let Some(position) = position {
            w.position = position;
        }
    }

    /// Un-minimize, raise to the new top z and activate. Shared by the
    /// find-or-create paths and minimize-restore; unlike `focus` it always
    /// allocates a fresh z value.
    fn raise(&mut self, id: &str) {
        if let Some(w) = self.windows.iter_mut().find(|w| w.id == id) {
            w.is_minimized = false;
        }
        self.active_window = Some(id.to_string());
        self.bump_to_top(id);
    }

    fn bump_to_top(&mut self, id: &str) {
        self.top_z += 1;
        let z = self.top_z;
        if let Some(w) = self.windows.iter_mut().find(|w| w.id == id) {
            w.z_index = z;
        }
    }

    fn stagger_origin(&self) -> Position {
        let step = self.windows.len() as i32 * STAGGER_STEP;
        Position::new(BASE_ORIGIN.x + step, BASE_ORIGIN.y + step)
    }

    fn append(&mut self, mut window: WindowRecord) {
        self.top_z += 1;
        window.z_index = self.top_z;
        self.active_window = Some(window.id.clone());
        self.windows.push(window);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app(id: &str, kind: WindowKind) -> AppDescriptor {
        AppDescriptor {
            id: id.to_string(),
            title: format!("{id}.txt"),
            icon: "📄".to_string(),
            kind,
            color: "#60a5fa".to_string(),
        }
    }

    fn session() -> DesktopSession {
        DesktopSession::new(&app("about", WindowKind::Notepad))
    }

    fn max_z(session: &DesktopSession) -> u32 {
        session.windows().iter().map(|w| w.z_index).max().unwrap()
    }

    #[test]
    fn boots_with_focused_welcome_window() {
        let s = session();
        assert_eq!(s.windows().len(), 1);
        assert_eq!(s.active_id(), Some("about"));
        assert_eq!(s.windows()[0].z_index, 10);
        assert_eq!(s.windows()[0].position, Position::new(50, 50));
    }

    #[test]
    fn reopening_never_duplicates() {
        let mut s = session();
        s.open(&app("skills", WindowKind::Terminal));
        s.focus("about");
        s.open(&app("skills", WindowKind::Terminal));

        let skills: Vec<_> = s.windows().iter().filter(|w| w.id == "skills").collect();
        assert_eq!(skills.len(), 1);
        assert_eq!(s.active_id(), Some("skills"));
        assert_eq!(skills[0].z_index, max_z(&s));
    }

    #[test]
    fn new_windows_stagger_from_base_origin() {
        let mut s = session();
        s.open(&app("skills", WindowKind::Terminal));
        s.open(&app("contact", WindowKind::Mail));

        assert_eq!(s.window("skills").unwrap().position, Position::new(80, 80));
        assert_eq!(s.window("contact").unwrap().position, Position::new(110, 110));
    }

    #[test]
    fn explorer_opens_wider_than_base() {
        let mut s = session();
        s.open(&app("projects", WindowKind::Explorer));
        s.open(&app("skills", WindowKind::Terminal));

        assert_eq!(s.window("projects").unwrap().size, Size::new(768, 480));
        assert_eq!(s.window("skills").unwrap().size, Size::new(640, 480));
    }

    #[test]
    fn focus_when_already_active_is_a_true_noop() {
        let mut s = session();
        let before = s.clone();
        s.focus("about");
        assert_eq!(s, before);
    }

    #[test]
    fn focus_raises_to_strict_max() {
        let mut s = session();
        s.open(&app("b", WindowKind::Terminal)); // z 11
        s.open(&app("c", WindowKind::Mail)); // z 12
        s.open(&app("d", WindowKind::Chat)); // z 13
        assert_eq!(s.window("d").unwrap().z_index, 13);

        s.focus("b");
        assert_eq!(s.window("b").unwrap().z_index, 14);
        assert_eq!(s.window("c").unwrap().z_index, 12);
        assert_eq!(s.window("d").unwrap().z_index, 13);
        assert_eq!(s.window("b").unwrap().z_index, max_z(&s));
    }

    #[test]
    fn focus_on_unknown_id_mutates_nothing() {
        let mut s = session();
        let before = s.clone();
        s.focus("nope");
        assert_eq!(s, before);
    }

    #[test]
    fn active_window_tracks_max_z_after_each_raising_op() {
        let mut s = session();
        s.open(&app("skills", WindowKind::Terminal));
        assert_eq!(s.active_window().unwrap().z_index, max_z(&s));

        s.toggle_minimize("skills");
        s.toggle_minimize("skills");
        assert_eq!(s.active_id(), Some("skills"));
        assert_eq!(s.active_window().unwrap().z_index, max_z(&s));

        s.focus("about");
        assert_eq!(s.active_window().unwrap().z_index, max_z(&s));
    }

    #[test]
    fn close_removes_exactly_one_window() {
        let mut s = session();
        s.open(&app("skills", WindowKind::Terminal));
        s.open(&app("contact", WindowKind::Mail));
        let contact_before = s.window("contact").unwrap().clone();

        s.close("skills");
        assert!(s.window("skills").is_none());
        assert_eq!(s.windows().len(), 2);
        assert_eq!(s.window("contact").unwrap(), &contact_before);
    }

    #[test]
    fn closing_the_active_window_leaves_focus_dangling() {
        let mut s = session();
        s.open(&app("skills", WindowKind::Terminal));
        s.close("skills");

        assert_eq!(s.active_id(), Some("skills"));
        assert!(s.active_window().is_none());
    }

    #[test]
    fn close_on_unknown_id_is_ignored() {
        let mut s = session();
        let before = s.clone();
        s.close("ghost");
        assert_eq!(s, before);
    }

    #[test]
    fn minimizing_keeps_z_and_focus() {
        let mut s = session();
        s.open(&app("skills", WindowKind::Terminal));
        let z = s.window("skills").unwrap().z_index;

        s.toggle_minimize("skills");
        let w = s.window("skills").unwrap();
        assert!(w.is_minimized);
        assert_eq!(w.z_index, z);
        // The active id intentionally still references the minimized window.
        assert_eq!(s.active_id(), Some("skills"));
    }

    #[test]
    fn opening_over_a_minimized_window_leaves_its_z_alone() {
        let mut s = session();
        s.open(&app("skills", WindowKind::Terminal));
        s.toggle_minimize("skills");
        let minimized_z = s.window("skills").unwrap().z_index;

        s.open(&app("contact", WindowKind::Mail));
        assert_eq!(s.active_id(), Some("contact"));
        assert_eq!(s.window("contact").unwrap().z_index, max_z(&s));
        assert_eq!(s.window("skills").unwrap().z_index, minimized_z);
    }

    #[test]
    fn restore_raises_and_activates() {
        let mut s = session();
        s.open(&app("skills", WindowKind::Terminal));
        s.toggle_minimize("skills");
        s.focus("about");

        s.toggle_minimize("skills");
        let w = s.window("skills").unwrap();
        assert!(!w.is_minimized);
        assert_eq!(s.active_id(), Some("skills"));
        assert_eq!(w.z_index, max_z(&s));
    }

    #[test]
    fn maximize_preserves_stored_geometry() {
        let mut s = session();
        s.open(&app("skills", WindowKind::Terminal));
        let position = s.window("skills").unwrap().position;
        let size = s.window("skills").unwrap().size;

        s.toggle_maximize("skills");
        let w = s.window("skills").unwrap();
        assert!(w.is_maximized);
        assert_eq!(w.position, position);
        assert_eq!(w.size, size);

        s.toggle_maximize("skills");
        let w = s.window("skills").unwrap();
        assert!(!w.is_maximized);
        assert_eq!(w.position, position);
        assert_eq!(w.size, size);
    }

    #[test]
    fn maximize_implicitly_unminimizes() {
        let mut s = session();
        s.open(&app("skills", WindowKind::Terminal));
        s.toggle_minimize("skills");

        s.toggle_maximize("skills");
        let w = s.window("skills").unwrap();
        assert!(w.is_maximized);
        assert!(!w.is_minimized);
    }

    #[test]
    fn maximized_windows_ignore_move_and_resize() {
        let mut s = session();
        s.open(&app("skills", WindowKind::Terminal));
        s.toggle_maximize("skills");
        let before = s.window("skills").unwrap().clone();

        s.move_to("skills", Position::new(0, 0));
        s.resize("skills", Size::new(1000, 1000), Some(Position::new(5, 5)));
        assert_eq!(s.window("skills").unwrap(), &before);
    }

    #[test]
    fn move_is_unclamped() {
        let mut s = session();
        s.move_to("about", Position::new(-500, -500));
        assert_eq!(s.window("about").unwrap().position, Position::new(-500, -500));
    }

    #[test]
    fn resize_enforces_size_floors() {
        let mut s = session();
        s.resize("about", Size::new(10, 10), None);
        assert_eq!(s.window("about").unwrap().size, Size::new(300, 200));
    }

    #[test]
    fn project_detail_windows_dedupe_by_derived_id() {
        let mut s = session();
        let mut lookups = 0;
        s.open_project_detail(3, "KogeFarm.txt", || {
            lookups += 1;
            "detail".to_string()
        });
        s.focus("about");
        s.open_project_detail(3, "KogeFarm.txt", || {
            lookups += 1;
            "detail".to_string()
        });

        assert_eq!(lookups, 1, "content lookup runs only at creation");
        let matching: Vec<_> = s
            .windows()
            .iter()
            .filter(|w| w.id == "project-3")
            .collect();
        assert_eq!(matching.len(), 1);
        assert_eq!(matching[0].content.as_deref(), Some("detail"));
        assert_eq!(matching[0].size, Size::new(800, 600));
        assert_eq!(s.active_id(), Some("project-3"));
    }

    #[test]
    fn distinct_projects_open_distinct_windows() {
        let mut s = session();
        s.open_project_detail(1, "Spectra.txt", || String::new());
        s.open_project_detail(2, "Pearl.txt", || String::new());
        assert!(s.window("project-1").is_some());
        assert!(s.window("project-2").is_some());
    }
}
