// Global application state for the GUI shell.
//
// The editor proper (history stack, selection set, node collection) lives
// outside this crate; it reports its condition through `EditorFlags` and
// receives the actions the user dispatches from the control strip. This
// state holds only those flags plus the last dispatched action.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Theme {
    Dark,
    Light,
}

/// Enablement reported by the editor for each toolbar control.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorFlags {
    pub can_undo: bool,
    pub can_redo: bool,
    pub has_selection: bool,
    pub has_nodes: bool,
}

/// Actions the control strip can dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ToolbarAction {
    Undo,
    Redo,
    DeleteSelected,
    ClearAll,
}

impl ToolbarAction {
    /// Each action is gated by exactly one flag.
    pub fn allowed_by(self, flags: &EditorFlags) -> bool {
        match self {
            ToolbarAction::Undo => flags.can_undo,
            ToolbarAction::Redo => flags.can_redo,
            ToolbarAction::DeleteSelected => flags.has_selection,
            ToolbarAction::ClearAll => flags.has_nodes,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppState {
    pub current_theme: Theme,
    pub language: String,
    pub flags: EditorFlags,
    pub last_action: Option<ToolbarAction>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            current_theme: Theme::Dark,
            language: "en-US".to_string(),
            flags: EditorFlags::default(),
            last_action: None,
        }
    }
}

impl AppState {
    pub fn set_theme(&mut self, theme: Theme) {
        self.current_theme = theme;
    }

    pub fn set_flags(&mut self, flags: EditorFlags) {
        self.flags = flags;
    }

    /// Records an action dispatched from the control strip. An action whose
    /// flag is not set is ignored; the strip already renders it disabled, so
    /// reaching this path means the click did not come from an enabled
    /// control.
    pub fn record(&mut self, action: ToolbarAction) {
        if !action.allowed_by(&self.flags) {
            tracing::warn!(?action, "ignoring toolbar action without enablement");
            return;
        }
        tracing::info!(?action, "toolbar action dispatched");
        self.last_action = Some(action);
    }
}
