#![allow(non_snake_case)]
use dioxus::prelude::*;

use crate::components::toolbar::Toolbar;
use crate::config::theme::{self, ThemePalette};
use crate::config::AppConfig;
use crate::state::app_state::{AppState, ToolbarAction};

/// Root component; pulls the configuration provided at launch and hands it
/// to the shell.
#[component]
pub fn App() -> Element {
    let config = use_context::<AppConfig>();
    rsx! {
        Shell { config: config }
    }
}

/// The editor shell: stylesheet, canvas viewport and the control strip.
///
/// The shell owns only the enablement flags and the record of the last
/// dispatched action. The editor that backs those flags (history stack,
/// selection, node collection) is an external collaborator; until it reports
/// anything, every control renders disabled.
#[component]
pub fn Shell(config: AppConfig) -> Element {
    let mut state = use_signal(AppState::default);

    let palette = ThemePalette::for_theme(config.theme());
    let css = theme::stylesheet(&palette, &config.toolbar);
    let flags = state.read().flags;

    rsx! {
        style { "{css}" }
        div { class: "canvas-viewport" }
        Toolbar {
            can_undo: flags.can_undo,
            can_redo: flags.can_redo,
            has_selection: flags.has_selection,
            has_nodes: flags.has_nodes,
            on_undo: move |_| state.write().record(ToolbarAction::Undo),
            on_redo: move |_| state.write().record(ToolbarAction::Redo),
            on_delete_selected: move |_| state.write().record(ToolbarAction::DeleteSelected),
            on_clear_all: move |_| state.write().record(ToolbarAction::ClearAll),
        }
    }
}
