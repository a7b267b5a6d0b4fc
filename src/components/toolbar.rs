// Control strip overlaying the diagram canvas: undo, redo, delete-selected
// and clear-all. Purely presentational; enablement comes in as booleans and
// clicks go out through the bound handlers.
#![allow(non_snake_case)]

use dioxus::prelude::*;

use super::icons;

/// Class for a control given its enablement flag. Disabled controls keep
/// their slot in the strip but render dimmed and non-interactive.
pub(crate) fn control_class(enabled: bool) -> &'static str {
    if enabled {
        "control-button"
    } else {
        "control-button is-disabled"
    }
}

/// The canvas control strip: `[Undo][Redo] | [Delete Selected][Clear All]`.
///
/// Each control is clickable iff its flag is true; an enabled click invokes
/// the bound handler exactly once with no payload. The component holds no
/// state and never mutates its inputs, so the parent owns the full truth of
/// when each control is available.
#[component]
pub fn Toolbar(
    can_undo: bool,
    can_redo: bool,
    has_selection: bool,
    has_nodes: bool,
    on_undo: EventHandler<()>,
    on_redo: EventHandler<()>,
    on_delete_selected: EventHandler<()>,
    on_clear_all: EventHandler<()>,
) -> Element {
    rsx! {
        div {
            class: "canvas-toolbar",
            role: "toolbar",
            aria_label: "Canvas actions",
            aria_orientation: "horizontal",

            ControlButton {
                enabled: can_undo,
                tooltip: "Undo (⌘Z)",
                glyph: icons::UNDO,
                on_press: move |_| on_undo.call(()),
            }
            ControlButton {
                enabled: can_redo,
                tooltip: "Redo (⌘⇧Z)",
                glyph: icons::REDO,
                on_press: move |_| on_redo.call(()),
            }

            span { class: "toolbar-separator" }

            ControlButton {
                enabled: has_selection,
                tooltip: "Delete Selected (⌫)",
                glyph: icons::TRASH,
                on_press: move |_| on_delete_selected.call(()),
            }
            ControlButton {
                enabled: has_nodes,
                tooltip: "Clear All",
                glyph: icons::CLEAR,
                on_press: move |_| on_clear_all.call(()),
            }
        }
    }
}

/// A single control: fixed glyph, fixed tooltip, enablement-gated handler.
/// The `disabled` attribute already blocks pointer events; the guard in the
/// handler covers synthetic clicks as well.
#[component]
fn ControlButton(
    enabled: bool,
    tooltip: &'static str,
    glyph: &'static str,
    on_press: EventHandler<()>,
) -> Element {
    rsx! {
        button {
            class: control_class(enabled),
            title: tooltip,
            aria_label: tooltip,
            disabled: !enabled,
            onclick: move |_| {
                if enabled {
                    on_press.call(());
                }
            },
            icons::Icon { glyph: glyph }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[component]
    fn Fixture(can_undo: bool, can_redo: bool, has_selection: bool, has_nodes: bool) -> Element {
        rsx! {
            Toolbar {
                can_undo: can_undo,
                can_redo: can_redo,
                has_selection: has_selection,
                has_nodes: has_nodes,
                on_undo: move |_| {},
                on_redo: move |_| {},
                on_delete_selected: move |_| {},
                on_clear_all: move |_| {},
            }
        }
    }

    fn render(can_undo: bool, can_redo: bool, has_selection: bool, has_nodes: bool) -> String {
        let mut dom = VirtualDom::new_with_props(
            Fixture,
            FixtureProps {
                can_undo,
                can_redo,
                has_selection,
                has_nodes,
            },
        );
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    fn disabled_count(html: &str) -> usize {
        html.matches("control-button is-disabled").count()
    }

    #[test]
    fn all_controls_enabled_when_all_flags_are_set() {
        let html = render(true, true, true, true);
        assert_eq!(disabled_count(&html), 0);
        assert_eq!(html.matches("control-button").count(), 4);
    }

    #[test]
    fn all_controls_disabled_when_no_flag_is_set() {
        let html = render(false, false, false, false);
        assert_eq!(disabled_count(&html), 4);
    }

    #[test]
    fn each_control_is_gated_by_its_own_flag() {
        // can_undo and has_nodes set: undo and clear-all clickable, the
        // other two dimmed.
        let html = render(true, false, false, true);
        assert_eq!(disabled_count(&html), 2);

        let undo = html.find("Undo (⌘Z)").expect("undo control rendered");
        let redo = html.find("Redo (⌘⇧Z)").expect("redo control rendered");
        let first_disabled = html.find("is-disabled").expect("a disabled control");
        assert!(undo < first_disabled && first_disabled < redo);
    }

    #[test]
    fn controls_render_in_order_with_one_separator() {
        let html = render(true, true, true, true);
        let undo = html.find("Undo (⌘Z)").unwrap();
        let redo = html.find("Redo (⌘⇧Z)").unwrap();
        let delete = html.find("Delete Selected (⌫)").unwrap();
        let clear = html.find("Clear All").unwrap();
        assert!(undo < redo && redo < delete && delete < clear);

        assert_eq!(html.matches("toolbar-separator").count(), 1);
        let separator = html.find("toolbar-separator").unwrap();
        assert!(redo < separator && separator < delete);
    }

    #[test]
    fn every_control_carries_a_tooltip_and_a_glyph() {
        let html = render(true, true, true, true);
        for tooltip in ["Undo (⌘Z)", "Redo (⌘⇧Z)", "Delete Selected (⌫)", "Clear All"] {
            assert!(html.contains(tooltip), "missing tooltip {tooltip}");
        }
        assert_eq!(html.matches("<svg").count(), 4);
    }

    #[test]
    fn rendering_is_idempotent_for_identical_inputs() {
        let first = render(true, false, true, false);
        let second = render(true, false, true, false);
        assert_eq!(first, second);
    }

    #[test]
    fn control_class_reflects_enablement() {
        assert_eq!(control_class(true), "control-button");
        assert_eq!(control_class(false), "control-button is-disabled");
    }
}
