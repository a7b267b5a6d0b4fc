// Theme palettes and stylesheet generation for the GUI shell.

use serde::{Deserialize, Serialize};

use super::ToolbarStyle;
use crate::state::app_state::Theme;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemePalette {
    pub canvas_background: String,
    pub surface: String,
    pub foreground: String,
    pub muted: String,
    /// Opacity applied to controls whose enablement flag is false.
    pub disabled_opacity: f32,
}

impl ThemePalette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self::default_dark(),
            Theme::Light => Self::default_light(),
        }
    }

    pub fn default_dark() -> Self {
        Self {
            canvas_background: "#1e1e1e".to_string(),
            surface: "#2b2b33".to_string(),
            foreground: "#d1d4dc".to_string(),
            muted: "#8a8f98".to_string(),
            disabled_opacity: 0.4,
        }
    }

    pub fn default_light() -> Self {
        Self {
            canvas_background: "#ffffff".to_string(),
            surface: "#f0f0f3".to_string(),
            foreground: "#1c1c1e".to_string(),
            muted: "#6b7078".to_string(),
            disabled_opacity: 0.4,
        }
    }
}

/// Builds the stylesheet for the shell and the control strip. The strip is
/// anchored bottom-center over the canvas; disabled controls keep their slot
/// but drop opacity and reject the pointer.
pub fn stylesheet(palette: &ThemePalette, toolbar: &ToolbarStyle) -> String {
    format!(
        r#"body {{ margin: 0; background: {canvas}; color: {fg}; }}
.canvas-viewport {{ position: fixed; inset: 0; }}
.canvas-toolbar {{
  position: fixed;
  bottom: {bottom}px;
  left: 50%;
  transform: translateX(-50%);
  display: flex;
  flex-direction: row;
  align-items: center;
  gap: {gap}px;
  padding: 8px 12px;
  border-radius: {radius}px;
  background: {surface};
  color: {fg};
}}
.control-button {{
  display: flex;
  align-items: center;
  justify-content: center;
  width: 28px;
  height: 28px;
  border: 0;
  outline: 0;
  box-shadow: none;
  border-radius: 6px;
  background: transparent;
  color: inherit;
  cursor: pointer;
}}
.control-button:hover {{ background: {muted}33; }}
.control-button.is-disabled {{ opacity: {opacity}; cursor: not-allowed; }}
.control-icon svg {{ width: 16px; height: 16px; display: block; }}
.toolbar-separator {{ width: 1px; height: 24px; margin: 0 4px; background: {muted}; }}
"#,
        canvas = palette.canvas_background,
        surface = palette.surface,
        fg = palette.foreground,
        muted = palette.muted,
        opacity = palette.disabled_opacity,
        bottom = toolbar.bottom_offset,
        radius = toolbar.corner_radius,
        gap = toolbar.gap,
    )
}
