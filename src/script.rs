//! Replay scripts for driving an [`InputState`] without a window.
//!
//! A script is a TOML list of `[[step]]` tables, each tagged by `kind`:
//!
//! ```toml
//! [[step]]
//! kind = "down"
//! x = 10.0
//! y = 10.0
//!
//! [[step]]
//! kind = "move"
//! x = 40.0
//! y = 40.0
//!
//! [[step]]
//! kind = "up"
//! x = 40.0
//! y = 40.0
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::draw::Surface;
use crate::input::InputState;

/// One scripted user action.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Step {
    Down { x: f64, y: f64 },
    Move { x: f64, y: f64 },
    Up { x: f64, y: f64 },
    Undo,
    Redo,
    Clear,
    Thin,
    Thick,
    Stroke { thickness: f64 },
    Glyph { index: usize },
    /// Adds a glyph to the palette and selects it; empty text uses the configured default.
    CustomGlyph {
        #[serde(default)]
        text: String,
    },
    Hue { value: f64 },
}

impl Step {
    /// Feeds this step to the controller.
    pub fn apply(&self, state: &mut InputState, fallback_glyph: &str) {
        match self {
            Step::Down { x, y } => state.on_pointer_down(*x, *y),
            Step::Move { x, y } => state.on_pointer_move(*x, *y),
            Step::Up { x, y } => state.on_pointer_up(*x, *y),
            Step::Undo => {
                state.undo();
            }
            Step::Redo => {
                state.redo();
            }
            Step::Clear => state.clear(),
            Step::Thin => state.select_thin(),
            Step::Thick => state.select_thick(),
            Step::Stroke { thickness } => state.select_stroke(*thickness),
            Step::Glyph { index } => {
                if !state.select_stamp_index(*index) {
                    log::warn!("Script selects missing glyph {index}, ignoring");
                }
            }
            Step::CustomGlyph { text } => {
                let glyph = if text.is_empty() { fallback_glyph } else { text };
                let index = state.add_custom_glyph(glyph);
                state.select_stamp_index(index);
            }
            Step::Hue { value } => state.set_hue(*value),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct Script {
    #[serde(rename = "step", default)]
    pub steps: Vec<Step>,
}

impl Script {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read script {}", path.display()))?;
        Self::from_toml_str(&text)
            .with_context(|| format!("Failed to parse script {}", path.display()))
    }

    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Applies every step, redrawing `surface` whenever a step raised a signal.
    ///
    /// Returns the number of redraws performed.
    pub fn replay<S: Surface + ?Sized>(
        &self,
        state: &mut InputState,
        surface: &mut S,
        fallback_glyph: &str,
    ) -> usize {
        let mut redraws = 0;
        for step in &self.steps {
            step.apply(state, fallback_glyph);
            if !state.needs_redraw() {
                log::trace!("{step:?} raised no redraw");
                continue;
            }
            state.render_pending(surface);
            redraws += 1;
        }
        redraws
    }
}
