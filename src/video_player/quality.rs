// SPDX-License-Identifier: MPL-2.0
//! Quality-level selection.
//!
//! The selector keeps the user-facing rendition list ("Auto" first, then
//! the engine's levels in engine order) and the selected index. Selection is
//! optimistic: the index is updated when the command is sent and reconciled
//! when the engine reports the level it actually switched to.

use crate::application::port::{EngineLevel, StreamingSession};
use crate::domain::video::{resolution_label, QualityLevel, AUTO_LABEL, AUTO_LEVEL_INDEX};

/// Quality list, selection and menu state for one player.
#[derive(Debug, Clone)]
pub struct QualitySelector {
    levels: Vec<QualityLevel>,
    selected: i32,
    /// Level the engine last reported as playing.
    playing: Option<i32>,
    menu_open: bool,
    /// Label to select once levels first become available.
    preferred: Option<String>,
}

impl Default for QualitySelector {
    fn default() -> Self {
        Self::new(None)
    }
}

impl QualitySelector {
    #[must_use]
    pub fn new(preferred: Option<String>) -> Self {
        Self {
            levels: Vec::new(),
            selected: AUTO_LEVEL_INDEX,
            playing: None,
            menu_open: false,
            preferred: preferred.filter(|label| !label.eq_ignore_ascii_case(AUTO_LABEL)),
        }
    }

    /// Replaces the list from the engine's levels.
    ///
    /// An empty engine list empties the selector (no "Auto" alone). Returns
    /// the index to select if a stored preference matches one of the new
    /// levels; the preference is consumed either way once levels exist.
    pub fn rebuild(&mut self, engine_levels: &[EngineLevel], current_level: i32) -> Option<i32> {
        if engine_levels.is_empty() {
            self.clear();
            return None;
        }

        self.levels = std::iter::once(QualityLevel::auto())
            .chain(engine_levels.iter().zip(0_i32..).map(|(level, index)| QualityLevel {
                index,
                height: level.height,
                width: level.width,
                bitrate_bps: level.bitrate_bps,
                label: resolution_label(level.height),
            }))
            .collect();
        self.selected = if self.contains(current_level) {
            current_level
        } else {
            AUTO_LEVEL_INDEX
        };

        let preferred = self.preferred.take()?;
        let index = self
            .levels
            .iter()
            .find(|level| !level.is_auto() && level.label == preferred)
            .map(|level| level.index);
        if index.is_none() {
            tracing::debug!(%preferred, "preferred quality not offered by stream");
        }
        index
    }

    /// Forgets every level (session gone or replaced).
    pub fn clear(&mut self) {
        self.levels.clear();
        self.selected = AUTO_LEVEL_INDEX;
        self.playing = None;
        self.menu_open = false;
    }

    /// Commands `session` to switch to `index` and records it as selected.
    ///
    /// Also closes the menu. The engine may decline an unknown index; the
    /// next level-switched notification corrects the selection.
    pub fn select<O, S>(&mut self, session: &mut S, index: i32)
    where
        O: ?Sized,
        S: StreamingSession<O> + ?Sized,
    {
        session.set_current_level(index);
        self.selected = index;
        self.menu_open = false;
    }

    /// Reconciles with the engine's level-switched notification.
    ///
    /// While "Auto" is selected the engine is free to switch, so only the
    /// playing level is recorded.
    pub fn level_switched(&mut self, index: i32) {
        self.playing = Some(index);
        if self.selected != AUTO_LEVEL_INDEX && self.selected != index {
            tracing::debug!(
                requested = self.selected,
                actual = index,
                "engine switched to a different level than selected"
            );
            self.selected = index;
        }
    }

    #[must_use]
    pub fn levels(&self) -> &[QualityLevel] {
        &self.levels
    }

    /// Selected index, [`AUTO_LEVEL_INDEX`] for adaptive.
    #[must_use]
    pub fn selected(&self) -> i32 {
        self.selected
    }

    /// Level the engine last reported as playing.
    #[must_use]
    pub fn playing(&self) -> Option<i32> {
        self.playing
    }

    /// Label of the selected entry, if it is in the list.
    #[must_use]
    pub fn selected_label(&self) -> Option<&str> {
        self.levels
            .iter()
            .find(|level| level.index == self.selected)
            .map(|level| level.label.as_str())
    }

    /// The selector is only shown when at least one rendition exists.
    #[must_use]
    pub fn is_available(&self) -> bool {
        !self.levels.is_empty()
    }

    #[must_use]
    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open && self.is_available();
    }

    /// Closes the menu. Returns true if it was open.
    pub fn close_menu(&mut self) -> bool {
        std::mem::replace(&mut self.menu_open, false)
    }

    fn contains(&self, index: i32) -> bool {
        self.levels.iter().any(|level| level.index == index)
    }
}
