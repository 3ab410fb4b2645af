use crate::error::ChartResult;
use crate::extensions::BandStyle;
use crate::indicators::BandOptions;

use super::{BandSession, SessionUpdate};

/// Editable copy of options and style held by a settings dialog.
///
/// Edits stay local until `apply`, which hands out complete clamped values;
/// `cancel` throws edits away. The session never sees a half-edited value.
#[derive(Debug, Clone, PartialEq)]
pub struct BandSettingsDraft {
    committed_options: BandOptions,
    committed_style: BandStyle,
    options: BandOptions,
    style: BandStyle,
}

impl BandSettingsDraft {
    #[must_use]
    pub fn new(options: BandOptions, style: BandStyle) -> Self {
        Self {
            committed_options: options,
            committed_style: style,
            options,
            style,
        }
    }

    #[must_use]
    pub fn from_session(session: &BandSession) -> Self {
        Self::new(session.options(), *session.style())
    }

    #[must_use]
    pub fn options(&self) -> BandOptions {
        self.options
    }

    #[must_use]
    pub fn style(&self) -> &BandStyle {
        &self.style
    }

    pub fn options_mut(&mut self) -> &mut BandOptions {
        &mut self.options
    }

    pub fn style_mut(&mut self) -> &mut BandStyle {
        &mut self.style
    }

    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.options != self.committed_options || self.style != self.committed_style
    }

    /// Clamps the draft to editor limits, commits it and returns the values.
    pub fn apply(&mut self) -> (BandOptions, BandStyle) {
        self.options = self.options.clamped_for_editor();
        self.style = self.style.clamped_for_editor();
        self.committed_options = self.options;
        self.committed_style = self.style;
        (self.options, self.style)
    }

    /// Applies the draft and pushes it into `session` in one step.
    pub fn apply_to(&mut self, session: &mut BandSession) -> ChartResult<SessionUpdate> {
        let (options, style) = self.apply();
        session.apply(options, style)
    }

    /// Reverts the draft to the last committed values.
    pub fn cancel(&mut self) {
        self.options = self.committed_options;
        self.style = self.committed_style;
    }
}
