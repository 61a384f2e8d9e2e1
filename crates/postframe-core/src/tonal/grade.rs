use tracing::debug;

use super::params::{TonalParam, TonalParams};

/// Slider state of the grade editor.
///
/// Auto-grade writes absolute values; manual edits override them. A
/// per-slider reset goes back to the last auto value when auto-grade has run
/// for the current image, otherwise to zero.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GradeState {
    params: TonalParams,
    auto_applied: Option<TonalParams>,
    manual_override: bool,
}

impl GradeState {
    pub fn params(&self) -> TonalParams {
        self.params
    }

    pub fn get(&self, param: TonalParam) -> i32 {
        self.params.get(param)
    }

    /// Auto values are in effect and untouched since.
    pub fn auto_active(&self) -> bool {
        self.auto_applied.is_some() && !self.manual_override
    }

    pub fn manually_overridden(&self) -> bool {
        self.manual_override
    }

    pub fn auto_applied(&self) -> Option<TonalParams> {
        self.auto_applied
    }

    /// Manual slider edit.
    pub fn set(&mut self, param: TonalParam, value: i32) {
        self.params.set(param, value);
        self.manual_override = true;
    }

    /// Replace all values with an auto-grade result.
    pub fn apply_auto(&mut self, derived: TonalParams) {
        let derived = derived.clamped();
        debug!(params = %derived, "Auto-grade applied");
        self.params = derived;
        self.auto_applied = Some(derived);
        self.manual_override = false;
    }

    pub fn reset_param(&mut self, param: TonalParam) {
        let target = self.auto_applied.map_or(0, |auto| auto.get(param));
        self.params.set(param, target);
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
