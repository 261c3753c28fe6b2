// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// Ruler setting that rejected a value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RulerParameter {
    /// [`RulerState::set_zoom_factor`](crate::RulerState::set_zoom_factor).
    ZoomFactor,
    /// [`RulerState::set_big_tick_step`](crate::RulerState::set_big_tick_step).
    BigTickStep,
    /// [`RulerState::set_small_tick_step`](crate::RulerState::set_small_tick_step).
    SmallTickStep,
    /// [`RulerState::set_thickness`](crate::RulerState::set_thickness).
    Thickness,
    /// [`RulerState::set_offset_mm`](crate::RulerState::set_offset_mm) and
    /// [`RulerState::set_offset_pixels`](crate::RulerState::set_offset_pixels).
    Offset,
}

impl RulerParameter {
    fn name(self) -> &'static str {
        match self {
            Self::ZoomFactor => "zoom factor",
            Self::BigTickStep => "big tick step",
            Self::SmallTickStep => "small tick step",
            Self::Thickness => "thickness",
            Self::Offset => "offset",
        }
    }
}

/// Error returned when a ruler setter is given a value it cannot accept.
///
/// Positivity constraints are a caller contract; the setter leaves the ruler
/// unchanged and reports the offending value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InvalidConfiguration {
    /// The setting that was being assigned.
    pub parameter: RulerParameter,
    /// The rejected value.
    pub value: f64,
}

impl InvalidConfiguration {
    pub(crate) fn new(parameter: RulerParameter, value: f64) -> Self {
        log::debug!("rejected {} = {value}", parameter.name());
        Self { parameter, value }
    }
}

impl fmt::Display for InvalidConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.parameter {
            RulerParameter::Offset => write!(f, "offset must be finite, got {}", self.value),
            parameter => write!(
                f,
                "{} must be positive, got {}",
                parameter.name(),
                self.value
            ),
        }
    }
}

impl core::error::Error for InvalidConfiguration {}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::{InvalidConfiguration, RulerParameter};

    #[test]
    fn display_names_parameter_and_value() {
        let err = InvalidConfiguration::new(RulerParameter::ZoomFactor, -0.5);
        assert_eq!(err.to_string(), "zoom factor must be positive, got -0.5");

        let err = InvalidConfiguration::new(RulerParameter::SmallTickStep, 0.0);
        assert_eq!(err.to_string(), "small tick step must be positive, got 0");
    }

    #[test]
    fn offset_message_mentions_finiteness() {
        let err = InvalidConfiguration::new(RulerParameter::Offset, f64::NAN);
        assert_eq!(err.to_string(), "offset must be finite, got NaN");
    }
}
