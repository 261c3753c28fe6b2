// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Zoom controller: apply a bound control's settled value as the ruler zoom.
//!
//! ## Usage
//!
//! 1) Bind the control you want to follow with [`ZoomController::bind`].
//! 2) Forward every change notification to [`ZoomController::on_external_change`].
//! 3) Redraw when it returns [`ZoomResponse::Redraw`].
//!
//! Notifications from other sources are ignored. While the control reports
//! that the user is still adjusting it, values are not applied.
//!
//! ## Minimal example
//!
//! ```
//! use understory_ruler::RulerState;
//! use understory_ruler_zoom::{ZoomController, ZoomResponse};
//!
//! let mut ruler = RulerState::default();
//! let mut zoom = ZoomController::new();
//! zoom.bind("zoom-slider");
//!
//! // Dragging: nothing changes yet.
//! let r = zoom.on_external_change(&"zoom-slider", 150, false, &mut ruler).unwrap();
//! assert_eq!(r, ZoomResponse::Adjusting);
//! assert_eq!(ruler.zoom_factor(), 1.0);
//!
//! // Released at 200: zoom factor 2.0.
//! let r = zoom.on_external_change(&"zoom-slider", 200, true, &mut ruler).unwrap();
//! assert_eq!(r, ZoomResponse::Redraw { zoom_factor: 2.0 });
//! assert_eq!(ruler.zoom_factor(), 2.0);
//! ```

use understory_ruler::{InvalidConfiguration, RulerState};

/// Zoom factor contributed by one step of the control value.
///
/// A control value of `100` maps to zoom factor `1.0`.
pub const ZOOM_PER_STEP: f64 = 0.01;

/// Interaction phase of the bound control.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum AdjustPhase {
    /// No adjustment in progress; the last settled value has been applied.
    #[default]
    Idle,
    /// The control is being dragged; values are withheld until it settles.
    Adjusting,
}

/// Outcome of forwarding a change notification.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ZoomResponse {
    /// The notification came from an unbound source and was dropped.
    Ignored,
    /// The control is still being adjusted; nothing was applied.
    Adjusting,
    /// A new zoom factor was applied; the ruler needs to be redrawn.
    Redraw {
        /// The zoom factor now set on the ruler.
        zoom_factor: f64,
    },
}

/// Maps a control value onto a zoom factor.
#[must_use]
pub fn zoom_for_value(value: i32) -> f64 {
    f64::from(value) * ZOOM_PER_STEP
}

/// Follows a single external control and applies its settled value as the
/// ruler zoom factor.
///
/// `S` identifies the control (a widget id, a handle, ...). Only a
/// notification whose source compares equal to the bound one is acted on.
#[derive(Clone, Debug)]
pub struct ZoomController<S> {
    source: Option<S>,
    phase: AdjustPhase,
}

impl<S> Default for ZoomController<S> {
    fn default() -> Self {
        Self {
            source: None,
            phase: AdjustPhase::Idle,
        }
    }
}

impl<S: PartialEq> ZoomController<S> {
    /// Creates a controller with no bound control.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a controller already bound to `source`.
    #[must_use]
    pub fn bound_to(source: S) -> Self {
        Self {
            source: Some(source),
            phase: AdjustPhase::Idle,
        }
    }

    /// Binds the controller to `source`, replacing any previous binding.
    ///
    /// The phase resets to [`AdjustPhase::Idle`].
    pub fn bind(&mut self, source: S) {
        self.source = Some(source);
        self.phase = AdjustPhase::Idle;
    }

    /// Removes the binding and returns the previously bound source.
    pub fn unbind(&mut self) -> Option<S> {
        self.phase = AdjustPhase::Idle;
        self.source.take()
    }

    /// Returns the bound source, if any.
    #[must_use]
    pub fn bound_source(&self) -> Option<&S> {
        self.source.as_ref()
    }

    /// Returns the current interaction phase.
    #[must_use]
    pub fn phase(&self) -> AdjustPhase {
        self.phase
    }

    /// Handles a change notification `(source, value, settled)`.
    ///
    /// Settled values from the bound source are applied through
    /// [`RulerState::set_zoom_factor`]. A non-positive value is rejected by
    /// the ruler; the error is returned and the ruler keeps its zoom.
    pub fn on_external_change(
        &mut self,
        source: &S,
        value: i32,
        settled: bool,
        ruler: &mut RulerState,
    ) -> Result<ZoomResponse, InvalidConfiguration> {
        if self.source.as_ref() != Some(source) {
            log::trace!("ignoring zoom change from unbound source");
            return Ok(ZoomResponse::Ignored);
        }
        if !settled {
            self.phase = AdjustPhase::Adjusting;
            log::trace!("zoom control adjusting at {value}");
            return Ok(ZoomResponse::Adjusting);
        }

        self.phase = AdjustPhase::Idle;
        let zoom_factor = zoom_for_value(value);
        ruler.set_zoom_factor(zoom_factor)?;
        log::debug!("zoom factor set to {zoom_factor} from control value {value}");
        Ok(ZoomResponse::Redraw { zoom_factor })
    }
}
