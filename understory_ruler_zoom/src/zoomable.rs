// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use understory_ruler::{InvalidConfiguration, RulerState};

use crate::controller::{ZoomController, ZoomResponse};

/// A ruler that follows a zoom control.
///
/// Owns the [`RulerState`] together with its [`ZoomController`] and records
/// when an applied zoom change requires a redraw. Hosts poll
/// [`take_redraw`](Self::take_redraw) after dispatching events.
#[derive(Clone, Debug)]
pub struct ZoomableRuler<S> {
    ruler: RulerState,
    controller: ZoomController<S>,
    needs_redraw: bool,
}

impl<S: PartialEq> ZoomableRuler<S> {
    /// Wraps `ruler` with an unbound controller.
    #[must_use]
    pub fn new(ruler: RulerState) -> Self {
        Self {
            ruler,
            controller: ZoomController::new(),
            needs_redraw: false,
        }
    }

    /// Returns the ruler.
    #[must_use]
    pub fn ruler(&self) -> &RulerState {
        &self.ruler
    }

    /// Returns the ruler for direct configuration.
    ///
    /// Changes made here do not set the redraw flag; call
    /// [`request_redraw`](Self::request_redraw) if the host should repaint.
    pub fn ruler_mut(&mut self) -> &mut RulerState {
        &mut self.ruler
    }

    /// Returns the controller.
    #[must_use]
    pub fn controller(&self) -> &ZoomController<S> {
        &self.controller
    }

    /// Binds the zoom control; see [`ZoomController::bind`].
    pub fn bind(&mut self, source: S) {
        self.controller.bind(source);
    }

    /// Forwards a change notification to the controller.
    pub fn on_external_change(
        &mut self,
        source: &S,
        value: i32,
        settled: bool,
    ) -> Result<ZoomResponse, InvalidConfiguration> {
        let response = self
            .controller
            .on_external_change(source, value, settled, &mut self.ruler)?;
        if matches!(response, ZoomResponse::Redraw { .. }) {
            self.needs_redraw = true;
        }
        Ok(response)
    }

    /// Marks the ruler as needing a redraw.
    pub fn request_redraw(&mut self) {
        self.needs_redraw = true;
    }

    /// Returns whether a redraw is pending and clears the flag.
    pub fn take_redraw(&mut self) -> bool {
        core::mem::take(&mut self.needs_redraw)
    }
}

#[cfg(test)]
mod tests {
    use understory_ruler::{RulerOrientation, RulerState, RulerUnit};

    use super::ZoomableRuler;
    use crate::ZoomResponse;

    fn zoomable() -> ZoomableRuler<u32> {
        ZoomableRuler::new(RulerState::new(
            RulerOrientation::Horizontal,
            RulerUnit::Centimeter,
        ))
    }

    #[test]
    fn initial_zoom_is_one() {
        let ruler = zoomable();
        assert!((ruler.ruler().zoom_factor() - 1.0).abs() < 1e-8);
        assert!(ruler.controller().bound_source().is_none());
    }

    #[test]
    fn applied_change_requests_one_redraw() {
        let mut ruler = zoomable();
        ruler.bind(9);

        ruler.on_external_change(&9, 40, false).unwrap();
        assert!(!ruler.take_redraw());

        ruler.on_external_change(&9, 40, true).unwrap();
        assert!(ruler.take_redraw());
        assert!(!ruler.take_redraw());
        assert!((ruler.ruler().zoom_factor() - 0.4).abs() < 1e-8);
        // 0.4 px/mm: one centimeter spans four pixels.
        assert!((ruler.ruler().pixels_per_unit() - 4.0).abs() < 1e-9);
    }

    #[test]
    fn ignored_and_rejected_changes_do_not_redraw() {
        let mut ruler = zoomable();
        ruler.bind(1);

        assert_eq!(
            ruler.on_external_change(&2, 40, true),
            Ok(ZoomResponse::Ignored)
        );
        assert!(ruler.on_external_change(&1, 0, true).is_err());
        assert!(!ruler.take_redraw());
        assert!((ruler.ruler().zoom_factor() - 1.0).abs() < 1e-8);
    }

    #[test]
    fn direct_configuration_through_ruler_mut() {
        let mut ruler = zoomable();
        ruler.ruler_mut().set_unit(RulerUnit::Inch);
        ruler.request_redraw();
        assert!(ruler.take_redraw());
        assert_eq!(ruler.ruler().unit(), RulerUnit::Inch);
    }
}
