// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Size;

use crate::error::{InvalidConfiguration, RulerParameter};
use crate::ticks::{Ticks, compute_ticks};
use crate::unit::{RulerOrientation, RulerUnit};

/// Zoom factors are stored in pixels per meter; a zoom factor of `1.0`
/// (one pixel per millimeter) is stored as `1000.0`.
const ZOOM_SCALE: f64 = 1000.0;

/// Default ruler thickness in pixels.
pub const DEFAULT_THICKNESS: f64 = 30.0;

/// Mutable configuration of a single ruler.
///
/// The orientation is fixed at construction. Everything else is changed
/// through setters that validate their input; a rejected value leaves the
/// state untouched.
///
/// A zoom factor of `1.0` means one pixel represents one millimeter.
#[derive(Clone, Debug, PartialEq)]
pub struct RulerState {
    orientation: RulerOrientation,
    unit: RulerUnit,
    /// Pixels per meter.
    zoom: f64,
    offset: f64,
    thickness: f64,
    big_tick_step: u32,
    small_tick_step: u32,
}

impl RulerState {
    /// Creates a ruler with zoom factor `1.0`, zero offset, and tick steps of
    /// one unit.
    #[must_use]
    pub fn new(orientation: RulerOrientation, unit: RulerUnit) -> Self {
        Self {
            orientation,
            unit,
            zoom: ZOOM_SCALE,
            offset: 0.0,
            thickness: DEFAULT_THICKNESS,
            big_tick_step: 1,
            small_tick_step: 1,
        }
    }

    /// Returns the orientation chosen at construction.
    #[must_use]
    pub fn orientation(&self) -> RulerOrientation {
        self.orientation
    }

    /// Returns the display unit.
    #[must_use]
    pub fn unit(&self) -> RulerUnit {
        self.unit
    }

    /// Sets the display unit.
    pub fn set_unit(&mut self, unit: RulerUnit) {
        self.unit = unit;
    }

    /// Returns the zoom factor in pixels per millimeter.
    #[must_use]
    pub fn zoom_factor(&self) -> f64 {
        self.zoom / ZOOM_SCALE
    }

    /// Returns the zoom in pixels per meter (the stored representation).
    #[must_use]
    pub fn zoom_pixels_per_meter(&self) -> f64 {
        self.zoom
    }

    /// Sets the zoom factor in pixels per millimeter.
    ///
    /// Rejects zero, negative, and non-finite values.
    pub fn set_zoom_factor(&mut self, zoom_factor: f64) -> Result<(), InvalidConfiguration> {
        if !(zoom_factor > 0.0 && zoom_factor.is_finite()) {
            return Err(InvalidConfiguration::new(
                RulerParameter::ZoomFactor,
                zoom_factor,
            ));
        }
        self.zoom = ZOOM_SCALE * zoom_factor;
        Ok(())
    }

    /// Returns how many pixels one display unit spans at the current zoom.
    #[must_use]
    pub fn pixels_per_unit(&self) -> f64 {
        self.zoom * self.unit.meters()
    }

    /// Returns the pixel position of the ruler's logical zero.
    #[must_use]
    pub fn offset_pixels(&self) -> f64 {
        self.offset
    }

    /// Places the logical zero `millimeters` along the axis, converted to
    /// pixels with the current zoom.
    ///
    /// The pixel offset is fixed at assignment; a later zoom change does not
    /// rescale it.
    pub fn set_offset_mm(&mut self, millimeters: f64) -> Result<(), InvalidConfiguration> {
        let offset = self.zoom * millimeters / ZOOM_SCALE;
        if !offset.is_finite() {
            return Err(InvalidConfiguration::new(
                RulerParameter::Offset,
                millimeters,
            ));
        }
        self.offset = offset;
        Ok(())
    }

    /// Places the logical zero at a pixel position. Negative values move it
    /// before the start of the drawable region.
    pub fn set_offset_pixels(&mut self, pixels: f64) -> Result<(), InvalidConfiguration> {
        if !pixels.is_finite() {
            return Err(InvalidConfiguration::new(RulerParameter::Offset, pixels));
        }
        self.offset = pixels;
        Ok(())
    }

    /// Returns the ruler thickness in pixels.
    #[must_use]
    pub fn thickness(&self) -> f64 {
        self.thickness
    }

    /// Sets the thickness (height of a horizontal ruler, width of a vertical
    /// one) in pixels.
    pub fn set_thickness(&mut self, thickness: f64) -> Result<(), InvalidConfiguration> {
        if !(thickness > 0.0 && thickness.is_finite()) {
            return Err(InvalidConfiguration::new(
                RulerParameter::Thickness,
                thickness,
            ));
        }
        self.thickness = thickness;
        Ok(())
    }

    /// Returns the number of units between long, labeled ticks.
    #[must_use]
    pub fn big_tick_step(&self) -> u32 {
        self.big_tick_step
    }

    /// Sets the number of units between long, labeled ticks.
    pub fn set_big_tick_step(&mut self, step: u32) -> Result<(), InvalidConfiguration> {
        if step == 0 {
            return Err(InvalidConfiguration::new(RulerParameter::BigTickStep, 0.0));
        }
        self.big_tick_step = step;
        Ok(())
    }

    /// Returns the number of units between short ticks.
    #[must_use]
    pub fn small_tick_step(&self) -> u32 {
        self.small_tick_step
    }

    /// Sets the number of units between short ticks.
    pub fn set_small_tick_step(&mut self, step: u32) -> Result<(), InvalidConfiguration> {
        if step == 0 {
            return Err(InvalidConfiguration::new(
                RulerParameter::SmallTickStep,
                0.0,
            ));
        }
        self.small_tick_step = step;
        Ok(())
    }

    /// Pixels needed along the axis to show `meters` at the current zoom,
    /// rounded up.
    #[must_use]
    pub fn preferred_length(&self, meters: f64) -> f64 {
        libm::ceil(meters * self.zoom)
    }

    /// Preferred extent of a ruler showing `meters`: the axis gets
    /// [`preferred_length`](Self::preferred_length), the cross axis gets the
    /// thickness.
    #[must_use]
    pub fn preferred_size(&self, meters: f64) -> Size {
        let length = self.preferred_length(meters);
        match self.orientation {
            RulerOrientation::Horizontal => Size::new(length, self.thickness),
            RulerOrientation::Vertical => Size::new(self.thickness, length),
        }
    }

    /// Ticks covering `length` pixels; see [`compute_ticks`].
    #[must_use]
    pub fn ticks(&self, length: f64) -> Ticks {
        compute_ticks(length, self)
    }
}

impl Default for RulerState {
    fn default() -> Self {
        Self::new(RulerOrientation::default(), RulerUnit::default())
    }
}
