// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Orientation-aware geometry for drawing a ruler.
//!
//! [`RulerLayout`] turns ticks into line segments and label anchors in the
//! ruler's local coordinate space. The baseline runs along the edge of the
//! ruler at `thickness - 1`; ticks grow from it toward the opposite edge.
//! Nothing here draws: callers stroke the lines and place label text with
//! their own backend.

use kurbo::{Line, Point, Rect};

use crate::state::RulerState;
use crate::ticks::{Tick, TickLength};
use crate::unit::RulerOrientation;

/// Where a label sits relative to its tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LabelPlacement {
    /// Shift along the ruler axis from the tick position.
    pub along: f64,
    /// Absolute coordinate across the ruler axis.
    pub cross: f64,
}

/// Pixel metrics used by [`RulerLayout`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TickStyle {
    /// Length of [`TickLength::Long`] ticks.
    pub long_length: f64,
    /// Length of [`TickLength::Short`] ticks.
    pub short_length: f64,
    /// Label anchor for horizontal rulers (text baseline origin).
    pub horizontal_label: LabelPlacement,
    /// Label anchor for vertical rulers (text baseline origin).
    pub vertical_label: LabelPlacement,
}

impl TickStyle {
    /// Returns the drawn length for a tick class, or `None` when nothing is
    /// drawn.
    #[must_use]
    pub fn length_of(&self, length: TickLength) -> Option<f64> {
        match length {
            TickLength::Long => Some(self.long_length),
            TickLength::Short => Some(self.short_length),
            TickLength::None => None,
        }
    }
}

impl Default for TickStyle {
    fn default() -> Self {
        Self {
            long_length: 10.0,
            short_length: 7.0,
            horizontal_label: LabelPlacement {
                along: -3.0,
                cross: 16.0,
            },
            vertical_label: LabelPlacement {
                along: 3.0,
                cross: 7.0,
            },
        }
    }
}

/// Geometry of one tick ready to draw.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TickMark {
    /// The tick this mark was built from.
    pub tick: Tick,
    /// Segment to stroke; `None` for [`TickLength::None`].
    pub line: Option<Line>,
    /// Text origin for the label; present only on labeled ticks.
    pub label_anchor: Option<Point>,
}

/// Lays out a ruler's baseline and ticks for a clip rectangle.
#[derive(Clone, Copy, Debug)]
pub struct RulerLayout<'a> {
    state: &'a RulerState,
    style: TickStyle,
}

impl<'a> RulerLayout<'a> {
    /// Creates a layout for `state` using `style` metrics.
    #[must_use]
    pub fn new(state: &'a RulerState, style: TickStyle) -> Self {
        Self { state, style }
    }

    /// Returns the style in use.
    #[must_use]
    pub fn style(&self) -> &TickStyle {
        &self.style
    }

    /// Extent along the ruler axis that must be covered to fill `clip`.
    ///
    /// Ticks are generated from local coordinate `0`, so this is the clip's
    /// far edge rather than its width.
    #[must_use]
    pub fn axis_length(&self, clip: Rect) -> f64 {
        match self.state.orientation() {
            RulerOrientation::Horizontal => clip.x1,
            RulerOrientation::Vertical => clip.y1,
        }
    }

    /// Border line along the ruler edge, spanning the clip.
    #[must_use]
    pub fn baseline(&self, clip: Rect) -> Line {
        let edge = self.edge();
        match self.state.orientation() {
            RulerOrientation::Horizontal => Line::new((clip.x0, edge), (clip.x1, edge)),
            RulerOrientation::Vertical => Line::new((edge, clip.y0), (edge, clip.y1)),
        }
    }

    /// Builds the mark for a single tick.
    #[must_use]
    pub fn mark(&self, tick: Tick) -> TickMark {
        let edge = self.edge();
        let pos = tick.position;
        let line = self.style.length_of(tick.length).map(|len| {
            let inner = edge - len;
            match self.state.orientation() {
                RulerOrientation::Horizontal => Line::new((pos, edge), (pos, inner)),
                RulerOrientation::Vertical => Line::new((edge, pos), (inner, pos)),
            }
        });
        let label_anchor = tick.label.map(|_| match self.state.orientation() {
            RulerOrientation::Horizontal => {
                let label = self.style.horizontal_label;
                Point::new(pos + label.along, label.cross)
            }
            RulerOrientation::Vertical => {
                let label = self.style.vertical_label;
                Point::new(label.cross, pos + label.along)
            }
        });
        TickMark {
            tick,
            line,
            label_anchor,
        }
    }

    /// Marks for every tick needed to fill `clip`.
    pub fn marks(&self, clip: Rect) -> impl Iterator<Item = TickMark> + use<'a> {
        let layout = *self;
        self.state
            .ticks(self.axis_length(clip))
            .map(move |tick| layout.mark(tick))
    }

    fn edge(&self) -> f64 {
        self.state.thickness() - 1.0
    }
}
