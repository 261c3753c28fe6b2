// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_ruler --heading-base-level=0

//! Understory Ruler: headless measurement ruler geometry.
//!
//! This crate models a ruler that measures distances in physical units on a
//! zoomable pixel surface. It focuses on:
//! - Unit conversion between pixels and a fixed set of physical units.
//! - Tick generation that stays aligned to absolute unit counts while panning.
//! - Orientation-aware line and label geometry for horizontal and vertical
//!   rulers.
//!
//! It does **not** render anything. Callers are expected to:
//! - Keep a [`RulerState`] per ruler and change it through its validated
//!   setters.
//! - From their paint callback, ask for [`RulerState::ticks`] or
//!   [`RulerLayout::marks`] and stroke/fill with their own backend.
//! - Drive the zoom factor from input controls at a higher layer (see
//!   `understory_ruler_zoom`).
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_ruler::{RulerOrientation, RulerState, RulerUnit, TickLength};
//!
//! // Zoom factor 1.0: one pixel per millimeter.
//! let ruler = RulerState::new(RulerOrientation::Horizontal, RulerUnit::Centimeter);
//! assert_eq!(ruler.pixels_per_unit(), 10.0);
//!
//! let ticks: Vec<_> = ruler.ticks(100.0).collect();
//! assert_eq!(ticks.len(), 10);
//! assert!(ticks.iter().all(|t| t.length == TickLength::Long));
//! assert_eq!(ticks[3].position, 30.0);
//! assert_eq!(ticks[3].label, Some(3));
//! ```
//!
//! ## Panning and tick steps
//!
//! ```rust
//! use understory_ruler::{RulerOrientation, RulerState, RulerUnit, TickLength};
//!
//! let mut ruler = RulerState::new(RulerOrientation::Horizontal, RulerUnit::Millimeter);
//! ruler.set_zoom_factor(4.0).unwrap();
//! ruler.set_big_tick_step(10).unwrap();
//! ruler.set_small_tick_step(5).unwrap();
//!
//! // Put the logical zero 12 mm into the view.
//! ruler.set_offset_mm(12.0).unwrap();
//! for tick in ruler.ticks(400.0) {
//!     match tick.length {
//!         TickLength::Long => assert_eq!(tick.index % 10, 0),
//!         TickLength::Short => assert_eq!(tick.index % 5, 0),
//!         TickLength::None => {}
//!     }
//! }
//!
//! // Invalid settings are rejected and leave the ruler unchanged.
//! assert!(ruler.set_zoom_factor(0.0).is_err());
//! assert_eq!(ruler.zoom_factor(), 4.0);
//! ```
//!
//! ## Layout
//!
//! ```rust
//! use kurbo::Rect;
//! use understory_ruler::{RulerLayout, RulerOrientation, RulerState, RulerUnit, TickStyle};
//!
//! let ruler = RulerState::new(RulerOrientation::Vertical, RulerUnit::Inch);
//! let layout = RulerLayout::new(&ruler, TickStyle::default());
//! let clip = Rect::new(0.0, 0.0, 30.0, 600.0);
//!
//! let baseline = layout.baseline(clip);
//! for mark in layout.marks(clip) {
//!     if let (Some(line), Some(text)) = (mark.line, mark.tick.label_text()) {
//!         // stroke `line`, draw `text` at `mark.label_anchor`
//!         let _ = (line, text, baseline);
//!     }
//! }
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod error;
mod layout;
mod state;
mod ticks;
mod unit;

pub use error::{InvalidConfiguration, RulerParameter};
pub use layout::{LabelPlacement, RulerLayout, TickMark, TickStyle};
pub use state::{DEFAULT_THICKNESS, RulerState};
pub use ticks::{Tick, TickLength, Ticks, compute_ticks};
pub use unit::{RulerOrientation, RulerUnit};
