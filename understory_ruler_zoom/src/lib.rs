// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_ruler_zoom --heading-base-level=0

//! Understory Ruler Zoom: drive a ruler's zoom factor from an input control.
//!
//! A zoom control is typically a slider whose integer value `v` maps to the
//! zoom factor `v * 0.01` (so `100` is one pixel per millimeter). This crate
//! provides:
//!
//! - [`ZoomController`]: a two-phase state machine (idle/adjusting) bound to a
//!   single control identity. Values are only applied once the control
//!   reports that it has settled, and notifications from any other source
//!   are ignored.
//! - [`ZoomableRuler`]: a [`RulerState`](understory_ruler::RulerState) bundled
//!   with its controller and a pending-redraw flag.
//!
//! The crate does not depend on any UI framework. Control identities are any
//! `PartialEq` type the host uses to name its widgets.
//!
//! ## Example
//!
//! ```rust
//! use understory_ruler::{RulerOrientation, RulerState, RulerUnit};
//! use understory_ruler_zoom::ZoomableRuler;
//!
//! #[derive(PartialEq)]
//! struct WidgetId(u64);
//!
//! let mut ruler = ZoomableRuler::new(RulerState::new(
//!     RulerOrientation::Horizontal,
//!     RulerUnit::Centimeter,
//! ));
//! ruler.bind(WidgetId(4));
//!
//! // The host forwards every change notification.
//! ruler.on_external_change(&WidgetId(4), 1, true).unwrap();
//! assert!(ruler.take_redraw());
//! assert!((ruler.ruler().zoom_factor() - 0.01).abs() < 1e-12);
//!
//! // Notifications from other widgets are dropped.
//! ruler.on_external_change(&WidgetId(5), 200, true).unwrap();
//! assert!(!ruler.take_redraw());
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod controller;
mod zoomable;

pub use controller::{AdjustPhase, ZOOM_PER_STEP, ZoomController, ZoomResponse, zoom_for_value};
pub use zoomable::ZoomableRuler;
