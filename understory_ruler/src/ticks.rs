// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tick generation along a ruler axis.
//!
//! Ticks sit one display unit apart. Long ticks carry a label and fall on
//! multiples of the big tick step counted from the ruler's logical zero;
//! short ticks fall on multiples of the small tick step. Classification is
//! tied to absolute unit counts, so panning the offset moves ticks without
//! changing which unit gets a label.

use alloc::string::{String, ToString};
use core::iter::FusedIterator;

use crate::state::RulerState;

/// Length class of a tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TickLength {
    /// A long tick on a big step boundary; always labeled.
    Long,
    /// A short tick on a small step boundary.
    Short,
    /// A unit position with no visible mark.
    None,
}

/// A single tick produced by [`compute_ticks`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tick {
    /// Position along the axis, in pixels from the start of the drawable
    /// region.
    pub position: f64,
    /// Length class.
    pub length: TickLength,
    /// Signed unit count from the ruler's logical zero.
    pub index: i64,
    /// Label for long ticks; equal to [`index`](Self::index).
    pub label: Option<i64>,
}

impl Tick {
    /// Formats the label as a plain integer.
    #[must_use]
    pub fn label_text(&self) -> Option<String> {
        self.label.map(|label| label.to_string())
    }
}

/// Computes the ticks covering `length` pixels for the given ruler.
///
/// The first tick is the first unit boundary at or after pixel `0`. Ticks
/// continue every [`RulerState::pixels_per_unit`] pixels until the length is
/// covered. A degenerate length (zero, negative, or NaN) still yields one
/// tick at the first position.
///
/// The returned iterator is independent of the ruler; it can be cloned and
/// replayed.
#[must_use]
pub fn compute_ticks(length: f64, state: &RulerState) -> Ticks {
    let step = state.pixels_per_unit();
    let offset = state.offset_pixels();

    // `fmod` is exact, so the first tick stays in `[0, step)` for any finite
    // offset, however far the logical zero is from the view.
    let mut first = libm::fmod(offset, step);
    if first < 0.0 {
        first += step;
    }
    if first >= step {
        first = 0.0;
    }
    let units = libm::round((offset - first) / step);
    #[expect(
        clippy::cast_possible_truncation,
        reason = "saturates for offsets beyond i64 unit counts; labels saturate with it"
    )]
    let offset_index = units as i64;

    let remaining = length - first;
    let count = if remaining > 0.0 {
        #[expect(
            clippy::cast_possible_truncation,
            reason = "the quotient is positive; oversized values saturate"
        )]
        let count = libm::ceil(remaining / step) as usize;
        count.max(1)
    } else {
        1
    };

    let big = u64::from(state.big_tick_step());
    let small = u64::from(state.small_tick_step());
    Ticks {
        first,
        step,
        offset_index,
        big_step: big,
        small_step: small,
        big_counter: big - unit_phase(units, big),
        small_counter: small - unit_phase(units, small),
        next: 0,
        count,
    }
}

/// `units` modulo `step`, in `[0, step)`.
fn unit_phase(units: f64, step: u64) -> u64 {
    let step_f = step as f64;
    let mut phase = libm::fmod(units, step_f);
    if phase < 0.0 {
        phase += step_f;
    }
    #[expect(
        clippy::cast_possible_truncation,
        reason = "the phase lies in [0, step) and step comes from a u32"
    )]
    let phase = phase as u64;
    phase.min(step - 1)
}

/// Iterator over the ticks of one drawable region.
#[derive(Clone, Debug)]
pub struct Ticks {
    first: f64,
    step: f64,
    offset_index: i64,
    big_step: u64,
    small_step: u64,
    big_counter: u64,
    small_counter: u64,
    next: usize,
    count: usize,
}

impl Ticks {
    /// Position of the first tick.
    #[must_use]
    pub fn first_position(&self) -> f64 {
        self.first
    }

    /// Spacing between consecutive ticks in pixels.
    #[must_use]
    pub fn spacing(&self) -> f64 {
        self.step
    }

    /// Number of whole units between the logical zero and pixel `0`,
    /// rounded down. Saturates at the `i64` bounds.
    #[must_use]
    pub fn offset_index(&self) -> i64 {
        self.offset_index
    }
}

impl Iterator for Ticks {
    type Item = Tick;

    fn next(&mut self) -> Option<Tick> {
        if self.next >= self.count {
            return None;
        }
        let i = self.next;
        self.next += 1;

        let position = self.first + i as f64 * self.step;
        let index = (i as i64).saturating_sub(self.offset_index);
        let (length, label) = if self.big_counter % self.big_step == 0 {
            (TickLength::Long, Some(index))
        } else if self.small_counter % self.small_step == 0 {
            (TickLength::Short, None)
        } else {
            (TickLength::None, None)
        };
        self.big_counter += 1;
        self.small_counter += 1;

        Some(Tick {
            position,
            length,
            index,
            label,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.count - self.next;
        (left, Some(left))
    }
}

impl ExactSizeIterator for Ticks {}

impl FusedIterator for Ticks {}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;
    use alloc::vec::Vec;

    use super::{Tick, TickLength, compute_ticks};
    use crate::{RulerOrientation, RulerState, RulerUnit};

    fn centimeter_ruler() -> RulerState {
        RulerState::new(RulerOrientation::Horizontal, RulerUnit::Centimeter)
    }

    #[test]
    fn one_centimeter_steps_at_unit_zoom() {
        let ruler = centimeter_ruler();
        let ticks: Vec<Tick> = compute_ticks(100.0, &ruler).collect();

        assert_eq!(ticks.len(), 10);
        for (i, tick) in ticks.iter().enumerate() {
            assert_eq!(tick.position, i as f64 * 10.0);
            assert_eq!(tick.length, TickLength::Long);
            assert_eq!(tick.label, Some(i as i64));
        }
    }

    #[test]
    fn zero_offset_starts_at_pixel_zero() {
        let mut ruler = centimeter_ruler();
        for unit in RulerUnit::ALL {
            ruler.set_unit(unit);
            let first = ruler.ticks(500.0).next().unwrap();
            assert_eq!(first.position, 0.0);
            assert_eq!(first.index, 0);
        }
    }

    #[test]
    fn spacing_and_count() {
        let mut ruler = centimeter_ruler();
        ruler.set_zoom_factor(1.5).unwrap();
        let p = ruler.pixels_per_unit();

        for length in [1.0, 14.0, 15.0, 16.0, 95.0, 100.0, 333.3] {
            let ticks: Vec<Tick> = ruler.ticks(length).collect();
            assert_eq!(ticks.len() as f64, libm::ceil(length / p), "length {length}");
            for pair in ticks.windows(2) {
                assert!(pair[0].position <= pair[1].position);
                assert!((pair[1].position - pair[0].position - p).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn degenerate_length_yields_one_tick() {
        let ruler = centimeter_ruler();
        for length in [0.0, -20.0, f64::NAN] {
            let ticks: Vec<Tick> = ruler.ticks(length).collect();
            assert_eq!(ticks.len(), 1);
            assert_eq!(ticks[0].position, 0.0);
        }
    }

    #[test]
    fn labels_only_on_big_ticks() {
        let mut ruler = centimeter_ruler();
        ruler.set_big_tick_step(5).unwrap();
        ruler.set_small_tick_step(1).unwrap();

        let ticks: Vec<Tick> = ruler.ticks(200.0).collect();
        assert_eq!(ticks.len(), 20);
        for tick in &ticks {
            if tick.index % 5 == 0 {
                assert_eq!(tick.length, TickLength::Long);
                assert_eq!(tick.label, Some(tick.index));
            } else {
                assert_eq!(tick.length, TickLength::Short);
                assert_eq!(tick.label, None);
            }
        }
    }

    #[test]
    fn positive_offset_labels_count_back_to_zero() {
        let mut ruler = centimeter_ruler();
        ruler.set_offset_pixels(25.0).unwrap();

        let ticks = ruler.ticks(60.0);
        assert_eq!(ticks.offset_index(), 2);
        assert_eq!(ticks.first_position(), 5.0);
        let labels: Vec<Option<i64>> = ticks.map(|t| t.label).collect();
        assert_eq!(
            labels,
            [Some(-2), Some(-1), Some(0), Some(1), Some(2), Some(3)]
        );
    }

    #[test]
    fn negative_offset_starts_inside_the_region() {
        let mut ruler = centimeter_ruler();
        ruler.set_offset_pixels(-25.0).unwrap();

        let mut ticks = ruler.ticks(30.0);
        assert_eq!(ticks.offset_index(), -3);
        let first = ticks.next().unwrap();
        assert_eq!(first.position, 5.0);
        assert_eq!(first.label, Some(3));

        // An exact multiple puts a tick on pixel zero.
        ruler.set_offset_pixels(-20.0).unwrap();
        let first = ruler.ticks(30.0).next().unwrap();
        assert_eq!(first.position, 0.0);
        assert_eq!(first.label, Some(2));
    }

    #[test]
    fn classification_is_stable_while_panning() {
        let mut ruler = centimeter_ruler();
        ruler.set_big_tick_step(5).unwrap();
        ruler.set_small_tick_step(2).unwrap();

        for k in -20_i32..20 {
            ruler.set_offset_pixels(f64::from(k) * 10.0 + 3.0).unwrap();
            for tick in ruler.ticks(250.0) {
                let big = tick.index.rem_euclid(5) == 0;
                let small = tick.index.rem_euclid(2) == 0;
                let expected = if big {
                    TickLength::Long
                } else if small {
                    TickLength::Short
                } else {
                    TickLength::None
                };
                assert_eq!(tick.length, expected, "offset step {k}, index {}", tick.index);
                assert_eq!(tick.label.is_some(), big);
                // Unit boundaries stay on the same pixels relative to zero.
                let from_zero = tick.position - ruler.offset_pixels();
                assert!((from_zero - tick.index as f64 * 10.0).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn far_offsets_keep_first_tick_in_view() {
        let mut ruler = centimeter_ruler();
        for offset in [1e30, -1e30, 9.3e18, -9.3e18] {
            ruler.set_offset_pixels(offset).unwrap();
            let ticks = ruler.ticks(100.0);
            let first = ticks.first_position();
            assert!((0.0..10.0).contains(&first), "offset {offset}: first {first}");
            assert!(ticks.len() <= 10, "offset {offset}: {} ticks", ticks.len());

            let ticks: Vec<Tick> = ticks.collect();
            for pair in ticks.windows(2) {
                assert!((pair[1].position - pair[0].position - 10.0).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn large_representable_offset_keeps_labels_exact() {
        let mut ruler = centimeter_ruler();
        ruler.set_big_tick_step(5).unwrap();
        ruler.set_offset_pixels(1e15 + 33.0).unwrap();

        let ticks = ruler.ticks(50.0);
        assert_eq!(ticks.first_position(), 3.0);
        assert_eq!(ticks.offset_index(), 100_000_000_000_003);
        for tick in ticks {
            assert_eq!(tick.length == TickLength::Long, tick.index.rem_euclid(5) == 0);
            assert_eq!(tick.label.is_some(), tick.index.rem_euclid(5) == 0);
        }
    }

    #[test]
    fn ticks_are_restartable() {
        let mut ruler = centimeter_ruler();
        ruler.set_offset_pixels(-7.0).unwrap();
        ruler.set_big_tick_step(3).unwrap();

        let ticks = ruler.ticks(120.0);
        let replay = ticks.clone();
        assert_eq!(ticks.len(), 12);
        assert!(ticks.eq(replay));
        assert!(ruler.ticks(120.0).eq(ruler.ticks(120.0)));
    }

    #[test]
    fn label_text_is_plain_integer() {
        let mut ruler = centimeter_ruler();
        ruler.set_offset_pixels(25.0).unwrap();
        let texts: Vec<_> = ruler.ticks(30.0).filter_map(|t| t.label_text()).collect();
        assert_eq!(texts, ["-2", "-1", "0"].map(|s| s.to_string()));
    }
}
