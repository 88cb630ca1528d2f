//! Animation timeline
//!
//! A resolution produces visual work: pop each removed chip, drop or spawn
//! chips one motion at a time, and pulse the board after a reshuffle. The
//! timeline queues these steps and the host advances it with
//! [`Timeline::tick`] once per frame. The model is already final when steps
//! are queued, so skipping them with [`Timeline::finish`] is always safe.

use std::collections::VecDeque;

use crate::fill::Motion;
use crate::types::{ViewHandle, FALL_MS, POP_MS, POP_SCALE, PULSE_MS, PULSE_SCALE};
use crate::view::BoardView;

/// Step durations in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    pub pop_ms: u32,
    pub fall_ms: u32,
    /// Each half of the pulse (grow, then shrink).
    pub pulse_ms: u32,
}

impl Timing {
    /// Every step completes on the first tick.
    pub const INSTANT: Timing = Timing {
        pop_ms: 0,
        fall_ms: 0,
        pulse_ms: 0,
    };
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            pop_ms: POP_MS,
            fall_ms: FALL_MS,
            pulse_ms: PULSE_MS,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Step {
    Pop(ViewHandle),
    Fall(Motion),
    Pulse(Vec<ViewHandle>),
}

/// Queue of pending visual steps.
#[derive(Debug, Clone, PartialEq)]
pub struct Timeline {
    timing: Timing,
    steps: VecDeque<Step>,
    /// Time already spent on the front step.
    elapsed_ms: u32,
}

impl Timeline {
    pub fn new(timing: Timing) -> Self {
        Self {
            timing,
            steps: VecDeque::new(),
            elapsed_ms: 0,
        }
    }

    pub fn timing(&self) -> Timing {
        self.timing
    }

    pub fn is_idle(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn pending(&self) -> usize {
        self.steps.len()
    }

    /// Grow and then despawn each handle, one after another.
    pub fn push_pops(&mut self, handles: impl IntoIterator<Item = ViewHandle>) {
        self.steps.extend(handles.into_iter().map(Step::Pop));
    }

    /// Play fill motions in the given order.
    pub fn push_falls(&mut self, motions: impl IntoIterator<Item = Motion>) {
        self.steps.extend(motions.into_iter().map(Step::Fall));
    }

    /// Pulse all `handles` together.
    pub fn push_pulse(&mut self, handles: Vec<ViewHandle>) {
        if !handles.is_empty() {
            self.steps.push_back(Step::Pulse(handles));
        }
    }

    /// Advance by `dt_ms`. Time left over after a step completes flows into
    /// the next one. Returns true while steps remain.
    pub fn tick(&mut self, dt_ms: u32, view: &mut dyn BoardView) -> bool {
        let mut budget = dt_ms;
        while let Some(step) = self.steps.front() {
            let duration = self.duration(step);
            let remaining = duration.saturating_sub(self.elapsed_ms);
            if budget >= remaining {
                budget -= remaining;
                self.elapsed_ms = 0;
                if let Some(step) = self.steps.pop_front() {
                    complete(&step, view);
                }
                continue;
            }

            self.elapsed_ms += budget;
            let k = self.elapsed_ms as f32 / duration as f32;
            animate(step, k, view);
            return true;
        }
        false
    }

    /// Jump every pending step to its end state.
    pub fn finish(&mut self, view: &mut dyn BoardView) {
        for step in self.steps.drain(..) {
            complete(&step, view);
        }
        self.elapsed_ms = 0;
    }

    fn duration(&self, step: &Step) -> u32 {
        match step {
            Step::Pop(_) => self.timing.pop_ms,
            Step::Fall(_) => self.timing.fall_ms,
            Step::Pulse(_) => self.timing.pulse_ms * 2,
        }
    }
}

impl Default for Timeline {
    fn default() -> Self {
        Self::new(Timing::default())
    }
}

/// Intermediate frame at progress `k` in `[0, 1)`.
fn animate(step: &Step, k: f32, view: &mut dyn BoardView) {
    match step {
        Step::Pop(handle) => view.set_scale(*handle, 1.0 + (POP_SCALE - 1.0) * k),
        Step::Fall(m) => view.place(m.handle, m.from.lerp(m.to, k)),
        Step::Pulse(handles) => {
            // Triangle wave: up to the peak at k = 0.5, back down by k = 1.
            let up = if k < 0.5 { k * 2.0 } else { (1.0 - k) * 2.0 };
            let scale = 1.0 + (PULSE_SCALE - 1.0) * up;
            for h in handles {
                view.set_scale(*h, scale);
            }
        }
    }
}

fn complete(step: &Step, view: &mut dyn BoardView) {
    match step {
        Step::Pop(handle) => view.despawn(*handle),
        Step::Fall(m) => view.place(m.handle, m.to),
        Step::Pulse(handles) => {
            for h in handles {
                view.set_scale(*h, 1.0);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ChipType, GridPoint};

    /// Records the calls the timeline makes.
    #[derive(Default)]
    struct Recorder {
        calls: Vec<String>,
    }

    impl BoardView for Recorder {
        fn spawn(&mut self, _chip: ChipType, _at: GridPoint) -> ViewHandle {
            ViewHandle(0)
        }
        fn despawn(&mut self, h: ViewHandle) {
            self.calls.push(format!("despawn {}", h.0));
        }
        fn place(&mut self, h: ViewHandle, at: GridPoint) {
            self.calls.push(format!("place {} {:.1}", h.0, at.row));
        }
        fn set_scale(&mut self, h: ViewHandle, s: f32) {
            self.calls.push(format!("scale {} {:.2}", h.0, s));
        }
        fn set_selected(&mut self, _h: ViewHandle, _selected: bool) {}
    }

    fn fall(handle: u64, from: f32, to: f32) -> Motion {
        Motion {
            handle: ViewHandle(handle),
            from: GridPoint::new(from, 0.0),
            to: GridPoint::new(to, 0.0),
            spawned: false,
        }
    }

    #[test]
    fn test_empty_timeline_is_idle() {
        let mut t = Timeline::default();
        assert!(t.is_idle());
        assert!(!t.tick(16, &mut Recorder::default()));
    }

    #[test]
    fn test_pop_scales_then_despawns() {
        let mut t = Timeline::new(Timing {
            pop_ms: 100,
            fall_ms: 100,
            pulse_ms: 100,
        });
        t.push_pops([ViewHandle(1)]);
        let mut v = Recorder::default();

        assert!(t.tick(40, &mut v));
        assert!(!t.tick(60, &mut v));
        assert_eq!(v.calls, vec!["scale 1 1.06", "despawn 1"]);
    }

    #[test]
    fn test_leftover_time_flows_into_next_step() {
        let mut t = Timeline::new(Timing {
            pop_ms: 10,
            fall_ms: 100,
            pulse_ms: 10,
        });
        t.push_pops([ViewHandle(1)]);
        t.push_falls([fall(2, 4.0, 0.0)]);
        let mut v = Recorder::default();

        // 10ms finishes the pop, the remaining 40ms is 40% of the fall.
        assert!(t.tick(50, &mut v));
        assert_eq!(v.calls, vec!["despawn 1", "place 2 2.4"]);
        assert_eq!(t.pending(), 1);
    }

    #[test]
    fn test_steps_run_in_order() {
        let mut t = Timeline::new(Timing::INSTANT);
        t.push_falls([fall(1, 2.0, 1.0), fall(2, 3.0, 2.0)]);
        t.push_pulse(vec![ViewHandle(1), ViewHandle(2)]);
        let mut v = Recorder::default();

        assert!(!t.tick(0, &mut v));
        assert_eq!(
            v.calls,
            vec!["place 1 1.0", "place 2 2.0", "scale 1 1.00", "scale 2 1.00"]
        );
    }

    #[test]
    fn test_finish_applies_end_states() {
        let mut t = Timeline::default();
        t.push_pops([ViewHandle(7)]);
        t.push_falls([fall(8, 5.0, 1.0)]);
        let mut v = Recorder::default();

        t.tick(16, &mut v);
        t.finish(&mut v);
        assert!(t.is_idle());
        assert_eq!(v.calls.last().map(String::as_str), Some("place 8 1.0"));
        assert!(v.calls.contains(&"despawn 7".to_string()));
    }

    #[test]
    fn test_empty_pulse_is_skipped() {
        let mut t = Timeline::default();
        t.push_pulse(Vec::new());
        assert!(t.is_idle());
    }
}
