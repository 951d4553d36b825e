//! Light-up tween state machine.
//!
//! `Idle -> Running(step in 0..=frames) -> Idle`. Each run is identified by a
//! generation; starting a new run or cancelling bumps the generation, so a
//! frame task issued for an older run no longer matches and is dropped.

use crate::constants::DEFAULT_LIGHT_UP_FRAMES;
use crate::ease::cubic_in_out;
use glam::DVec3;

/// Deferred work for the host's next frame callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameTask {
    /// Advance the light-up run with this generation by one step.
    Animate { generation: u64 },
    /// Rebuild the mesh for the container's current size.
    Resize,
}

/// Normalize a requested frame count: missing, non-finite or negative values
/// fall back to the default; others are rounded. Zero is kept and means a
/// single frame already at the target.
pub fn resolve_frames(frames: Option<f64>) -> u32 {
    match frames {
        Some(f) if f.is_finite() && f >= 0.0 => f.round().min(u32::MAX as f64) as u32,
        _ => DEFAULT_LIGHT_UP_FRAMES,
    }
}

/// Per-light runtime state of one run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LightTween {
    pub start: DVec3,
    pub target: DVec3,
    pub diff: DVec3,
}

impl LightTween {
    pub fn new(start: DVec3, target: DVec3) -> Self {
        Self {
            start,
            target,
            diff: target - start,
        }
    }

    /// Position at eased time `t`; exactly the target once `t` reaches 1.
    #[inline]
    pub fn at(&self, t: f64) -> DVec3 {
        if t >= 1.0 {
            self.target
        } else {
            self.start + self.diff * t
        }
    }
}

#[derive(Clone, Debug)]
struct Run {
    step: u32,
    frames: u32,
    tweens: Vec<LightTween>,
}

#[derive(Clone, Debug, Default)]
pub struct LightAnimator {
    generation: u64,
    run: Option<Run>,
}

impl LightAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a run at step 0, superseding any run in flight. Returns the new
    /// generation.
    pub fn begin(&mut self, tweens: Vec<LightTween>, frames: u32) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.run = Some(Run {
            step: 0,
            frames,
            tweens,
        });
        self.generation
    }

    /// Drop the current run; pending tasks for it become stale.
    pub fn cancel(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.run = None;
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_running(&self) -> bool {
        self.run.is_some()
    }

    /// True when `generation` names the run in flight.
    pub fn is_current(&self, generation: u64) -> bool {
        self.run.is_some() && generation == self.generation
    }

    pub fn step(&self) -> Option<u32> {
        self.run.as_ref().map(|r| r.step)
    }

    /// Eased progress of the current step. `frames == 0` counts as done.
    pub fn progress(&self) -> Option<f64> {
        self.run.as_ref().map(|r| {
            if r.frames == 0 {
                1.0
            } else {
                cubic_in_out(r.step as f64 / r.frames as f64)
            }
        })
    }

    /// Light positions for the current step, in light order.
    pub fn positions(&self) -> Vec<DVec3> {
        match (&self.run, self.progress()) {
            (Some(run), Some(t)) => run.tweens.iter().map(|tw| tw.at(t)).collect(),
            _ => Vec::new(),
        }
    }

    pub fn has_more(&self) -> bool {
        self.run.as_ref().is_some_and(|r| r.step < r.frames)
    }

    /// Move to the next step. Returns false when the run is already on its
    /// last step or there is no run.
    pub fn advance(&mut self) -> bool {
        match &mut self.run {
            Some(run) if run.step < run.frames => {
                run.step += 1;
                true
            }
            _ => false,
        }
    }

    /// Leave the run after its final frame. The generation is kept so the
    /// finished run is simply no longer current.
    pub fn finish(&mut self) {
        self.run = None;
    }

    /// Task that continues the current run on the next frame, if any.
    pub fn next_task(&self) -> Option<FrameTask> {
        self.has_more().then_some(FrameTask::Animate {
            generation: self.generation,
        })
    }
}
