//! Clip playback with bounded repetitions.
//!
//! An [`AnimationPlayer`] owns the named clips of one model and plays at most
//! one of them at a time. It only tracks time; what a clip moves is up to the
//! renderer. The one thing the cast needs from it is the completion
//! notification: [`AnimationPlayer::update`] returns `true` exactly on the
//! frame the last repetition ends, and the owner turns that into a signal or
//! callback.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// A named clip and its length in seconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimationClip {
    pub name: String,
    pub duration: f32,
}

impl AnimationClip {
    pub fn new(name: impl Into<String>, duration: f32) -> Self {
        Self {
            name: name.into(),
            duration,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct AnimationPlayer {
    clips: FxHashMap<String, AnimationClip>,
    current: Option<String>,
    /// Time inside the current repetition.
    time: f32,
    repetitions: u32,
    completed: u32,
    running: bool,
}

impl AnimationPlayer {
    pub fn new(clips: impl IntoIterator<Item = AnimationClip>) -> Self {
        let mut player = Self::default();
        for clip in clips {
            player.add_clip(clip);
        }
        player
    }

    pub fn add_clip(&mut self, clip: AnimationClip) {
        self.clips.insert(clip.name.clone(), clip);
    }

    pub fn has_clip(&self, name: &str) -> bool {
        self.clips.contains_key(name)
    }

    /// Start (or keep) playing `clip`, finishing after `repetitions` loops.
    ///
    /// Switching clips rewinds; calling `play` again on the running clip only
    /// updates the repetition budget.
    pub fn play(&mut self, clip: &str, repetitions: u32) -> Result<(), String> {
        if !self.clips.contains_key(clip) {
            return Err(format!("Unknown animation clip '{}'", clip));
        }
        if self.current.as_deref() != Some(clip) {
            self.current = Some(clip.to_string());
            self.time = 0.0;
            self.completed = 0;
        }
        self.repetitions = repetitions.max(1);
        self.running = true;
        Ok(())
    }

    /// Rewind the current clip to its start without changing whether it runs.
    pub fn reset(&mut self) {
        self.time = 0.0;
        self.completed = 0;
    }

    /// Halt playback and rewind.
    pub fn stop(&mut self) {
        self.running = false;
        self.time = 0.0;
        self.completed = 0;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn current_clip(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Repetitions fully played since the last (re)start.
    pub fn completed_repetitions(&self) -> u32 {
        self.completed
    }

    /// Fraction of the current repetition in `[0, 1]`.
    pub fn progress(&self) -> f32 {
        match self.current_duration() {
            Some(d) if d > 0.0 => (self.time / d).clamp(0.0, 1.0),
            _ => 0.0,
        }
    }

    fn current_duration(&self) -> Option<f32> {
        self.current
            .as_ref()
            .and_then(|name| self.clips.get(name))
            .map(|clip| clip.duration)
    }

    /// Advance by `dt` seconds. Returns `true` when playback just finished.
    pub fn update(&mut self, dt: f32) -> bool {
        if !self.running {
            return false;
        }
        let Some(duration) = self.current_duration() else {
            self.running = false;
            return false;
        };
        if duration <= 0.0 {
            self.completed = self.repetitions;
            self.running = false;
            return true;
        }

        self.time += dt.max(0.0);
        while self.time >= duration {
            self.time -= duration;
            self.completed += 1;
            if self.completed >= self.repetitions {
                self.time = duration;
                self.running = false;
                return true;
            }
        }
        false
    }
}
