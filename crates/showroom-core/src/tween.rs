//! Keyed transition scheduler.
//!
//! Every animated property is addressed by a [`TargetKey`] and has at most one
//! live transition. Starting a transition on an occupied key cancels the old
//! one first, so no two writers ever touch the same property. Cancelling
//! leaves the property at the last value written; callers that need a clean
//! restore use [`Scheduler::assign`].
//!
//! The scheduler does not own the animated values. Each tick it samples the
//! live transitions and writes through an [`AnimationTarget`].

use fnv::FnvHashMap;
use glam::Vec3;
use std::f32::consts::PI;
use std::fmt;
use std::time::Duration;

use crate::registry::ObjectId;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TargetKey {
    CameraPosition,
    CameraRotation,
    ObjectY(ObjectId),
}

impl fmt::Display for TargetKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetKey::CameraPosition => write!(f, "camera.position"),
            TargetKey::CameraRotation => write!(f, "camera.rotation"),
            TargetKey::ObjectY(id) => write!(f, "object{}.position.y", id.index()),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TweenValue {
    Scalar(f32),
    Vector(Vec3),
}

impl TweenValue {
    /// Componentwise interpolation. Mismatched kinds snap to `to`.
    pub fn lerp(self, to: TweenValue, t: f32) -> TweenValue {
        match (self, to) {
            (TweenValue::Scalar(a), TweenValue::Scalar(b)) => TweenValue::Scalar(a + (b - a) * t),
            (TweenValue::Vector(a), TweenValue::Vector(b)) => TweenValue::Vector(a.lerp(b, t)),
            _ => to,
        }
    }

    pub fn as_scalar(self) -> Option<f32> {
        match self {
            TweenValue::Scalar(v) => Some(v),
            TweenValue::Vector(_) => None,
        }
    }

    pub fn as_vector(self) -> Option<Vec3> {
        match self {
            TweenValue::Vector(v) => Some(v),
            TweenValue::Scalar(_) => None,
        }
    }

    fn same_kind(self, other: TweenValue) -> bool {
        matches!(
            (self, other),
            (TweenValue::Scalar(_), TweenValue::Scalar(_))
                | (TweenValue::Vector(_), TweenValue::Vector(_))
        )
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Easing {
    Linear,
    /// Quadratic deceleration.
    #[default]
    EaseOut,
    /// Sinusoidal ease at both ends.
    EaseInOut,
}

impl Easing {
    #[inline]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::EaseInOut => -((PI * t).cos() - 1.0) * 0.5,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RepeatMode {
    Once,
    /// Ping-pong between the endpoints until cancelled.
    YoyoForever,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TweenSpec {
    pub duration_secs: f32,
    pub easing: Easing,
    pub repeat: RepeatMode,
}

impl TweenSpec {
    pub fn once(duration_secs: f32, easing: Easing) -> Self {
        Self {
            duration_secs,
            easing,
            repeat: RepeatMode::Once,
        }
    }

    /// `half_cycle_secs` is the time for one leg (from -> to).
    pub fn yoyo(half_cycle_secs: f32, easing: Easing) -> Self {
        Self {
            duration_secs: half_cycle_secs,
            easing,
            repeat: RepeatMode::YoyoForever,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TweenHandle(u64);

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum JournalEntry {
    Started { key: TargetKey, handle: TweenHandle },
    Cancelled { key: TargetKey, handle: TweenHandle },
    Completed { key: TargetKey, handle: TweenHandle },
    Assigned { key: TargetKey },
}

/// Property store the scheduler animates.
pub trait AnimationTarget {
    fn read(&self, key: TargetKey) -> Option<TweenValue>;
    fn write(&mut self, key: TargetKey, value: TweenValue);
}

#[derive(Clone, Debug)]
struct Transition {
    handle: TweenHandle,
    from: TweenValue,
    to: TweenValue,
    spec: TweenSpec,
    started_at: f64,
}

impl Transition {
    /// Value at scheduler time `now`, and whether the transition is done.
    fn sample(&self, now: f64) -> (TweenValue, bool) {
        let elapsed = (now - self.started_at).max(0.0) as f32;
        let duration = self.spec.duration_secs;
        match self.spec.repeat {
            RepeatMode::Once => {
                if elapsed >= duration {
                    (self.to, true)
                } else {
                    let t = self.spec.easing.apply(elapsed / duration);
                    (self.from.lerp(self.to, t), false)
                }
            }
            RepeatMode::YoyoForever => {
                let phase = elapsed / duration;
                let leg = phase.floor() as u64;
                let frac = phase - phase.floor();
                let t = if leg % 2 == 0 { frac } else { 1.0 - frac };
                (self.from.lerp(self.to, self.spec.easing.apply(t)), false)
            }
        }
    }
}

#[derive(Debug, Default)]
pub struct Scheduler {
    clock: f64,
    next_handle: u64,
    active: FnvHashMap<TargetKey, Transition>,
    journal: Option<Vec<JournalEntry>>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scheduler that records every start/cancel/complete/assign.
    pub fn with_journal() -> Self {
        Self {
            journal: Some(Vec::new()),
            ..Self::default()
        }
    }

    /// Seconds of scheduler time advanced so far.
    pub fn now(&self) -> f64 {
        self.clock
    }

    /// Start a transition on `key`, superseding any live one.
    pub fn animate(
        &mut self,
        key: TargetKey,
        from: TweenValue,
        to: TweenValue,
        mut spec: TweenSpec,
    ) -> TweenHandle {
        // the old writer must be gone before the new one is registered
        self.cancel(key);

        if !from.same_kind(to) {
            log::warn!("[tween] {} endpoints differ in kind; will snap to target", key);
        }
        if !(spec.duration_secs.is_finite() && spec.duration_secs > 0.0) {
            if spec.repeat == RepeatMode::YoyoForever {
                log::warn!("[tween] {} yoyo with non-positive duration; running once", key);
            }
            spec.duration_secs = 0.0;
            spec.repeat = RepeatMode::Once;
        }

        let handle = TweenHandle(self.next_handle);
        self.next_handle += 1;
        self.active.insert(
            key,
            Transition {
                handle,
                from,
                to,
                spec,
                started_at: self.clock,
            },
        );
        log::debug!("[tween] start {} {:?} ({:?})", key, handle, spec.repeat);
        self.record(JournalEntry::Started { key, handle });
        handle
    }

    /// Stop the live transition on `key`, if any. The property keeps its
    /// current value.
    pub fn cancel(&mut self, key: TargetKey) -> bool {
        match self.active.remove(&key) {
            Some(old) => {
                log::debug!("[tween] cancel {} {:?}", key, old.handle);
                self.record(JournalEntry::Cancelled {
                    key,
                    handle: old.handle,
                });
                true
            }
            None => false,
        }
    }

    /// Cancel `key` and write `value` immediately.
    pub fn assign(&mut self, key: TargetKey, value: TweenValue, target: &mut dyn AnimationTarget) {
        self.cancel(key);
        target.write(key, value);
        self.record(JournalEntry::Assigned { key });
    }

    pub fn is_active(&self, key: TargetKey) -> bool {
        self.active.contains_key(&key)
    }

    pub fn is_live(&self, handle: TweenHandle) -> bool {
        self.active.values().any(|t| t.handle == handle)
    }

    pub fn handle_for(&self, key: TargetKey) -> Option<TweenHandle> {
        self.active.get(&key).map(|t| t.handle)
    }

    pub fn active_keys(&self) -> impl Iterator<Item = TargetKey> + '_ {
        self.active.keys().copied()
    }

    /// Advance scheduler time by `dt` and write every live transition's
    /// current value. Finished `Once` transitions land exactly on their
    /// end value and are dropped.
    pub fn advance(&mut self, dt: Duration, target: &mut dyn AnimationTarget) {
        self.clock += dt.as_secs_f64();
        let now = self.clock;
        let mut finished: Vec<(TargetKey, TweenHandle)> = Vec::new();
        for (key, transition) in &self.active {
            let (value, done) = transition.sample(now);
            target.write(*key, value);
            if done {
                finished.push((*key, transition.handle));
            }
        }
        for (key, handle) in finished {
            self.active.remove(&key);
            log::debug!("[tween] complete {} {:?}", key, handle);
            self.record(JournalEntry::Completed { key, handle });
        }
    }

    pub fn journal(&self) -> &[JournalEntry] {
        self.journal.as_deref().unwrap_or(&[])
    }

    pub fn clear_journal(&mut self) {
        if let Some(j) = &mut self.journal {
            j.clear();
        }
    }

    fn record(&mut self, entry: JournalEntry) {
        if let Some(j) = &mut self.journal {
            j.push(entry);
        }
    }
}
