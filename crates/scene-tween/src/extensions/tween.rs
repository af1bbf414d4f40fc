// extensions/tween.rs
//
// Frame-stepped tweens over scene entities.
// Each `Tween::step` call is one frame: it reads the current value, checks
// convergence, and otherwise nudges the value a `dt * speed` fraction closer.
//
// Usage:
//   let mut tweens = TweenState::new();
//   tweens.add(Tween::sprite_alpha(entity_id, 0.0, 4.0, true));
//   tweens.tick(dt, &mut scene);  // Advances all tweens, updates entities

use std::collections::HashMap;
use std::fmt;
use glam::{Vec3, Vec4};
use crate::api::config::TweenConfig;
use crate::api::types::{EntityId, TweenId};
use crate::components::entity::Entity;
use crate::core::scene::Scene;
use crate::core::time::FixedTimestep;
use super::lerp::{approx_eq_color, approx_eq_vec3, lerp, lerp_color, lerp_vec3};

/// Which position a position tween drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Space {
    /// Absolute scene position (parent transforms applied).
    World,
    /// Position relative to the parent.
    Local,
}

/// What property a tween animates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TweenTarget {
    /// Animate the sprite color's alpha channel toward `alpha`.
    SpriteAlpha { alpha: f32, destroy_on_finish: bool },
    /// Snap to `from` after the delay, then animate toward `to`.
    Position { space: Space, from: Vec3, to: Vec3, deactivate_on_finish: bool },
    /// Set `from` immediately, then animate the canvas group alpha toward `to`.
    CanvasGroupAlpha { from: f32, to: f32, deactivate_on_finish: bool },
}

/// Result of a single step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TweenStatus {
    /// Not converged yet; step again next frame.
    Running,
    /// Converged and finish actions ran.
    Completed,
    /// The target entity or component disappeared; nothing further was written.
    Interrupted,
}

impl TweenStatus {
    pub fn is_done(self) -> bool {
        self != TweenStatus::Running
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    /// Nothing has run yet.
    Pending,
    /// Waiting out the start delay.
    Delaying,
    Interpolating,
    Finished(TweenStatus),
}

/// Typed completion hook for canvas group fades.
///
/// The handler runs once, against the receiver entity, and only if the
/// receiver is still in the scene when the fade completes.
pub struct CompletionCallback {
    receiver: EntityId,
    handler: Box<dyn FnOnce(&mut Entity)>,
}

impl CompletionCallback {
    pub fn new(receiver: EntityId, handler: impl FnOnce(&mut Entity) + 'static) -> Self {
        Self {
            receiver,
            handler: Box::new(handler),
        }
    }

    fn invoke(self, scene: &mut Scene) {
        match scene.get_mut(self.receiver) {
            Some(entity) => (self.handler)(entity),
            None => log::debug!("callback receiver {:?} gone, skipping", self.receiver),
        }
    }
}

impl fmt::Debug for CompletionCallback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompletionCallback")
            .field("receiver", &self.receiver)
            .finish_non_exhaustive()
    }
}

/// A single tween animation.
#[derive(Debug)]
pub struct Tween {
    /// Entity being animated. Re-resolved every step.
    pub entity: EntityId,
    /// What to animate.
    pub target: TweenTarget,
    /// Fraction of the remaining distance covered per second.
    pub speed: f32,
    /// Seconds to wait before the first write (position and canvas tweens).
    pub delay: f32,
    /// Time spent in the delay so far.
    pub elapsed: f32,
    /// Whether currently playing (can be paused).
    pub playing: bool,
    /// Optional event ID reported by `TweenState::drain_completed`.
    pub on_complete: Option<u32>,
    callback: Option<CompletionCallback>,
    phase: Phase,
    /// Sprite color captured on the first step, alpha replaced.
    wanted_color: Vec4,
    /// Canvas group distance measured on the previous step.
    last_distance: f32,
}

impl Tween {
    fn new(entity: EntityId, target: TweenTarget, speed: f32, delay: f32) -> Self {
        Self {
            entity,
            target,
            speed,
            delay,
            elapsed: 0.0,
            playing: true,
            on_complete: None,
            callback: None,
            phase: Phase::Pending,
            wanted_color: Vec4::ZERO,
            last_distance: f32::INFINITY,
        }
    }

    /// Fade a sprite's alpha toward `alpha`, keeping its RGB.
    /// With `destroy_on_finish`, the entity and its descendants are destroyed
    /// once the color converges.
    pub fn sprite_alpha(entity: EntityId, alpha: f32, speed: f32, destroy_on_finish: bool) -> Self {
        Self::new(
            entity,
            TweenTarget::SpriteAlpha { alpha, destroy_on_finish },
            speed,
            0.0,
        )
    }

    /// Move an entity in world space from `from` to `to` after `delay` seconds.
    pub fn position(
        entity: EntityId,
        from: Vec3,
        to: Vec3,
        speed: f32,
        delay: f32,
        deactivate_on_finish: bool,
    ) -> Self {
        Self::new(
            entity,
            TweenTarget::Position { space: Space::World, from, to, deactivate_on_finish },
            speed,
            delay,
        )
    }

    /// Same as `position`, relative to the entity's parent.
    pub fn local_position(
        entity: EntityId,
        from: Vec3,
        to: Vec3,
        speed: f32,
        delay: f32,
        deactivate_on_finish: bool,
    ) -> Self {
        Self::new(
            entity,
            TweenTarget::Position { space: Space::Local, from, to, deactivate_on_finish },
            speed,
            delay,
        )
    }

    /// Fade a canvas group. Finishes once the alpha is within
    /// `TweenConfig::alpha_tolerance` of `to`; the alpha is not snapped.
    pub fn canvas_group_alpha(
        entity: EntityId,
        from: f32,
        to: f32,
        speed: f32,
        delay: f32,
        deactivate_on_finish: bool,
    ) -> Self {
        Self::new(
            entity,
            TweenTarget::CanvasGroupAlpha { from, to, deactivate_on_finish },
            speed,
            delay,
        )
    }

    // -- Builder methods --

    /// Run `handler` on `receiver` when a canvas group fade completes.
    /// Ignored by other tween kinds.
    pub fn with_callback(mut self, receiver: EntityId, handler: impl FnOnce(&mut Entity) + 'static) -> Self {
        self.callback = Some(CompletionCallback::new(receiver, handler));
        self
    }

    pub fn with_on_complete(mut self, event_id: u32) -> Self {
        self.on_complete = Some(event_id);
        self
    }

    pub fn paused(mut self) -> Self {
        self.playing = false;
        self
    }

    /// Whether the tween has completed or been interrupted.
    pub fn is_finished(&self) -> bool {
        matches!(self.phase, Phase::Finished(_))
    }

    /// Advance one frame. Once the tween is done, further calls return the
    /// same status and touch nothing.
    pub fn step(&mut self, dt: f32, scene: &mut Scene, config: &TweenConfig) -> TweenStatus {
        if let Phase::Finished(status) = self.phase {
            return status;
        }

        let status = match self.target {
            TweenTarget::SpriteAlpha { .. } => self.step_sprite_alpha(dt, scene, config),
            TweenTarget::Position { .. } => self.step_position(dt, scene, config),
            TweenTarget::CanvasGroupAlpha { .. } => self.step_canvas_group(dt, scene, config),
        };

        if status.is_done() {
            self.phase = Phase::Finished(status);
        }
        status
    }

    /// Accumulate delay time. True once the delay has been served.
    fn delay_elapsed(&mut self, dt: f32) -> bool {
        if self.phase == Phase::Interpolating {
            return true;
        }
        self.phase = Phase::Delaying;
        self.elapsed += dt;
        self.elapsed >= self.delay
    }

    /// Clamped lerp factor for this frame.
    fn factor(&self, dt: f32) -> f32 {
        (dt * self.speed).clamp(0.0, 1.0)
    }

    fn step_sprite_alpha(&mut self, dt: f32, scene: &mut Scene, config: &TweenConfig) -> TweenStatus {
        let TweenTarget::SpriteAlpha { alpha, destroy_on_finish } = self.target else {
            return TweenStatus::Interrupted;
        };
        let t = self.factor(dt);
        let Some(sprite) = scene.get_mut(self.entity).and_then(|e| e.sprite.as_mut()) else {
            return TweenStatus::Interrupted;
        };

        if self.phase == Phase::Pending {
            self.wanted_color = sprite.color;
            self.wanted_color.w = alpha;
            self.phase = Phase::Interpolating;
        }

        let current = sprite.color;
        let converged = approx_eq_color(current, self.wanted_color, config.color_epsilon) || {
            let next = lerp_color(current, self.wanted_color, t);
            sprite.color = next;
            // A lerp that no longer moves the value has run out of f32 precision.
            (t > 0.0 && next == current) || approx_eq_color(next, self.wanted_color, config.color_epsilon)
        };
        if !converged {
            return TweenStatus::Running;
        }

        sprite.color = self.wanted_color;
        if destroy_on_finish {
            scene.destroy(self.entity);
        }
        TweenStatus::Completed
    }

    fn step_position(&mut self, dt: f32, scene: &mut Scene, config: &TweenConfig) -> TweenStatus {
        let TweenTarget::Position { space, from, to, deactivate_on_finish } = self.target else {
            return TweenStatus::Interrupted;
        };

        if !scene.contains(self.entity) {
            return TweenStatus::Interrupted;
        }
        if !self.delay_elapsed(dt) {
            return TweenStatus::Running;
        }
        if self.phase == Phase::Delaying {
            write_position(scene, self.entity, space, from);
            self.phase = Phase::Interpolating;
        }

        let Some(current) = read_position(scene, self.entity, space) else {
            return TweenStatus::Interrupted;
        };

        let t = self.factor(dt);
        let converged = approx_eq_vec3(current, to, config.position_epsilon) || {
            write_position(scene, self.entity, space, lerp_vec3(current, to, t));
            // Read back: world writes round-trip through the parent transform.
            let moved = read_position(scene, self.entity, space).unwrap_or(current);
            (t > 0.0 && moved == current) || approx_eq_vec3(moved, to, config.position_epsilon)
        };
        if !converged {
            return TweenStatus::Running;
        }

        write_position(scene, self.entity, space, to);
        if deactivate_on_finish {
            deactivate(scene, self.entity);
        }
        TweenStatus::Completed
    }

    fn step_canvas_group(&mut self, dt: f32, scene: &mut Scene, config: &TweenConfig) -> TweenStatus {
        let TweenTarget::CanvasGroupAlpha { from, to, deactivate_on_finish } = self.target else {
            return TweenStatus::Interrupted;
        };
        let t = self.factor(dt);
        let Some(group) = scene.get_mut(self.entity).and_then(|e| e.canvas_group.as_mut()) else {
            return TweenStatus::Interrupted;
        };

        if self.phase == Phase::Pending {
            group.alpha = from;
        }
        if !self.delay_elapsed(dt) {
            return TweenStatus::Running;
        }
        if self.phase == Phase::Delaying {
            self.last_distance = (group.alpha - to).abs();
            self.phase = Phase::Interpolating;
        }

        // The distance is measured before each lerp, so the step that sees it
        // drop under the tolerance has already moved the alpha once more.
        if self.last_distance > config.alpha_tolerance {
            self.last_distance = (group.alpha - to).abs();
            group.alpha = lerp(group.alpha, to, t);
            return TweenStatus::Running;
        }

        if let Some(callback) = self.callback.take() {
            callback.invoke(scene);
        }
        if deactivate_on_finish {
            deactivate(scene, self.entity);
        }
        TweenStatus::Completed
    }
}

fn deactivate(scene: &mut Scene, id: EntityId) {
    if let Some(entity) = scene.get_mut(id) {
        entity.active = false;
    }
}

fn read_position(scene: &Scene, id: EntityId, space: Space) -> Option<Vec3> {
    match space {
        Space::World => scene.world_position(id),
        Space::Local => scene.get(id).map(|e| e.local_pos()),
    }
}

fn write_position(scene: &mut Scene, id: EntityId, space: Space, pos: Vec3) {
    match space {
        Space::World => {
            scene.set_world_position(id, pos);
        }
        Space::Local => {
            if let Some(entity) = scene.get_mut(id) {
                entity.transform.position = pos;
            }
        }
    }
}

/// Manages all active tweens.
///
/// Finished and interrupted tweens are dropped on the tick that finishes them.
/// Two tweens driving the same property of one entity will fight; callers
/// should check `is_tweening` or `remove_entity` first.
#[derive(Debug)]
pub struct TweenState {
    tweens: HashMap<TweenId, Tween>,
    next_id: u32,
    /// Completed tween events to be polled.
    completed_events: Vec<u32>,
    config: TweenConfig,
    timestep: FixedTimestep,
}

impl Default for TweenState {
    fn default() -> Self {
        Self::with_config(TweenConfig::default())
    }
}

impl TweenState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: TweenConfig) -> Self {
        let timestep = FixedTimestep::with_max_steps(config.fixed_dt, config.max_steps_per_frame);
        Self {
            tweens: HashMap::new(),
            next_id: 0,
            completed_events: Vec::new(),
            config,
            timestep,
        }
    }

    pub fn config(&self) -> &TweenConfig {
        &self.config
    }

    /// Add a tween. Returns a handle for later control.
    pub fn add(&mut self, tween: Tween) -> TweenId {
        let id = TweenId(self.next_id);
        self.next_id += 1;
        log::debug!("tween {:?} added for {:?}: {:?}", id, tween.entity, tween.target);
        self.tweens.insert(id, tween);
        id
    }

    /// Remove a tween by handle. No finish actions run.
    pub fn remove(&mut self, id: TweenId) -> bool {
        self.tweens.remove(&id).is_some()
    }

    /// Remove all tweens for an entity.
    pub fn remove_entity(&mut self, entity: EntityId) {
        self.tweens.retain(|_, t| t.entity != entity);
    }

    /// Whether any tween targets this entity.
    pub fn is_tweening(&self, entity: EntityId) -> bool {
        self.tweens.values().any(|t| t.entity == entity)
    }

    /// Pause a tween.
    pub fn pause(&mut self, id: TweenId) {
        if let Some(tween) = self.tweens.get_mut(&id) {
            tween.playing = false;
        }
    }

    /// Resume a paused tween.
    pub fn resume(&mut self, id: TweenId) {
        if let Some(tween) = self.tweens.get_mut(&id) {
            tween.playing = true;
        }
    }

    /// Pause all tweens.
    pub fn pause_all(&mut self) {
        for tween in self.tweens.values_mut() {
            tween.playing = false;
        }
    }

    /// Resume all tweens.
    pub fn resume_all(&mut self) {
        for tween in self.tweens.values_mut() {
            tween.playing = true;
        }
    }

    /// Get a tween by handle.
    pub fn get(&self, id: TweenId) -> Option<&Tween> {
        self.tweens.get(&id)
    }

    /// Get a tween mutably.
    pub fn get_mut(&mut self, id: TweenId) -> Option<&mut Tween> {
        self.tweens.get_mut(&id)
    }

    /// Step every playing tween once with `dt`.
    /// Returns the number of tweens that completed this tick.
    pub fn tick(&mut self, dt: f32, scene: &mut Scene) -> usize {
        let mut finished = Vec::new();
        let mut completed = 0;

        for (&id, tween) in self.tweens.iter_mut() {
            if !tween.playing {
                continue;
            }

            match tween.step(dt, scene, &self.config) {
                TweenStatus::Running => {}
                TweenStatus::Completed => {
                    log::debug!("tween {:?} completed for {:?}", id, tween.entity);
                    if let Some(event_id) = tween.on_complete {
                        self.completed_events.push(event_id);
                    }
                    completed += 1;
                    finished.push(id);
                }
                TweenStatus::Interrupted => {
                    log::debug!("tween {:?} interrupted: {:?} is gone", id, tween.entity);
                    finished.push(id);
                }
            }
        }

        for id in finished {
            self.tweens.remove(&id);
        }

        completed
    }

    /// Feed a variable frame delta through the fixed timestep and run the
    /// resulting number of `tick`s. Returns the total completed.
    pub fn advance(&mut self, frame_dt: f32, scene: &mut Scene) -> usize {
        let steps = self.timestep.accumulate(frame_dt);
        let dt = self.timestep.dt();
        (0..steps).map(|_| self.tick(dt, scene)).sum()
    }

    /// Drain completed tween events.
    pub fn drain_completed(&mut self) -> impl Iterator<Item = u32> + '_ {
        self.completed_events.drain(..)
    }

    /// Number of active tweens.
    pub fn len(&self) -> usize {
        self.tweens.len()
    }

    /// Whether there are no active tweens.
    pub fn is_empty(&self) -> bool {
        self.tweens.is_empty()
    }

    /// Clear all tweens.
    pub fn clear(&mut self) {
        self.tweens.clear();
        self.completed_events.clear();
    }
}
