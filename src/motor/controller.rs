//! Motor domain: the per-character controller driven by the host loop.
//!
//! The host calls [`CharacterMotor::on_simulation_step`] once per visual frame
//! and [`CharacterMotor::on_fixed_step`] on the physics cadence. The motor
//! never owns the physics body or the animator; both are borrowed per call.

use bevy::prelude::*;

use crate::motor::{
    AnimFlag, AnimationSink, Facing, InputIntent, MotorLink, MotorTuning, PhysicsWorld,
};

/// Axis magnitude below which facing is left alone.
pub const FACING_DEAD_ZONE: f32 = 0.01;
/// Horizontal speed below which the character counts as standing still.
pub const WALK_DEAD_ZONE: f32 = 0.1;

#[derive(Component, Debug, Clone)]
pub struct CharacterMotor {
    tuning: MotorTuning,
    grounded: bool,
    attack_timer: f32,
    facing: Facing,
}

impl CharacterMotor {
    pub fn new(tuning: MotorTuning) -> Self {
        Self {
            tuning,
            grounded: false,
            attack_timer: 0.0,
            facing: Facing::default(),
        }
    }

    pub fn tuning(&self) -> &MotorTuning {
        &self.tuning
    }

    /// Grounded state as last computed (and possibly cleared by a jump).
    pub fn grounded(&self) -> bool {
        self.grounded
    }

    pub fn attack_timer(&self) -> f32 {
        self.attack_timer
    }

    pub fn is_attacking(&self) -> bool {
        self.attack_timer > 0.0
    }

    pub fn facing(&self) -> Facing {
        self.facing
    }

    /// World-space probe origins for the given character transform.
    pub fn probe_points<'a>(
        &'a self,
        transform: &'a Transform,
    ) -> impl Iterator<Item = Vec2> + 'a {
        self.tuning
            .ground_probes
            .iter()
            .map(move |offset| transform.transform_point(offset.extend(0.0)).truncate())
    }

    /// Spawn-time setup of the body this motor drives.
    pub fn attach<W: PhysicsWorld>(&self, world: &mut W, body: W::Body) {
        world.lock_rotation(body);
    }

    /// True if any probe overlaps a ground collider that is not `body`.
    pub fn is_grounded<W: PhysicsWorld>(
        &self,
        world: &W,
        body: W::Body,
        transform: &Transform,
    ) -> bool {
        let radius = self.tuning.ground_check_radius;
        let layers = self.tuning.ground_layers;

        self.probe_points(transform).any(|point| {
            world
                .overlap_circle_all(point, radius, layers)
                .into_iter()
                .any(|other| other != body)
        })
    }

    /// Variable-rate step: ground check, movement, jump, attack start and
    /// animation flags, in that order.
    pub fn on_simulation_step<W: PhysicsWorld, S: AnimationSink>(
        &mut self,
        link: &mut MotorLink<'_, W, S>,
        input: &InputIntent,
        dt: f32,
    ) {
        let was_grounded = self.grounded;
        self.grounded = self.is_grounded(&*link.world, link.body, &*link.transform);

        if self.grounded && !was_grounded {
            debug!("Landed: body={:?}", link.body);
        } else if !self.grounded && was_grounded {
            debug!("Left ground: body={:?}", link.body);
        }

        let horizontal_velocity = self.apply_movement(link, input.horizontal_axis);
        self.apply_jump(link, input.jump_pressed);
        self.start_attack(input.attack_pressed);

        trace!(
            "Motor step: dt={:.4}, vx={:.2}, grounded={}, attack_timer={:.3}",
            dt, horizontal_velocity, self.grounded, self.attack_timer
        );

        let animator = &mut *link.animator;
        animator.set_flag(AnimFlag::IsGrounded, self.grounded);
        animator.set_flag(AnimFlag::IsWalking, horizontal_velocity.abs() > WALK_DEAD_ZONE);
        animator.set_flag(AnimFlag::IsAttacking, self.is_attacking());
    }

    /// Fixed-rate step: counts the attack timer down.
    pub fn on_fixed_step<S: AnimationSink>(&mut self, animator: &mut S, fixed_dt: f32) {
        if self.attack_timer > 0.0 {
            self.attack_timer = (self.attack_timer - fixed_dt).max(0.0);
            animator.set_flag(AnimFlag::IsAttacking, self.is_attacking());
        }
    }

    /// Sets horizontal velocity and facing; returns the new horizontal velocity.
    fn apply_movement<W: PhysicsWorld, S: AnimationSink>(
        &mut self,
        link: &mut MotorLink<'_, W, S>,
        axis: f32,
    ) -> f32 {
        let axis = if axis.is_finite() {
            axis.clamp(-1.0, 1.0)
        } else {
            0.0
        };

        let velocity = link.world.velocity(link.body);
        let vx = axis * self.tuning.speed;
        link.world.set_velocity(link.body, Vec2::new(vx, velocity.y));

        let facing = if axis > FACING_DEAD_ZONE {
            Some(Facing::Right)
        } else if axis < -FACING_DEAD_ZONE {
            Some(Facing::Left)
        } else {
            None
        };
        if let Some(facing) = facing {
            self.facing = facing;
            link.transform.scale.x = link.transform.scale.x.abs() * facing.sign();
        }

        vx
    }

    fn apply_jump<W: PhysicsWorld, S: AnimationSink>(
        &mut self,
        link: &mut MotorLink<'_, W, S>,
        jump_pressed: bool,
    ) {
        if !(self.grounded && jump_pressed) {
            return;
        }

        link.world
            .apply_impulse(link.body, Vec2::Y * self.tuning.jump_impulse);
        // Contacts only refresh after the physics step; report airborne now.
        self.grounded = false;
        debug!(
            "Jump: body={:?}, impulse={}",
            link.body, self.tuning.jump_impulse
        );
    }

    fn start_attack(&mut self, attack_pressed: bool) {
        if attack_pressed && self.attack_timer <= 0.0 {
            self.attack_timer = self.tuning.attack_duration;
            debug!("Attack started: duration={}", self.tuning.attack_duration);
        }
    }
}
