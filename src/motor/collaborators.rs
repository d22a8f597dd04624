//! Motor domain: the physics and animation seams the motor drives.

use avian2d::prelude::LayerMask;
use bevy::prelude::*;

/// Physics queries and body mutations the motor needs from the host world.
pub trait PhysicsWorld {
    /// Opaque handle identifying a rigid body.
    type Body: Copy + PartialEq + std::fmt::Debug;

    /// Bodies owning a collider that overlaps the circle, restricted to `layers`.
    fn overlap_circle_all(&self, point: Vec2, radius: f32, layers: LayerMask) -> Vec<Self::Body>;

    fn velocity(&self, body: Self::Body) -> Vec2;

    fn set_velocity(&mut self, body: Self::Body, velocity: Vec2);

    /// Instantaneous change of momentum.
    fn apply_impulse(&mut self, body: Self::Body, impulse: Vec2);

    fn lock_rotation(&mut self, body: Self::Body);
}

/// Boolean animation parameters reported by the motor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimFlag {
    IsGrounded,
    IsWalking,
    IsAttacking,
}

impl AnimFlag {
    /// Parameter name as it appears in animation graphs.
    pub fn name(self) -> &'static str {
        match self {
            AnimFlag::IsGrounded => "isGrounded",
            AnimFlag::IsWalking => "isWalking",
            AnimFlag::IsAttacking => "isAttacking",
        }
    }
}

/// Receiver for animation flags.
pub trait AnimationSink {
    fn set_flag(&mut self, flag: AnimFlag, value: bool);
}

/// Everything a simulation step touches outside the motor itself.
pub struct MotorLink<'a, W: PhysicsWorld, S: AnimationSink> {
    pub world: &'a mut W,
    pub body: W::Body,
    pub transform: &'a mut Transform,
    pub animator: &'a mut S,
}
