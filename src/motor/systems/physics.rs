//! Motor domain: avian2d implementation of the motor's physics seam.

use avian2d::prelude::*;
use bevy::ecs::system::SystemParam;
use bevy::prelude::*;

use crate::motor::PhysicsWorld;

/// Spatial queries plus the rigid-body components a motor writes.
#[derive(SystemParam)]
pub(crate) struct MotorPhysics<'w, 's> {
    spatial_query: SpatialQuery<'w, 's>,
    collider_of: Query<'w, 's, &'static ColliderOf>,
    bodies: Query<
        'w,
        's,
        (
            &'static mut LinearVelocity,
            &'static ComputedMass,
            &'static mut LockedAxes,
        ),
    >,
}

impl PhysicsWorld for MotorPhysics<'_, '_> {
    type Body = Entity;

    fn overlap_circle_all(&self, point: Vec2, radius: f32, layers: LayerMask) -> Vec<Entity> {
        let shape = Collider::circle(radius);
        let filter = SpatialQueryFilter::from_mask(layers);

        self.spatial_query
            .shape_intersections(&shape, point, 0.0, &filter)
            .into_iter()
            // Report the owning body, which may differ from the collider entity
            .map(|collider| {
                self.collider_of
                    .get(collider)
                    .map_or(collider, |of| of.body)
            })
            .collect()
    }

    fn velocity(&self, body: Entity) -> Vec2 {
        match self.bodies.get(body) {
            Ok((velocity, _, _)) => velocity.0,
            Err(e) => {
                error!("Motor body {:?} has no rigid body: {}", body, e);
                Vec2::ZERO
            }
        }
    }

    fn set_velocity(&mut self, body: Entity, velocity: Vec2) {
        match self.bodies.get_mut(body) {
            Ok((mut linear, _, _)) => linear.0 = velocity,
            Err(e) => error!("Motor body {:?} has no rigid body: {}", body, e),
        }
    }

    fn apply_impulse(&mut self, body: Entity, impulse: Vec2) {
        match self.bodies.get_mut(body) {
            Ok((mut linear, mass, _)) => linear.0 += impulse * mass.inverse(),
            Err(e) => error!("Motor body {:?} has no rigid body: {}", body, e),
        }
    }

    fn lock_rotation(&mut self, body: Entity) {
        match self.bodies.get_mut(body) {
            Ok((_, _, mut locked)) => *locked = locked.lock_rotation(),
            Err(e) => error!("Motor body {:?} has no rigid body: {}", body, e),
        }
    }
}
