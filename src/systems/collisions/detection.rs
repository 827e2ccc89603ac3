use nalgebra::Vector3;

use crate::components::Collidable;
use crate::resources::PickupConfig;

/// Hit found by [`detect_collision`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionHit {
    /// Index into the obstacle list
    pub index: usize,
    /// Overlap between the drone sphere and the shrunken obstacle sphere
    pub penetration_depth: f64,
}

/// True when the drone sphere overlaps `obstacle` shrunk by `margin`.
#[inline]
pub fn overlaps(position: &Vector3<f64>, radius: f64, obstacle: &Collidable, margin: f64) -> bool {
    (position - obstacle.position).norm() < radius + obstacle.radius * margin
}

/// Linear scan for the first obstacle the drone overlaps.
pub fn detect_collision(
    position: &Vector3<f64>,
    radius: f64,
    obstacles: &[Collidable],
    margin: f64,
) -> Option<CollisionHit> {
    obstacles.iter().enumerate().find_map(|(index, obstacle)| {
        let reach = radius + obstacle.radius * margin;
        let distance = (position - obstacle.position).norm();
        (distance < reach).then(|| CollisionHit {
            index,
            penetration_depth: reach - distance,
        })
    })
}

/// Collision test with the default obstacle margin.
pub fn is_colliding(position: &Vector3<f64>, radius: f64, obstacles: &[Collidable]) -> bool {
    is_colliding_with(&PickupConfig::default(), position, radius, obstacles)
}

pub fn is_colliding_with(
    config: &PickupConfig,
    position: &Vector3<f64>,
    radius: f64,
    obstacles: &[Collidable],
) -> bool {
    obstacles
        .iter()
        .any(|obstacle| overlaps(position, radius, obstacle, config.collision_margin))
}
