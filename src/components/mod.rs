pub mod collision;
pub mod drone;
pub mod session;

pub use collision::{
    CoinCollected, Collectible, Collidable, CollisionComponent, DroneCrashed, PowerUpCollected,
    PowerUpKind, PowerUpPickup,
};
pub use drone::{
    create_initial_state, ControlVector, DroneConfig, DroneState, PlayerDrone, PowerUpFlags,
    SteeringLock, TurnInputSource,
};
pub use session::{FrameReport, GameSession, PowerUpTimers, RestartRequested, WorldEntities};
