pub const GRAVITY: f64 = 9.8; // m/s^2

pub const MAX_FRAME_DELTA: f64 = 0.1; // Largest frame delta the host should pass to `step` (s)
pub const DEFAULT_TIMESTEP: f64 = 1.0 / 60.0;

// Rotation
pub const ROTATION_RATE: f64 = 1.5; // rad/s at full stick
pub const PITCH_RATE_MULTIPLIER: f64 = 1.0;
pub const ROLL_RATE_MULTIPLIER: f64 = 1.2;
pub const YAW_RATE_MULTIPLIER: f64 = 1.0;
pub const SHARP_YAW_RATE_MULTIPLIER: f64 = 1.6;
pub const SHARP_TURN_THRESHOLD: f64 = 2.0; // |yaw| above this is a key-lock turn request
pub const LOCKED_YAW_GENTLE: f64 = 1.2;
pub const LOCKED_YAW_SHARP: f64 = 2.5;
pub const STABILIZATION_DEADZONE: f64 = 0.1;

// Thrust and drag
pub const FORWARD_THRUST: f64 = 18.0; // N at full throttle
pub const PITCH_THRUST_COUPLING: f64 = 0.6;
pub const CLIMB_THRUST: f64 = 6.0; // m/s^2 at full nose-up
pub const ROLL_LATERAL_FORCE: f64 = 8.0; // N at 90 degrees of bank
pub const ROLL_SPEED_SCALING: f64 = 0.05; // extra bank force per m/s of ground speed
pub const LOCKED_ROLL_BOOST: f64 = 1.5;
pub const QUADRATIC_DRAG: f64 = 0.01;
pub const MIN_MASS: f64 = 1e-3; // kg

// Speed limiting
pub const SPEED_BOOST_MULTIPLIER: f64 = 2.2;
pub const SOFT_SPEED_LIMIT_FRACTION: f64 = 0.8;
pub const SOFT_SPEED_DAMPING: f64 = 0.25; // 1/s at the cap
pub const OVERSPEED_CORRECTION: f64 = 0.5; // Share of the excess removed per step

// Flight envelope
pub const MIN_ALTITUDE: f64 = 0.5; // m
pub const MAX_ALTITUDE: f64 = 60.0; // m
pub const CEILING_BAND: f64 = 8.0; // m below the ceiling where resistance starts
pub const CEILING_PUSH: f64 = 25.0; // m/s^2 at the ceiling
pub const WORLD_BOUNDARY: f64 = 250.0; // m from the origin on x and z
pub const BOUNDARY_BAND: f64 = 20.0; // m inside the boundary where push-back starts
pub const BOUNDARY_PUSH: f64 = 30.0; // m/s^2 at the boundary
pub const BOUNDARY_RESTITUTION: f64 = -0.3;
pub const BOUNCE_COEFFICIENT: f64 = 0.3;
pub const BOUNCE_THRESHOLD: f64 = 1.0; // m/s impact speed below which there is no bounce
/// Horizontal velocity kept per reference frame of ground contact
pub const GROUND_FRICTION: f64 = 0.9;
/// Frame rate the per-frame ground friction is quoted at [Hz]
pub const FRICTION_REFERENCE_RATE: f64 = 60.0;

// Pickups and collisions
pub const COLLISION_MARGIN: f64 = 0.8;
pub const COLLECTION_RADIUS_SCALE: f64 = 1.5;
pub const PICKUP_GENEROSITY: f64 = 1.2;
pub const MAGNET_RADIUS_MULTIPLIER: f64 = 6.0;
pub const MAGNET_PULL_STRENGTH: f64 = 0.1;
pub const COIN_VALUE: u64 = 10;

// Power-up durations (s)
pub const SPEED_BOOST_DURATION: f64 = 5.0;
pub const SHIELD_DURATION: f64 = 8.0;
pub const MAGNET_DURATION: f64 = 10.0;
pub const TIME_FREEZE_DURATION: f64 = 4.0;

// Drone defaults
pub const DRONE_RADIUS: f64 = 0.8; // m
pub const START_ALTITUDE: f64 = 2.5; // m
pub const DRONE_MASS: f64 = 1.0; // kg
pub const DRONE_DRAG: f64 = 0.3;
pub const DRONE_MAX_SPEED: f64 = 25.0; // m/s
pub const DRONE_MAX_ACCELERATION: f64 = 30.0; // m/s^2
pub const DRONE_INERTIA: f64 = 0.85;
pub const DRONE_STABILIZATION: f64 = 0.05;
