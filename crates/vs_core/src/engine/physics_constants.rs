//! Physics and tuning constants for the decision core
//!
//! Every distance/speed/timing threshold used by the classifier, the
//! executor and the maneuver controllers lives here as a named constant so
//! the priority cascade stays auditable. Distances are unreal units (uu),
//! speeds uu/s, times seconds.

// ============================================================
// Field geometry
// ============================================================
pub mod field {
    /// Distance from midfield to each back wall / goal line (uu)
    pub const BACK_WALL_Y: f32 = 5120.0;
    /// Distance from midfield to each side wall (uu)
    pub const SIDE_WALL_X: f32 = 4096.0;
    /// Ceiling height (uu)
    pub const CEILING_Z: f32 = 2044.0;
    /// Lateral offset of the rotation back post from goal center (uu)
    pub const BACK_POST_X: f32 = 800.0;
}

/// Ball physics used by the test/scenario trajectory propagator
pub mod ball {
    /// Gravity acceleration (uu/s^2)
    pub const GRAVITY: f32 = 650.0;
    /// Ball radius (uu)
    pub const RADIUS: f32 = 92.75;
    /// Floor bounce restitution
    pub const RESTITUTION: f32 = 0.6;
    /// Horizontal speed kept through a floor bounce
    pub const BOUNCE_FRICTION: f32 = 0.97;
}

/// Tick cadence of the host simulator
pub mod tick {
    /// Target control cadence (Hz)
    pub const RATE_HZ: f32 = 120.0;
    /// Elapsed time assumed on the very first tick (s)
    pub const DEFAULT_DT: f32 = 1.0 / 120.0;
    /// Cap on a single tick's elapsed time; guards against host stalls (s)
    pub const MAX_DT: f32 = 0.25;
}

// ============================================================
// Intercept solver
// ============================================================
pub mod intercept {
    /// Speed assumed for a near-stationary car; floors the travel-time
    /// division and models that a stopped car still accelerates (uu/s)
    pub const MIN_SPEED_FLOOR: f32 = 400.0;
    /// Extra arrival time allowed past a sample's timeline offset (s)
    pub const ARRIVAL_SLACK: f32 = 0.2;
    /// Ground-intercept height band floor (uu)
    pub const GROUND_BAND_MIN: f32 = 0.0;
    /// Ground-intercept height band ceiling (uu)
    pub const GROUND_BAND_MAX: f32 = 300.0;
    /// How far into the track the ground scan looks (s)
    pub const DEFAULT_HORIZON: f32 = 3.0;
    /// A sample below this height with little vertical speed counts as a
    /// ground touch (uu)
    pub const GROUND_TOUCH_HEIGHT: f32 = 150.0;
    /// Vertical-speed ceiling for a ground touch (uu/s)
    pub const GROUND_TOUCH_VZ: f32 = 100.0;
    /// Minimum goalward ball speed for a shot opportunity (uu/s)
    pub const SHOT_MIN_SPEED: f32 = 400.0;
    /// Height ceiling for a shot-opportunity sample (uu)
    pub const SHOT_MAX_HEIGHT: f32 = 300.0;
    /// Below this measured speed the reach estimate assumes acceleration
    /// from a stop (uu/s)
    pub const STALL_SPEED: f32 = 100.0;
    /// Hard cap on car speed for reach estimates (uu/s)
    pub const MAX_CAR_SPEED: f32 = 2300.0;
}

// ============================================================
// Aerial planning and state machine
// ============================================================
pub mod aerial {
    /// Earliest usable lead time on a sample (s)
    pub const MIN_LEAD: f32 = 0.5;
    /// Latest usable lead time on a sample (s)
    pub const MAX_LEAD: f32 = 3.0;
    /// Aerial targets must be above this height (uu)
    pub const MIN_BALL_HEIGHT: f32 = 300.0;
    /// Aerial targets must be below this height (uu)
    pub const MAX_BALL_HEIGHT: f32 = 1000.0;
    /// Lateral ball-speed ceiling for a stable aerial target (uu/s)
    pub const MAX_LATERAL_BALL_SPEED: f32 = 1800.0;
    /// Assumed average flight speed for arrival estimates (uu/s)
    pub const AVERAGE_FLIGHT_SPEED: f32 = 1300.0;
    /// Vertical climb bought by one unit of boost (uu)
    pub const CLIMB_PER_BOOST: f32 = 33.0;
    /// Boost kept in reserve on top of the climb estimate
    pub const BOOST_MARGIN: f32 = 10.0;
    /// Allowed mismatch between reach estimate and sample lead time (s)
    pub const ARRIVAL_TOLERANCE: f32 = 0.35;
    /// A target this close to our goal is defensively relevant (uu)
    pub const DEFENSIVE_RADIUS: f32 = 2000.0;
    /// Drive-up radius around the ground point under the target (uu)
    pub const TAKEOFF_RADIUS: f32 = 120.0;
    /// First jump is held this long (s)
    pub const JUMP_HOLD: f32 = 0.12;
    /// Second-jump window opens this long after the first jump (s)
    pub const SECOND_JUMP_OPEN: f32 = 0.18;
    /// Second-jump window closes; past it the controller is in flight (s)
    pub const SECOND_JUMP_CLOSE: f32 = 0.32;
    /// Proportional gain on the in-flight pitch/yaw correction
    pub const FLIGHT_GAIN: f32 = 2.0;
    /// Boost is cut inside this range to avoid overshooting (uu)
    pub const BOOST_CUT_RANGE: f32 = 200.0;
    /// Contact dodge is issued inside this range (uu)
    pub const CONTACT_RANGE: f32 = 120.0;
    /// Below this height the car counts as landed (uu)
    pub const LANDED_HEIGHT: f32 = 50.0;
}

// ============================================================
// Strategic state classifier and tactical executor
// ============================================================
pub mod tactics {
    /// DefendGoal: ball within this range of our goal... (uu)
    pub const DEFEND_GOAL_BALL_RANGE: f32 = 1200.0;
    /// ...while the car is not already adjacent to the ball (uu)
    pub const DEFEND_GOAL_STANDOFF: f32 = 600.0;
    /// DefendClear: ball within this range of our goal (uu)
    pub const DEFEND_CLEAR_BALL_RANGE: f32 = 2500.0;
    /// DefendClear: car within this range of the ball (uu)
    pub const DEFEND_CLEAR_CAR_RANGE: f32 = 900.0;
    /// Shadow: ball within this range of our goal (uu)
    pub const SHADOW_BALL_RANGE: f32 = 3000.0;
    /// Shadow: car within this range of the ball (uu)
    pub const SHADOW_CAR_RANGE: f32 = 1800.0;
    /// Shadow: ball slower than this (uu/s)
    pub const SHADOW_BALL_SPEED: f32 = 700.0;
    /// Challenge: car within this range of the ball (uu)
    pub const CHALLENGE_RANGE: f32 = 900.0;
    /// Ball below this height counts as grounded for a challenge (uu)
    pub const GROUNDED_BALL_HEIGHT: f32 = 200.0;
    /// AttackAerial: ball above this height (uu)
    pub const AERIAL_MIN_HEIGHT: f32 = 350.0;
    /// AttackAerial: boost reserve required
    pub const AERIAL_MIN_BOOST: f32 = 20.0;
    /// AttackAerial: car within this range of the ball (uu)
    pub const AERIAL_CHASE_RANGE: f32 = 1800.0;
    /// AttackGround: ball within this range of the opponent goal (uu)
    pub const ATTACK_GOAL_RANGE: f32 = 2000.0;
    /// AttackGround: car within this range of the ball (uu)
    pub const ATTACK_CAR_RANGE: f32 = 900.0;
    /// Dribble: ball/car height difference below this (uu)
    pub const DRIBBLE_HEIGHT_DELTA: f32 = 120.0;
    /// Dribble: car within this range of the ball (uu)
    pub const DRIBBLE_RANGE: f32 = 350.0;
    /// Dribble: ball slower than this (uu/s)
    pub const DRIBBLE_BALL_SPEED: f32 = 600.0;
    /// WallPlay: ball beyond this |y| line (uu)
    pub const WALL_BALL_LINE: f32 = 4000.0;
    /// WallPlay: ball above this height (uu)
    pub const WALL_MIN_HEIGHT: f32 = 200.0;
    /// Rebound: ball above this height (uu)
    pub const REBOUND_MIN_HEIGHT: f32 = 300.0;
    /// Rebound: ball beyond this |y| line (uu)
    pub const REBOUND_LINE: f32 = 3000.0;
    /// GetBoost: reserve below this counts as low
    pub const LOW_BOOST: f32 = 20.0;
    /// GetBoost: ball farther than this (uu)
    pub const BOOST_HUNT_RANGE: f32 = 1200.0;

    /// Ball-to-goal alignment (dot product) required for a power-shot flip
    pub const SHOT_ALIGNMENT: f32 = 0.7;
    /// Power-shot flip range (uu)
    pub const FLIP_RANGE: f32 = 300.0;
    /// Defensive flip-to-save range (uu)
    pub const DEFENSIVE_FLIP_RANGE: f32 = 350.0;
    /// Goal-guard point offset along the goal-to-ball line (uu)
    pub const GOAL_GUARD_OFFSET: f32 = 300.0;
    /// Shadow point offset along the goal-to-ball line (uu)
    pub const SHADOW_OFFSET: f32 = 800.0;
    /// Shadow approach throttle (delay, do not commit)
    pub const SHADOW_THROTTLE: f32 = 0.5;
    /// Lateral offset of the clear target away from the car's side (uu)
    pub const CLEAR_LATERAL_OFFSET: f32 = 1000.0;
    /// Wall-jump branch needs the car above this height (uu)
    pub const WALL_JUMP_MIN_HEIGHT: f32 = 200.0;
    /// Proportional gain on the wall-jump nose correction
    pub const WALL_AIM_GAIN: f32 = 2.0;
}

// ============================================================
// Dribble sub-controller
// ============================================================
pub mod dribble {
    /// Carried ball sits at least this far above the car (uu)
    pub const CARRY_HEIGHT_MIN: f32 = 60.0;
    /// Carried ball sits at most this far above the car (uu)
    pub const CARRY_HEIGHT_MAX: f32 = 200.0;
    /// Minimum time between flicks (s)
    pub const FLICK_COOLDOWN: f32 = 2.0;
    /// An opponent this close to the ball triggers a flick (uu)
    pub const PRESSURE_RADIUS: f32 = 1000.0;
    /// Below this forward-to-goal angle the flick goes straight (rad)
    pub const FLICK_ALIGN_ANGLE: f32 = 0.2;
    /// Relative ball speed above this calls for easing off (uu/s)
    pub const MAX_RELATIVE_SPEED: f32 = 800.0;
    /// A carried ball drifting past this distance calls for boost (uu)
    pub const DRIFT_DISTANCE: f32 = 200.0;
    /// Lateral slide above this gets a steering correction (uu/s)
    pub const LATERAL_SLIDE_SPEED: f32 = 100.0;
    /// Steering correction divisor for lateral slide
    pub const STEER_CORRECTION_SCALE: f32 = 1000.0;
    /// Throttle while easing off
    pub const SLOW_THROTTLE: f32 = 0.3;
    /// Throttle while the carry is stable
    pub const CRUISE_THROTTLE: f32 = 0.6;
    /// Catch attempts start inside this range (uu)
    pub const CATCH_RANGE: f32 = 300.0;
    /// Minimum time between catch attempts (s)
    pub const CATCH_COOLDOWN: f32 = 0.5;
    /// Inside this range a descending ball gets the gentle catch (uu)
    pub const CATCH_GENTLE_RANGE: f32 = 200.0;
    /// Descent speed that selects the gentle catch (uu/s)
    pub const CATCH_GENTLE_DESCENT: f32 = 100.0;
}

// ============================================================
// Recovery / leveling
// ============================================================
pub mod recovery {
    /// Up-vector z below this counts as turtled
    pub const TURTLE_UP_Z: f32 = -0.5;
    /// Proportional gain on the roll-level correction
    pub const ROLL_GAIN: f32 = 4.0;
    /// Proportional gain on the pitch-align correction
    pub const PITCH_GAIN: f32 = 4.0;
    /// Below this speed the pitch target is simply level (uu/s)
    pub const MIN_ALIGN_SPEED: f32 = 300.0;
}

/// Ground steering
pub mod steering {
    /// Proportional gain from local target angle to steer output
    pub const STEER_GAIN: f32 = 5.0;
}
