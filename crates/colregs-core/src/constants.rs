//! Evaluation constants and navigational tuning parameters.

/// Numeric floor for distances, speeds and relative-velocity norms.
pub const EPSILON: f64 = 1e-10;

/// Metres per nautical mile.
pub const NM_IN_METERS: f64 = 1852.0;

// --- Decision vector ---

/// Fields per actor in a flat decision vector: x, y, heading, length, speed.
pub const FIELDS_PER_ACTOR: usize = 5;

/// Offset of each field inside one actor block.
pub const FIELD_X: usize = 0;
pub const FIELD_Y: usize = 1;
pub const FIELD_HEADING: usize = 2;
pub const FIELD_LENGTH: usize = 3;
pub const FIELD_SPEED: usize = 4;

// --- Sectors ---

/// Half angle of the head-on sector (radians, ~5°).
pub const HEAD_ON_HALF_ANGLE: f64 = 5.0 * std::f64::consts::PI / 180.0;

/// Limit of the masthead/sidelight arc measured from the bow (112.5°).
/// Bearings beyond it fall into the sternlight sector.
pub const BEAM_SECTOR_LIMIT: f64 = 112.5 * std::f64::consts::PI / 180.0;

// --- Penalty scaling ---

/// Distance that maps to one unit of visibility/collision penalty (metres).
pub const DISTANCE_SCALE: f64 = NM_IN_METERS;

/// Speed that maps to one unit of dimension penalty (m/s, ~1 knot).
pub const SPEED_SCALE: f64 = 0.514_444;

// --- Scenario extents ---

/// Default half-width of the x/y sampling box around own ship (metres, 6 NM).
pub const MAX_DISTANCE: f64 = 6.0 * NM_IN_METERS;

/// Default vessel speed envelope (m/s).
pub const DEFAULT_MIN_SPEED: f64 = 1.0;
pub const DEFAULT_MAX_SPEED: f64 = 15.0;

/// Default vessel length envelope (metres).
pub const DEFAULT_MIN_LENGTH: f64 = 10.0;
pub const DEFAULT_MAX_LENGTH: f64 = 200.0;

// --- Light visibility (COLREGS Annex I, nautical miles) ---

/// Length class boundaries (metres).
pub const LENGTH_CLASS_SMALL: f64 = 12.0;
pub const LENGTH_CLASS_MEDIUM: f64 = 20.0;
pub const LENGTH_CLASS_LARGE: f64 = 50.0;

/// Masthead light range per length class (nm).
pub const MASTHEAD_RANGE_NM: [f64; 4] = [2.0, 3.0, 5.0, 6.0];

/// Sternlight range per length class (nm).
pub const STERNLIGHT_RANGE_NM: [f64; 4] = [2.0, 2.0, 2.0, 3.0];
