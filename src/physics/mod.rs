//! Bubble physics - position-based (Verlet) falling-body simulation
//!
//! Bodies are axis-aligned rectangles. They fall under gravity, push each
//! other apart, clamp against the container walls and settle on a virtual
//! floor line where they freeze permanently.
//!
//! All tunables live here; the engine module only orchestrates.

pub mod vec2;
pub mod body;
pub mod integrator;
pub mod collision;
pub mod bounds;

pub use body::{Body, BodyState};
pub use vec2::Vec2;

/// Downward acceleration, px/s^2.
pub const GRAVITY: f32 = 1800.0;

/// Fraction of horizontal velocity carried through one integration sub-step.
/// Near zero so bubbles fall in a visually straight column.
pub const HORIZONTAL_CARRY: f32 = 0.02;

/// Velocity retained after reflecting off the container top.
pub const DAMPING: f32 = 0.35;

/// Minimum enforced gap between two bodies' bounding boxes, px.
pub const MIN_SPACING: f32 = 4.0;

/// Distance from the floor line at which a body stops accelerating and,
/// on the next bounds pass, snaps down and rests. Px.
pub const REST_DISTANCE: f32 = 2.0;

/// The floor line sits this far above the container bottom, px.
pub const FLOOR_OFFSET: f32 = 180.0;

/// Overlaps thinner than this are ignored by the resolver. Without the
/// slop, a body grazing the corner of a resting body reaches a push/
/// gravity equilibrium whose corrections round away below f32 precision
/// and it hovers forever instead of falling past.
pub const COLLISION_SLOP: f32 = 0.5;

/// Minimum horizontal box overlap for a resting body to count as support
/// a falling body can settle on. Thinner contact slides off instead.
pub const MIN_SUPPORT: f32 = 8.0;

/// Relaxation sweeps per resolver pass.
pub const RELAX_ITERATIONS: usize = 5;

/// Fraction of the vertical overlap corrected per pair visit.
pub const VERTICAL_RELAX: f32 = 0.4;

/// Fraction of the smaller overlap applied as horizontal drift per pair
/// visit. Deliberately marginal; vertical separation dominates.
pub const HORIZONTAL_RELAX: f32 = 0.05;

/// Cosmetic spin while falling, rad/s (magnitude bound).
pub const SPIN_RANGE: f32 = 0.25;

/// Rotation never drifts past this angle, rad.
pub const MAX_ROTATION: f32 = 0.7;
