use super::vec2::Vec2;

/// Falling -> Resting, one way. A resting body carries the exact transform
/// it froze with; nothing un-rests it short of removal from the registry.
#[derive(Clone, Copy, Debug)]
pub enum BodyState {
    Falling,
    Resting { rest_pos: Vec2, rest_rotation: f32 },
}

/// One simulated bubble - an axis-aligned box moved by Verlet integration.
///
/// `pos` is the box center. Implicit velocity = `pos - prev_pos`.
pub struct Body {
    pub id: u32,
    pub pos: Vec2,
    pub prev_pos: Vec2,
    pub half_width: f32,
    pub half_height: f32,
    /// Cosmetic angle (radians); drifts while falling, frozen at rest.
    pub rotation: f32,
    /// Drift rate, rad/s. Assigned at spawn, never changes.
    pub spin: f32,
    state: BodyState,
    /// Engine-clock instant (ms) until which the body is held motionless.
    pause_until: Option<f64>,
}

impl Body {
    pub fn new(id: u32, pos: Vec2, half_width: f32, half_height: f32, spin: f32) -> Self {
        Self {
            id,
            pos,
            prev_pos: pos,
            half_width,
            half_height,
            rotation: 0.0,
            spin,
            state: BodyState::Falling,
            pause_until: None,
        }
    }

    /// A body held at its spawn point until `until_ms` on the engine clock.
    /// Used for just-submitted entries so the UI can present them distinctly.
    pub fn paused(id: u32, pos: Vec2, half_width: f32, half_height: f32, until_ms: f64) -> Self {
        let mut body = Self::new(id, pos, half_width, half_height, 0.0);
        body.pause_until = Some(until_ms);
        body
    }

    pub fn is_resting(&self) -> bool {
        matches!(self.state, BodyState::Resting { .. })
    }

    pub fn rest_transform(&self) -> Option<(Vec2, f32)> {
        match self.state {
            BodyState::Resting { rest_pos, rest_rotation } => Some((rest_pos, rest_rotation)),
            BodyState::Falling => None,
        }
    }

    /// Latch the terminal state with the transform held right now.
    /// No-op if already resting.
    pub fn rest(&mut self) {
        if !self.is_resting() {
            self.prev_pos = self.pos;
            self.state = BodyState::Resting {
                rest_pos: self.pos,
                rest_rotation: self.rotation,
            };
        }
    }

    pub fn is_paused_at(&self, clock_ms: f64) -> bool {
        match self.pause_until {
            Some(until) => clock_ms < until,
            None => false,
        }
    }

    /// Expire the pause once the clock has caught up. Returns true while
    /// the body is still held.
    pub fn tick_pause(&mut self, clock_ms: f64) -> bool {
        if let Some(until) = self.pause_until {
            if clock_ms < until {
                return true;
            }
            self.pause_until = None;
        }
        false
    }

    /// Size follows the label; position never resets on a size change.
    pub fn set_size(&mut self, width: f32, height: f32) {
        self.half_width = width * 0.5;
        self.half_height = height * 0.5;
    }

    pub fn width(&self) -> f32 {
        self.half_width * 2.0
    }

    pub fn height(&self) -> f32 {
        self.half_height * 2.0
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.half_height
    }

    pub fn top(&self) -> f32 {
        self.pos.y - self.half_height
    }

    pub fn velocity(&self) -> Vec2 {
        self.pos - self.prev_pos
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        (x - self.pos.x).abs() <= self.half_width && (y - self.pos.y).abs() <= self.half_height
    }
}
