use super::scale::update_value;

/// Direction a node's scale is currently moving in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Motion {
    Retreating,
    #[default]
    Idle,
    Advancing,
}

impl Motion {
    pub fn sign(self) -> f64 {
        match self {
            Self::Retreating => -1.0,
            Self::Idle => 0.0,
            Self::Advancing => 1.0,
        }
    }

    /// Motion that leaves the committed scale `prev_scale` (0 or 1).
    fn leaving(prev_scale: f64) -> Self {
        if 1.0 - 2.0 * prev_scale > 0.0 {
            Self::Advancing
        } else {
            Self::Retreating
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct AnimState {
    pub scale: f64,
    pub dir: Motion,
    pub prev_scale: f64,
}

impl AnimState {
    pub fn is_idle(&self) -> bool {
        self.dir == Motion::Idle
    }

    /// Leaves Idle towards the other end of the unit range. Returns `false`
    /// (and changes nothing) while a sweep is already running.
    pub fn start_updating(&mut self) -> bool {
        if !self.is_idle() {
            return false;
        }
        self.dir = Motion::leaving(self.prev_scale);
        true
    }

    /// Advances the scale by one tick. Returns the newly committed scale once
    /// the sweep overshoots a full unit.
    pub fn update(&mut self, lines: usize, arcs: usize) -> Option<f64> {
        let dir = self.dir.sign();
        self.scale += update_value(self.scale, dir, lines, arcs);
        if (self.scale - self.prev_scale).abs() > 1.0 {
            self.scale = self.prev_scale + dir;
            self.dir = Motion::Idle;
            self.prev_scale = self.scale;
            return Some(self.prev_scale);
        }
        None
    }
}
