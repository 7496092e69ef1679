//! Time-based scale animations for the core.

/// Easing curves, all mapping [0, 1] to a curve starting at 0 and ending at 1.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Ease {
    Linear,
    QuadOut,
    CubicOut,
    /// Overshoots past 1 before settling.
    BackOut,
}

const BACK_OVERSHOOT: f32 = 1.70158;

impl Ease {
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::Linear => t,
            Ease::QuadOut => 1.0 - (1.0 - t) * (1.0 - t),
            Ease::CubicOut => 1.0 - (1.0 - t).powi(3),
            Ease::BackOut => {
                let c1 = BACK_OVERSHOOT;
                let c3 = c1 + 1.0;
                let u = t - 1.0;
                1.0 + c3 * u * u * u + c1 * u * u
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScaleTween {
    pub from: f32,
    pub to: f32,
    /// Seconds for one leg.
    pub duration: f32,
    pub elapsed: f32,
    pub ease: Ease,
    /// Play back to `from` after reaching `to`.
    pub yoyo: bool,
}

impl ScaleTween {
    pub fn new(from: f32, to: f32, duration: f32, ease: Ease) -> Self {
        Self {
            from,
            to,
            duration: duration.max(0.0),
            elapsed: 0.0,
            ease,
            yoyo: false,
        }
    }

    pub fn yoyo(mut self) -> Self {
        self.yoyo = true;
        self
    }

    pub fn total_duration(&self) -> f32 {
        if self.yoyo {
            self.duration * 2.0
        } else {
            self.duration
        }
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.total_duration()
    }

    pub fn value(&self) -> f32 {
        if self.duration <= 0.0 {
            return if self.yoyo { self.from } else { self.to };
        }
        let leg = self.elapsed / self.duration;
        // The return leg replays the forward curve backwards.
        let progress = if self.yoyo && leg > 1.0 {
            self.ease.apply(2.0 - leg)
        } else {
            self.ease.apply(leg)
        };
        self.from + (self.to - self.from) * progress
    }

    /// Advance by `dt` seconds and return the new value.
    pub fn advance(&mut self, dt: f32) -> f32 {
        self.elapsed = (self.elapsed + dt.max(0.0)).min(self.total_duration());
        self.value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eases_hit_endpoints() {
        for ease in [Ease::Linear, Ease::QuadOut, Ease::CubicOut, Ease::BackOut] {
            assert!(ease.apply(0.0).abs() < 1e-6, "{ease:?}");
            assert!((ease.apply(1.0) - 1.0).abs() < 1e-6, "{ease:?}");
        }
    }

    #[test]
    fn back_out_overshoots() {
        let peak = (1..100)
            .map(|i| Ease::BackOut.apply(i as f32 / 100.0))
            .fold(0.0_f32, f32::max);
        assert!(peak > 1.05);
    }

    #[test]
    fn forward_tween_lands_on_target() {
        let mut tw = ScaleTween::new(0.1, 1.0, 1.0, Ease::BackOut);
        for _ in 0..70 {
            tw.advance(1.0 / 60.0);
        }
        assert!(tw.is_finished());
        assert!((tw.value() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn yoyo_returns_to_start() {
        let mut tw = ScaleTween::new(1.0, 1.5, 0.2, Ease::QuadOut).yoyo();
        let mid = tw.advance(0.2);
        assert!((mid - 1.5).abs() < 1e-5);
        assert!(!tw.is_finished());
        let end = tw.advance(0.25);
        assert!(tw.is_finished());
        assert!((end - 1.0).abs() < 1e-6);
    }
}
