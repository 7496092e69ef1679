//! Motion for the page chrome around the orb: the staggered hero fade-in and
//! the pointer tilt on project cards.

use glam::Vec2;

use crate::constants::{
    FADE_IN_DELAY_SECS, FADE_IN_OFFSET_PX, FADE_IN_SECS, FADE_IN_STAGGER_SECS, TILT_MAX_DEG,
    TILT_MAX_GLARE, TILT_PERSPECTIVE_PX, TILT_SPEED_MS,
};
use crate::tween::{Ease, ScaleTween};

/// Opacity and downward offset of one element at a point in the fade.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FadeFrame {
    pub opacity: f32,
    pub offset_px: f32,
}

/// A group of elements fading in one after another.
#[derive(Clone, Debug)]
pub struct StaggeredFade {
    items: Vec<ScaleTween>,
    starts: Vec<f32>,
    offset_px: f32,
    elapsed: f32,
}

impl StaggeredFade {
    pub fn new(count: usize, delay: f32, stagger: f32, duration: f32, offset_px: f32) -> Self {
        Self {
            items: (0..count)
                .map(|_| ScaleTween::new(0.0, 1.0, duration, Ease::CubicOut))
                .collect(),
            starts: (0..count).map(|i| delay + stagger * i as f32).collect(),
            offset_px,
            elapsed: 0.0,
        }
    }

    /// Hero timing: 0.5 s delay, 0.2 s apart, 1 s each, rising 30 px.
    pub fn hero(count: usize) -> Self {
        Self::new(
            count,
            FADE_IN_DELAY_SECS,
            FADE_IN_STAGGER_SECS,
            FADE_IN_SECS,
            FADE_IN_OFFSET_PX,
        )
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn advance(&mut self, dt: f32) {
        self.elapsed += dt.max(0.0);
        for (tween, start) in self.items.iter_mut().zip(&self.starts) {
            tween.elapsed = (self.elapsed - start).clamp(0.0, tween.total_duration());
        }
    }

    pub fn frames(&self) -> impl Iterator<Item = FadeFrame> + '_ {
        self.items.iter().map(|tween| {
            let opacity = tween.value();
            FadeFrame {
                opacity,
                offset_px: self.offset_px * (1.0 - opacity),
            }
        })
    }

    pub fn is_finished(&self) -> bool {
        self.items.iter().all(ScaleTween::is_finished)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TiltConfig {
    pub max_deg: f32,
    pub perspective_px: f32,
    /// Transition length when the pose changes.
    pub speed_ms: u32,
    pub max_glare: f32,
}

impl Default for TiltConfig {
    fn default() -> Self {
        Self {
            max_deg: TILT_MAX_DEG,
            perspective_px: TILT_PERSPECTIVE_PX,
            speed_ms: TILT_SPEED_MS,
            max_glare: TILT_MAX_GLARE,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TiltPose {
    pub rotate_x_deg: f32,
    pub rotate_y_deg: f32,
    pub glare_opacity: f32,
    /// Gradient direction for the glare, degrees clockwise from up.
    pub glare_angle_deg: f32,
}

impl TiltPose {
    pub const REST: TiltPose = TiltPose {
        rotate_x_deg: 0.0,
        rotate_y_deg: 0.0,
        glare_opacity: 0.0,
        glare_angle_deg: 0.0,
    };

    pub fn css_transform(&self, perspective_px: f32) -> String {
        format!(
            "perspective({perspective_px}px) rotateX({:.2}deg) rotateY({:.2}deg) scale3d(1, 1, 1)",
            self.rotate_x_deg, self.rotate_y_deg
        )
    }
}

/// Pose for a pointer at `pointer` over a card whose box starts at `origin`
/// with `size`, all in client pixels. The edge nearest the pointer tips
/// away from the viewer. `None` for an empty box.
pub fn card_tilt(
    config: &TiltConfig,
    pointer: Vec2,
    origin: Vec2,
    size: Vec2,
) -> Option<TiltPose> {
    if size.x <= 0.0 || size.y <= 0.0 {
        return None;
    }
    let frac = ((pointer - origin) / size).clamp(Vec2::ZERO, Vec2::ONE);
    let max = config.max_deg;
    let from_centre = pointer - (origin + size * 0.5);
    Some(TiltPose {
        rotate_x_deg: (frac.y * 2.0 - 1.0) * max,
        rotate_y_deg: (1.0 - frac.x * 2.0) * max,
        glare_opacity: frac.y * config.max_glare,
        glare_angle_deg: from_centre.x.atan2(-from_centre.y).to_degrees(),
    })
}
