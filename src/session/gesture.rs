//! Turns a finished pan gesture into a discrete session intent. Animation is
//! left to the presentation layer.

use serde::{Deserialize, Serialize};

/// Horizontal travel needed to commit, as a fraction of the card width.
pub const SWIPE_FRACTION: f64 = 0.3;
/// Upward travel in points needed to commit a "consider".
pub const SWIPE_UP_THRESHOLD: f64 = 50.0;
/// Release velocity in points per millisecond that commits regardless of travel.
pub const FLICK_VELOCITY: f64 = 1.2;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intent {
    Skip,
    Save,
    Consider,
}

/// Pan state at release.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct PanRelease {
    pub dx: f64,
    pub dy: f64,
    #[serde(default)]
    pub vx: f64,
    #[serde(default)]
    pub vy: f64,
    pub card_width: f64,
}

pub fn classify(release: &PanRelease) -> Option<Intent> {
    if release.dy.abs() > release.dx.abs() {
        let swiped_up = release.dy < -SWIPE_UP_THRESHOLD
            || (release.dy < 0.0 && release.vy < -FLICK_VELOCITY);
        return swiped_up.then_some(Intent::Consider);
    }

    // Without a usable width only a flick commits horizontally.
    let threshold = if release.card_width > 0.0 {
        release.card_width * SWIPE_FRACTION
    } else {
        f64::INFINITY
    };
    if release.dx > threshold || (release.dx > 0.0 && release.vx > FLICK_VELOCITY) {
        Some(Intent::Save)
    } else if release.dx < -threshold || (release.dx < 0.0 && release.vx < -FLICK_VELOCITY) {
        Some(Intent::Skip)
    } else {
        None
    }
}
