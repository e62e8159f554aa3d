//! Fixed, ordered table of named easing functions.
//!
//! Harness reports walk this table front to back, so the order here is the
//! order of every report block.

use crate::functions as f;

/// Signature shared by every easing curve: `(t, b, c, d) -> value`.
pub type EasingFn = fn(f32, f32, f32, f32) -> f32;

/// A named easing curve.
#[derive(Clone, Copy, Debug)]
pub struct Easing {
    pub name: &'static str,
    pub func: EasingFn,
}

impl Easing {
    const fn new(name: &'static str, func: EasingFn) -> Self {
        Self { name, func }
    }

    /// Evaluate the curve at time `t`.
    #[inline]
    pub fn eval(&self, t: f32, b: f32, c: f32, d: f32) -> f32 {
        (self.func)(t, b, c, d)
    }
}

/// Number of entries in [`EASINGS`].
pub const NUM_EASINGS: usize = 28;

pub static EASINGS: [Easing; NUM_EASINGS] = [
    Easing::new("EaseLinearNone", f::linear_none),
    Easing::new("EaseLinearIn", f::linear_in),
    Easing::new("EaseLinearOut", f::linear_out),
    Easing::new("EaseLinearInOut", f::linear_in_out),
    Easing::new("EaseSineIn", f::sine_in),
    Easing::new("EaseSineOut", f::sine_out),
    Easing::new("EaseSineInOut", f::sine_in_out),
    Easing::new("EaseCircIn", f::circ_in),
    Easing::new("EaseCircOut", f::circ_out),
    Easing::new("EaseCircInOut", f::circ_in_out),
    Easing::new("EaseCubicIn", f::cubic_in),
    Easing::new("EaseCubicOut", f::cubic_out),
    Easing::new("EaseCubicInOut", f::cubic_in_out),
    Easing::new("EaseQuadIn", f::quad_in),
    Easing::new("EaseQuadOut", f::quad_out),
    Easing::new("EaseQuadInOut", f::quad_in_out),
    Easing::new("EaseExpoIn", f::expo_in),
    Easing::new("EaseExpoOut", f::expo_out),
    Easing::new("EaseExpoInOut", f::expo_in_out),
    Easing::new("EaseBackIn", f::back_in),
    Easing::new("EaseBackOut", f::back_out),
    Easing::new("EaseBackInOut", f::back_in_out),
    Easing::new("EaseBounceOut", f::bounce_out),
    Easing::new("EaseBounceIn", f::bounce_in),
    Easing::new("EaseBounceInOut", f::bounce_in_out),
    Easing::new("EaseElasticIn", f::elastic_in),
    Easing::new("EaseElasticOut", f::elastic_out),
    Easing::new("EaseElasticInOut", f::elastic_in_out),
];

/// Look up an easing by its table name (e.g. `"EaseSineIn"`).
pub fn find(name: &str) -> Option<&'static Easing> {
    EASINGS.iter().find(|e| e.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_unique() {
        for (i, a) in EASINGS.iter().enumerate() {
            for b in &EASINGS[i + 1..] {
                assert_ne!(a.name, b.name);
            }
        }
    }

    #[test]
    fn find_by_name() {
        let e = find("EaseQuadIn").expect("quad in registered");
        assert_eq!(e.eval(1.0, 0.0, 4.0, 2.0), 1.0);
        assert!(find("EaseQuartIn").is_none());
    }
}
