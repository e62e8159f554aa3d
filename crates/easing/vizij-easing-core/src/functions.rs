//! Penner easing curves.
//!
//! Every function shares the signature `(t, b, c, d) -> value`:
//! - `t`: elapsed time
//! - `b`: start value
//! - `c`: total change in value
//! - `d`: duration
//!
//! For `t` in `[0, d]` the curves run from `b` to `b + c`. Outside that range
//! they extrapolate (Back and Elastic also overshoot inside it).

use std::f32::consts::PI;

/// Overshoot amount for the Back family (about 10%).
const BACK_OVERSHOOT: f32 = 1.70158;
/// Extra overshoot scale applied by `back_in_out`.
const BACK_IN_OUT_SCALE: f32 = 1.525;

// ---------- Linear ----------

#[inline]
pub fn linear_none(t: f32, b: f32, c: f32, d: f32) -> f32 {
    c * t / d + b
}

#[inline]
pub fn linear_in(t: f32, b: f32, c: f32, d: f32) -> f32 {
    c * t / d + b
}

#[inline]
pub fn linear_out(t: f32, b: f32, c: f32, d: f32) -> f32 {
    c * t / d + b
}

#[inline]
pub fn linear_in_out(t: f32, b: f32, c: f32, d: f32) -> f32 {
    c * t / d + b
}

// ---------- Sine ----------

#[inline]
pub fn sine_in(t: f32, b: f32, c: f32, d: f32) -> f32 {
    -c * (t / d * (PI / 2.0)).cos() + c + b
}

#[inline]
pub fn sine_out(t: f32, b: f32, c: f32, d: f32) -> f32 {
    c * (t / d * (PI / 2.0)).sin() + b
}

#[inline]
pub fn sine_in_out(t: f32, b: f32, c: f32, d: f32) -> f32 {
    -c / 2.0 * ((PI * t / d).cos() - 1.0) + b
}

// ---------- Circular ----------

#[inline]
pub fn circ_in(t: f32, b: f32, c: f32, d: f32) -> f32 {
    let t = t / d;
    -c * ((1.0 - t * t).sqrt() - 1.0) + b
}

#[inline]
pub fn circ_out(t: f32, b: f32, c: f32, d: f32) -> f32 {
    let t = t / d - 1.0;
    c * (1.0 - t * t).sqrt() + b
}

#[inline]
pub fn circ_in_out(t: f32, b: f32, c: f32, d: f32) -> f32 {
    let mut t = t / (d / 2.0);
    if t < 1.0 {
        return -c / 2.0 * ((1.0 - t * t).sqrt() - 1.0) + b;
    }
    t -= 2.0;
    c / 2.0 * ((1.0 - t * t).sqrt() + 1.0) + b
}

// ---------- Cubic ----------

#[inline]
pub fn cubic_in(t: f32, b: f32, c: f32, d: f32) -> f32 {
    let t = t / d;
    c * t * t * t + b
}

#[inline]
pub fn cubic_out(t: f32, b: f32, c: f32, d: f32) -> f32 {
    let t = t / d - 1.0;
    c * (t * t * t + 1.0) + b
}

#[inline]
pub fn cubic_in_out(t: f32, b: f32, c: f32, d: f32) -> f32 {
    let mut t = t / (d / 2.0);
    if t < 1.0 {
        return c / 2.0 * t * t * t + b;
    }
    t -= 2.0;
    c / 2.0 * (t * t * t + 2.0) + b
}

// ---------- Quadratic ----------

#[inline]
pub fn quad_in(t: f32, b: f32, c: f32, d: f32) -> f32 {
    let t = t / d;
    c * t * t + b
}

#[inline]
pub fn quad_out(t: f32, b: f32, c: f32, d: f32) -> f32 {
    let t = t / d;
    -c * t * (t - 2.0) + b
}

#[inline]
pub fn quad_in_out(t: f32, b: f32, c: f32, d: f32) -> f32 {
    let t = t / (d / 2.0);
    if t < 1.0 {
        return c / 2.0 * (t * t) + b;
    }
    -c / 2.0 * ((t - 1.0) * (t - 3.0) - 1.0) + b
}

// ---------- Exponential ----------

/// Exact `b` at `t == 0`; the raw curve would give `b + c / 1024`.
#[inline]
pub fn expo_in(t: f32, b: f32, c: f32, d: f32) -> f32 {
    if t == 0.0 {
        return b;
    }
    c * 2f32.powf(10.0 * (t / d - 1.0)) + b
}

/// Exact `b + c` at `t == d`.
#[inline]
pub fn expo_out(t: f32, b: f32, c: f32, d: f32) -> f32 {
    if t == d {
        return b + c;
    }
    c * (-(2f32.powf(-10.0 * t / d)) + 1.0) + b
}

#[inline]
pub fn expo_in_out(t: f32, b: f32, c: f32, d: f32) -> f32 {
    if t == 0.0 {
        return b;
    }
    if t == d {
        return b + c;
    }
    let t = t / (d / 2.0);
    if t < 1.0 {
        return c / 2.0 * 2f32.powf(10.0 * (t - 1.0)) + b;
    }
    c / 2.0 * (-(2f32.powf(-10.0 * (t - 1.0))) + 2.0) + b
}

// ---------- Back ----------

#[inline]
pub fn back_in(t: f32, b: f32, c: f32, d: f32) -> f32 {
    let s = BACK_OVERSHOOT;
    let t = t / d;
    c * t * t * ((s + 1.0) * t - s) + b
}

#[inline]
pub fn back_out(t: f32, b: f32, c: f32, d: f32) -> f32 {
    let s = BACK_OVERSHOOT;
    let t = t / d - 1.0;
    c * (t * t * ((s + 1.0) * t + s) + 1.0) + b
}

#[inline]
pub fn back_in_out(t: f32, b: f32, c: f32, d: f32) -> f32 {
    let s = BACK_OVERSHOOT * BACK_IN_OUT_SCALE;
    let mut t = t / (d / 2.0);
    if t < 1.0 {
        return c / 2.0 * (t * t * ((s + 1.0) * t - s)) + b;
    }
    t -= 2.0;
    c / 2.0 * (t * t * ((s + 1.0) * t + s) + 2.0) + b
}

// ---------- Bounce ----------

#[inline]
pub fn bounce_out(t: f32, b: f32, c: f32, d: f32) -> f32 {
    let t = t / d;
    if t < 1.0 / 2.75 {
        c * (7.5625 * t * t) + b
    } else if t < 2.0 / 2.75 {
        let t = t - 1.5 / 2.75;
        c * (7.5625 * t * t + 0.75) + b
    } else if t < 2.5 / 2.75 {
        let t = t - 2.25 / 2.75;
        c * (7.5625 * t * t + 0.9375) + b
    } else {
        let t = t - 2.625 / 2.75;
        c * (7.5625 * t * t + 0.984375) + b
    }
}

/// Mirror of [`bounce_out`] around the midpoint of the duration.
#[inline]
pub fn bounce_in(t: f32, b: f32, c: f32, d: f32) -> f32 {
    c - bounce_out(d - t, 0.0, c, d) + b
}

#[inline]
pub fn bounce_in_out(t: f32, b: f32, c: f32, d: f32) -> f32 {
    if t < d / 2.0 {
        bounce_in(t * 2.0, 0.0, c, d) * 0.5 + b
    } else {
        bounce_out(t * 2.0 - d, 0.0, c, d) * 0.5 + c * 0.5 + b
    }
}

// ---------- Elastic ----------

#[inline]
pub fn elastic_in(t: f32, b: f32, c: f32, d: f32) -> f32 {
    if t == 0.0 {
        return b;
    }
    let t = t / d;
    if t == 1.0 {
        return b + c;
    }
    let p = d * 0.3;
    let s = p / 4.0;
    let t = t - 1.0;
    let amp = c * 2f32.powf(10.0 * t);
    -(amp * ((t * d - s) * (2.0 * PI) / p).sin()) + b
}

#[inline]
pub fn elastic_out(t: f32, b: f32, c: f32, d: f32) -> f32 {
    if t == 0.0 {
        return b;
    }
    let t = t / d;
    if t == 1.0 {
        return b + c;
    }
    let p = d * 0.3;
    let s = p / 4.0;
    c * 2f32.powf(-10.0 * t) * ((t * d - s) * (2.0 * PI) / p).sin() + c + b
}

/// Period is stretched by 1.5 relative to the one-sided elastic curves.
#[inline]
pub fn elastic_in_out(t: f32, b: f32, c: f32, d: f32) -> f32 {
    if t == 0.0 {
        return b;
    }
    let t = t / (d / 2.0);
    if t == 2.0 {
        return b + c;
    }
    let p = d * (0.3 * 1.5);
    let s = p / 4.0;
    if t < 1.0 {
        let t = t - 1.0;
        let amp = c * 2f32.powf(10.0 * t);
        return -0.5 * (amp * ((t * d - s) * (2.0 * PI) / p).sin()) + b;
    }
    let t = t - 1.0;
    let amp = c * 2f32.powf(-10.0 * t);
    amp * ((t * d - s) * (2.0 * PI) / p).sin() * 0.5 + c + b
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_variants_agree() {
        for &t in &[0.0f32, 1.5, 30.0, 60.0] {
            let v = linear_none(t, 2.0, 60.0, 60.0);
            assert_eq!(v, linear_in(t, 2.0, 60.0, 60.0));
            assert_eq!(v, linear_out(t, 2.0, 60.0, 60.0));
            assert_eq!(v, linear_in_out(t, 2.0, 60.0, 60.0));
        }
        assert_eq!(linear_none(30.0, 0.0, 60.0, 60.0), 30.0);
    }

    #[test]
    fn expo_and_elastic_hit_endpoints_exactly() {
        assert_eq!(expo_in(0.0, 3.0, 10.0, 2.0), 3.0);
        assert_eq!(expo_out(2.0, 3.0, 10.0, 2.0), 13.0);
        assert_eq!(expo_in_out(0.0, 3.0, 10.0, 2.0), 3.0);
        assert_eq!(expo_in_out(2.0, 3.0, 10.0, 2.0), 13.0);
        assert_eq!(elastic_in(2.0, 3.0, 10.0, 2.0), 13.0);
        assert_eq!(elastic_out(0.0, 3.0, 10.0, 2.0), 3.0);
        assert_eq!(elastic_in_out(2.0, 3.0, 10.0, 2.0), 13.0);
    }

    #[test]
    fn back_in_dips_below_start() {
        // Back overshoots backwards before heading to the target.
        assert!(back_in(0.2, 0.0, 100.0, 1.0) < 0.0);
        assert!(back_out(0.8, 0.0, 100.0, 1.0) > 100.0);
    }

    #[test]
    fn bounce_out_segments_join() {
        let d = 1.0;
        for &edge in &[1.0 / 2.75, 2.0 / 2.75, 2.5 / 2.75] {
            let before = bounce_out(edge - 1e-4, 0.0, 1.0, d);
            let after = bounce_out(edge + 1e-4, 0.0, 1.0, d);
            assert!((before - after).abs() < 1e-2, "gap at {edge}");
        }
    }
}
