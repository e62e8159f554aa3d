//! Parameter ranges, defaults and resolution for both harnesses.

use std::ffi::OsString;
use std::path::PathBuf;

use crate::args::ScannedArgs;
use crate::error::{HarnessError, Result};

/// Float upper limits are `f32::MAX / LIMIT_DIV` so `t += td` and
/// `c * t` stay finite for a good while.
pub const LIMIT_DIV: f32 = 10_000.0;
pub const LIMIT_DIV_INT: i64 = 100;
pub const MAX_FLOAT_ARG: f32 = f32::MAX / LIMIT_DIV;
pub const MAX_IT: i64 = i64::MAX / LIMIT_DIV_INT;

/// Smallest usable time step. In the perftest a smaller `td` means
/// "derive td from it".
pub const MIN_TD: f32 = 0.1;

/// Byte capacity of the output path buffer, terminator included.
pub const PATH_CAPACITY: usize = 4096;

/// Closed range `[min, max]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds<T> {
    pub min: T,
    pub max: T,
}

impl<T: PartialOrd + Copy> Bounds<T> {
    pub const fn new(min: T, max: T) -> Self {
        Self { min, max }
    }

    /// NaN is never contained.
    #[inline]
    pub fn contains(&self, v: T) -> bool {
        v >= self.min && v <= self.max
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FloatParam {
    pub bounds: Bounds<f32>,
    pub default: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IntParam {
    pub bounds: Bounds<i64>,
    pub default: i64,
}

/// Which flags a harness accepts, their ranges and their defaults.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HarnessConfig {
    pub b: FloatParam,
    pub c: FloatParam,
    pub d: FloatParam,
    pub td: FloatParam,
    /// `None` when the harness has no `--it=` flag.
    pub it: Option<IntParam>,
}

impl HarnessConfig {
    pub const PERFTEST: Self = Self {
        b: FloatParam {
            bounds: Bounds::new(0.0, MAX_FLOAT_ARG),
            default: 0.0,
        },
        c: FloatParam {
            bounds: Bounds::new(1.0, MAX_FLOAT_ARG),
            default: 2000.0,
        },
        d: FloatParam {
            bounds: Bounds::new(0.2, MAX_FLOAT_ARG),
            default: 600.0,
        },
        td: FloatParam {
            bounds: Bounds::new(f32::MIN_POSITIVE, MAX_FLOAT_ARG),
            default: 0.5,
        },
        it: Some(IntParam {
            bounds: Bounds::new(i64::MIN, MAX_IT),
            default: 1_000_000,
        }),
    };

    pub const RESULTS: Self = Self {
        b: FloatParam {
            bounds: Bounds::new(0.0, MAX_FLOAT_ARG),
            default: 0.0,
        },
        c: FloatParam {
            bounds: Bounds::new(1.0, MAX_FLOAT_ARG),
            default: 60.0,
        },
        d: FloatParam {
            bounds: Bounds::new(0.2, MAX_FLOAT_ARG),
            default: 60.0,
        },
        td: FloatParam {
            bounds: Bounds::new(MIN_TD, MAX_FLOAT_ARG),
            default: 1.0,
        },
        it: None,
    };
}

/// No `--out=` means stdout. An explicit empty path stays a path and
/// fails to open.
fn out_path(out: &Option<OsString>) -> Option<PathBuf> {
    out.clone().map(PathBuf::from)
}

/// Resolved parameters for `easings_perftest`.
#[derive(Clone, Debug, PartialEq)]
pub struct PerfParams {
    pub b: f32,
    pub c: f32,
    pub d: f32,
    pub td: f32,
    pub it: i64,
    pub out: Option<PathBuf>,
}

impl PerfParams {
    /// Apply defaults, then derive whichever of `td`/`it` is under-specified.
    ///
    /// Fails only when the user set both `td < MIN_TD` and `it < 1`.
    pub fn resolve(scanned: &ScannedArgs) -> Result<Self> {
        let cfg = &HarnessConfig::PERFTEST;
        let it_default = cfg.it.map_or(1_000_000, |it| it.default);

        let b = scanned.b.unwrap_or(cfg.b.default);
        let c = scanned.c.unwrap_or(cfg.c.default);
        let d = scanned.d.unwrap_or(cfg.d.default);
        let mut td = scanned.td.unwrap_or(cfg.td.default);
        let mut it = scanned.it.unwrap_or(it_default);

        if scanned.td.is_some() && scanned.it.is_some() && td < MIN_TD && it < 1 {
            return Err(HarnessError::Underivable {
                td,
                it,
                min_td: MIN_TD,
            });
        }

        if td < MIN_TD {
            td = d / it as f32;
        } else if it < 1 {
            // Truncates toward zero, saturating at the i64 limits.
            it = (d / td + 1.0) as i64;
        }

        Ok(Self {
            b,
            c,
            d,
            td,
            it,
            out: out_path(&scanned.out),
        })
    }
}

/// Resolved parameters for `easings_results`.
#[derive(Clone, Debug, PartialEq)]
pub struct ResultsParams {
    pub b: f32,
    pub c: f32,
    pub d: f32,
    pub td: f32,
    pub out: Option<PathBuf>,
}

impl ResultsParams {
    pub fn resolve(scanned: &ScannedArgs) -> Self {
        let cfg = &HarnessConfig::RESULTS;
        Self {
            b: scanned.b.unwrap_or(cfg.b.default),
            c: scanned.c.unwrap_or(cfg.c.default),
            d: scanned.d.unwrap_or(cfg.d.default),
            td: scanned.td.unwrap_or(cfg.td.default),
            out: out_path(&scanned.out),
        }
    }

    /// `floor(d / td) + 1` samples per easing.
    pub fn iterations(&self) -> u64 {
        (self.d / self.td + 1.0) as u64
    }
}
