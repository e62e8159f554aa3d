//! `--name=value` flag scanning shared by both harnesses.
//!
//! Numeric values are read leniently: leading whitespace is skipped, the
//! longest numeric prefix is consumed and any trailing text is ignored. A
//! bad value is never fatal; the scanner logs it and the flag stays unset so
//! its default applies. The output path is taken byte for byte, so names
//! that are not valid UTF-8 reach the filesystem unchanged.

use std::ffi::{OsStr, OsString};

use tracing::warn;

use crate::config::{Bounds, HarnessConfig, PATH_CAPACITY};
use crate::error::ArgError;

pub const FLAG_HELP: &str = "--help";
pub const FLAG_B: &str = "--b=";
pub const FLAG_C: &str = "--c=";
pub const FLAG_D: &str = "--d=";
pub const FLAG_TD: &str = "--td=";
pub const FLAG_IT: &str = "--it=";
pub const FLAG_OUT: &str = "--out=";

/// Values the user supplied successfully. `None` means "not set".
///
/// The first accepted occurrence of a flag wins; an occurrence that fails
/// validation leaves the slot open for a later one.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScannedArgs {
    pub b: Option<f32>,
    pub c: Option<f32>,
    pub d: Option<f32>,
    pub td: Option<f32>,
    pub it: Option<i64>,
    pub out: Option<OsString>,
}

impl ScannedArgs {
    /// True once every flag the harness recognizes has been set.
    pub fn all_set(&self, cfg: &HarnessConfig) -> bool {
        self.b.is_some()
            && self.c.is_some()
            && self.d.is_some()
            && self.td.is_some()
            && (cfg.it.is_none() || self.it.is_some())
            && self.out.is_some()
    }
}

/// True if `--help` appears anywhere in `args`.
pub fn wants_help<S: AsRef<OsStr>>(args: &[S]) -> bool {
    args.iter().any(|a| a.as_ref() == OsStr::new(FLAG_HELP))
}

/// Scan `args` (program name excluded) for the flags `cfg` recognizes.
///
/// Unrecognized arguments are ignored. Scanning stops as soon as every
/// recognized flag has been set.
pub fn scan_args<S: AsRef<OsStr>>(args: &[S], cfg: &HarnessConfig) -> ScannedArgs {
    let mut scanned = ScannedArgs::default();

    for raw in args {
        let raw = raw.as_ref();
        // Flag names are ASCII, so matching on the lossy text is exact.
        let text = raw.to_string_lossy();
        let arg: &str = &text;
        if scanned.b.is_none() && arg.starts_with(FLAG_B) {
            scanned.b = accept(get_float_arg(arg, FLAG_B, cfg.b.bounds));
        } else if scanned.c.is_none() && arg.starts_with(FLAG_C) {
            scanned.c = accept(get_float_arg(arg, FLAG_C, cfg.c.bounds));
        } else if scanned.d.is_none() && arg.starts_with(FLAG_D) {
            scanned.d = accept(get_float_arg(arg, FLAG_D, cfg.d.bounds));
        } else if scanned.td.is_none() && arg.starts_with(FLAG_TD) {
            scanned.td = accept(get_float_arg(arg, FLAG_TD, cfg.td.bounds));
        } else if let Some(it) = cfg
            .it
            .as_ref()
            .filter(|_| scanned.it.is_none() && arg.starts_with(FLAG_IT))
        {
            scanned.it = accept(get_long_arg(arg, FLAG_IT, it.bounds));
        } else if scanned.out.is_none() && arg.starts_with(FLAG_OUT) {
            scanned.out = accept(get_path_arg(raw, FLAG_OUT, PATH_CAPACITY));
        } else if scanned.all_set(cfg) {
            break;
        }
    }

    scanned
}

fn accept<T>(res: Result<T, ArgError>) -> Option<T> {
    match res {
        Ok(v) => Some(v),
        Err(err) => {
            warn!("{err}");
            None
        }
    }
}

/// Parse the float after `prefix` and check it against `bounds`.
pub fn get_float_arg(arg: &str, prefix: &'static str, bounds: Bounds<f32>) -> Result<f32, ArgError> {
    let raw = arg.get(prefix.len()..).unwrap_or("");
    let value = parse_float_prefix(raw).ok_or(ArgError::Invalid { flag: prefix })?;
    if !bounds.contains(value) {
        return Err(ArgError::OutOfRange { flag: prefix });
    }
    Ok(value)
}

/// Parse the integer after `prefix` and check it against `bounds`.
pub fn get_long_arg(arg: &str, prefix: &'static str, bounds: Bounds<i64>) -> Result<i64, ArgError> {
    let raw = arg.get(prefix.len()..).unwrap_or("");
    let value = parse_long_prefix(raw).ok_or(ArgError::Invalid { flag: prefix })?;
    if !bounds.contains(value) {
        return Err(ArgError::OutOfRange { flag: prefix });
    }
    Ok(value)
}

/// Copy the text after `prefix`, truncated to `capacity - 1` bytes.
pub fn get_string_arg(arg: &str, prefix: &'static str, capacity: usize) -> Result<String, ArgError> {
    let max_len = capacity.saturating_sub(1);
    if prefix.len() > max_len {
        return Err(ArgError::PrefixTooLong { flag: prefix });
    }
    let raw = arg.get(prefix.len()..).unwrap_or("");
    let mut end = raw.len().min(max_len);
    while !raw.is_char_boundary(end) {
        end -= 1;
    }
    Ok(raw[..end].to_string())
}

/// Copy the raw bytes after `prefix`, truncated to `capacity - 1` bytes.
#[cfg(unix)]
pub fn get_path_arg(arg: &OsStr, prefix: &'static str, capacity: usize) -> Result<OsString, ArgError> {
    use std::os::unix::ffi::OsStrExt;

    let max_len = capacity.saturating_sub(1);
    if prefix.len() > max_len {
        return Err(ArgError::PrefixTooLong { flag: prefix });
    }
    let raw = arg.as_bytes().get(prefix.len()..).unwrap_or(&[]);
    Ok(OsStr::from_bytes(&raw[..raw.len().min(max_len)]).to_os_string())
}

/// Copy the text after `prefix`, truncated to `capacity - 1` bytes.
#[cfg(not(unix))]
pub fn get_path_arg(arg: &OsStr, prefix: &'static str, capacity: usize) -> Result<OsString, ArgError> {
    get_string_arg(&arg.to_string_lossy(), prefix, capacity).map(OsString::from)
}

/// Longest-prefix float parse. `None` when no characters are consumed, a
/// finite literal overflows `f32`, or a nonzero literal underflows to zero
/// or a subnormal.
pub fn parse_float_prefix(s: &str) -> Option<f32> {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let mut i = 0;

    let negative = match bytes.first() {
        Some(b'-') => {
            i += 1;
            true
        }
        Some(b'+') => {
            i += 1;
            false
        }
        _ => false,
    };

    let rest = &s[i..];
    if let Some(special) = parse_special(rest) {
        return Some(if negative { -special } else { special });
    }

    let digits_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let int_digits = i - digits_start;

    let mut frac_digits = 0;
    if i < bytes.len() && bytes[i] == b'.' {
        let mut j = i + 1;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        frac_digits = j - i - 1;
        if int_digits > 0 || frac_digits > 0 {
            i = j;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return None;
    }
    let nonzero_mantissa = s[digits_start..i].bytes().any(|b| matches!(b, b'1'..=b'9'));

    // Exponent only counts when at least one digit follows it.
    if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
        let mut j = i + 1;
        if j < bytes.len() && (bytes[j] == b'+' || bytes[j] == b'-') {
            j += 1;
        }
        let exp_start = j;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            i = j;
        }
    }

    let value: f32 = s[..i].parse().ok()?;
    if value.is_infinite() || (nonzero_mantissa && (value == 0.0 || value.is_subnormal())) {
        return None;
    }
    Some(value)
}

fn parse_special(s: &str) -> Option<f32> {
    let starts_with_ci = |word: &str| {
        s.len() >= word.len() && s.as_bytes()[..word.len()].eq_ignore_ascii_case(word.as_bytes())
    };
    if starts_with_ci("inf") {
        Some(f32::INFINITY)
    } else if starts_with_ci("nan") {
        Some(f32::NAN)
    } else {
        None
    }
}

/// Longest-prefix integer parse with automatic base detection
/// (`0x` hex, leading `0` octal, decimal otherwise). `None` when no digits
/// are consumed or the value overflows `i64`.
pub fn parse_long_prefix(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let mut i = 0;

    let negative = match bytes.first() {
        Some(b'-') => {
            i += 1;
            true
        }
        Some(b'+') => {
            i += 1;
            false
        }
        _ => false,
    };

    let radix = if bytes.get(i) == Some(&b'0')
        && matches!(bytes.get(i + 1), Some(b'x') | Some(b'X'))
        && bytes.get(i + 2).is_some_and(|b| b.is_ascii_hexdigit())
    {
        i += 2;
        16
    } else if bytes.get(i) == Some(&b'0') {
        8
    } else {
        10
    };

    let mut magnitude: u64 = 0;
    let mut overflow = false;
    let mut consumed = 0;
    while let Some(digit) = bytes.get(i).and_then(|&b| (b as char).to_digit(radix)) {
        match magnitude
            .checked_mul(u64::from(radix))
            .and_then(|m| m.checked_add(u64::from(digit)))
        {
            Some(m) => magnitude = m,
            None => overflow = true,
        }
        consumed += 1;
        i += 1;
    }

    if consumed == 0 || overflow {
        return None;
    }

    if negative {
        if magnitude == i64::MIN.unsigned_abs() {
            Some(i64::MIN)
        } else {
            i64::try_from(magnitude).ok().map(|v| -v)
        }
    } else {
        i64::try_from(magnitude).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn float_prefix_ignores_trailing_text() {
        assert_eq!(parse_float_prefix("5abc"), Some(5.0));
        assert_eq!(parse_float_prefix("  -2.5e1x"), Some(-25.0));
        assert_eq!(parse_float_prefix("1e"), Some(1.0));
        assert_eq!(parse_float_prefix(".5"), Some(0.5));
        assert_eq!(parse_float_prefix("3."), Some(3.0));
    }

    #[test]
    fn float_prefix_rejects_empty_and_overflow() {
        assert_eq!(parse_float_prefix(""), None);
        assert_eq!(parse_float_prefix("abc"), None);
        assert_eq!(parse_float_prefix("."), None);
        assert_eq!(parse_float_prefix("-"), None);
        assert_eq!(parse_float_prefix("1e50"), None);
    }

    #[test]
    fn float_prefix_rejects_underflow() {
        assert_eq!(parse_float_prefix("1e-39"), None);
        assert_eq!(parse_float_prefix("-1e-50"), None);
        assert_eq!(parse_float_prefix("0.0000001e-40"), None);
        assert_eq!(parse_float_prefix("2e-38"), Some(2e-38));
        assert_eq!(parse_float_prefix("0e-50"), Some(0.0));
        assert_eq!(parse_float_prefix("-0.000"), Some(0.0));
    }

    #[test]
    fn float_prefix_specials() {
        assert_eq!(parse_float_prefix("INF"), Some(f32::INFINITY));
        assert_eq!(parse_float_prefix("-infinity"), Some(f32::NEG_INFINITY));
        assert!(parse_float_prefix("nan").is_some_and(f32::is_nan));
    }

    #[test]
    fn long_prefix_detects_base() {
        assert_eq!(parse_long_prefix("42"), Some(42));
        assert_eq!(parse_long_prefix("0x1F"), Some(31));
        assert_eq!(parse_long_prefix("010"), Some(8));
        assert_eq!(parse_long_prefix("0"), Some(0));
        assert_eq!(parse_long_prefix("08"), Some(0));
        assert_eq!(parse_long_prefix("0xg"), Some(0));
        assert_eq!(parse_long_prefix(" -7 apples"), Some(-7));
    }

    #[test]
    fn long_prefix_limits() {
        assert_eq!(parse_long_prefix("9223372036854775807"), Some(i64::MAX));
        assert_eq!(parse_long_prefix("-9223372036854775808"), Some(i64::MIN));
        assert_eq!(parse_long_prefix("9223372036854775808"), None);
        assert_eq!(parse_long_prefix("x12"), None);
        assert_eq!(parse_long_prefix(""), None);
    }

    #[test]
    fn string_arg_is_bounded() {
        assert_eq!(get_string_arg("--out=abc", FLAG_OUT, 8).as_deref(), Ok("abc"));
        assert_eq!(get_string_arg("--out=abcdefghij", FLAG_OUT, 8).as_deref(), Ok("abcdefg"));
        assert_eq!(
            get_string_arg("--out=abc", FLAG_OUT, 4),
            Err(ArgError::PrefixTooLong { flag: FLAG_OUT })
        );
        // Never splits a multi-byte character.
        assert_eq!(get_string_arg("--out=abcdefé", FLAG_OUT, 8).as_deref(), Ok("abcdef"));
    }

    #[cfg(unix)]
    #[test]
    fn path_arg_keeps_raw_bytes() {
        use std::os::unix::ffi::OsStrExt;

        let arg = OsStr::from_bytes(b"--out=report_\xff.txt");
        let path = get_path_arg(arg, FLAG_OUT, PATH_CAPACITY).unwrap();
        assert_eq!(path.as_bytes(), b"report_\xff.txt");

        let arg = OsStr::from_bytes(b"--out=ab\xffcdefg");
        let path = get_path_arg(arg, FLAG_OUT, 7).unwrap();
        assert_eq!(path.as_bytes(), b"ab\xffcde");
        assert_eq!(
            get_path_arg(arg, FLAG_OUT, 6),
            Err(ArgError::PrefixTooLong { flag: FLAG_OUT })
        );
    }

    #[cfg(unix)]
    #[test]
    fn scan_reads_non_utf8_out_verbatim() {
        use std::os::unix::ffi::OsStrExt;

        let args = [OsStr::from_bytes(b"--b=\xff2"), OsStr::from_bytes(b"--out=r\xfe")];
        let scanned = scan_args(&args, &HarnessConfig::RESULTS);
        assert_eq!(scanned.b, None);
        assert_eq!(scanned.out.as_deref().map(OsStrExt::as_bytes), Some(&b"r\xfe"[..]));
    }
}
