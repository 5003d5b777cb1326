use alloc::format;

use crate::error::BmpError;

/// Caller-imposed caps on what a decode may allocate.
///
/// All fields default to `None` (no limit). Limits are checked after the
/// header is validated and before the output buffer exists.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Limits {
    pub max_width: Option<u64>,
    pub max_height: Option<u64>,
    /// Maximum pixel count (width * height).
    pub max_pixels: Option<u64>,
    /// Maximum size of the RGBA8 output buffer in bytes.
    pub max_memory_bytes: Option<u64>,
}

impl Limits {
    /// Reject a `width` x `height` image whose output is `out_bytes` long.
    pub(crate) fn check(&self, width: u32, height: u32, out_bytes: usize) -> Result<(), BmpError> {
        let pixels = u64::from(width) * u64::from(height);
        let checks = [
            ("width", u64::from(width), self.max_width),
            ("height", u64::from(height), self.max_height),
            ("pixel count", pixels, self.max_pixels),
            ("output size", out_bytes as u64, self.max_memory_bytes),
        ];
        for (what, value, limit) in checks {
            if let Some(max) = limit {
                if value > max {
                    return Err(BmpError::LimitExceeded(format!(
                        "{what} {value} exceeds limit {max}"
                    )));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_unlimited() {
        assert!(Limits::default().check(u32::MAX, u32::MAX, usize::MAX).is_ok());
    }

    #[test]
    fn pixel_cap_uses_wide_arithmetic() {
        let limits = Limits {
            max_pixels: Some(u64::from(u32::MAX)),
            ..Default::default()
        };
        assert!(matches!(
            limits.check(u32::MAX, 2, 0),
            Err(BmpError::LimitExceeded(_))
        ));
        assert!(limits.check(u32::MAX, 1, 0).is_ok());
    }

    #[test]
    fn message_names_the_breached_limit() {
        let limits = Limits {
            max_memory_bytes: Some(63),
            ..Default::default()
        };
        match limits.check(4, 4, 64) {
            Err(BmpError::LimitExceeded(msg)) => {
                assert_eq!(msg, "output size 64 exceeds limit 63");
            }
            other => panic!("expected LimitExceeded, got {other:?}"),
        }
    }
}
