//! Dimension strings for layout geometry.
//!
//! Every coordinate and extent in a layout document is a string, either a
//! percentage of the parent box (`"50%"`) or an absolute pixel count
//! (`"10px"`). Resolution happens against the immediate parent box at flatten
//! time; anything that does not parse is a hard error carrying the offending
//! string, never a silently clamped value.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StyleError {
    #[error("Invalid dimension {0:?}: expected a non-negative number ending in '%' or 'px'")]
    InvalidDimension(String),
}

/// A parsed dimension, relative to the immediate parent box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Dimension {
    Percent(f32),
    Px(i32),
}

impl Dimension {
    pub fn parse(input: &str) -> Result<Self, StyleError> {
        let trimmed = input.trim();

        if let Some(val) = trimmed.strip_suffix('%') {
            let pct = val
                .trim()
                .parse::<f32>()
                .map_err(|_| StyleError::InvalidDimension(input.to_string()))?;
            if !pct.is_finite() || pct < 0.0 {
                return Err(StyleError::InvalidDimension(input.to_string()));
            }
            return Ok(Dimension::Percent(pct));
        }

        if let Some(val) = trimmed.strip_suffix("px") {
            let px = val
                .trim()
                .parse::<i32>()
                .map_err(|_| StyleError::InvalidDimension(input.to_string()))?;
            if px < 0 {
                return Err(StyleError::InvalidDimension(input.to_string()));
            }
            return Ok(Dimension::Px(px));
        }

        Err(StyleError::InvalidDimension(input.to_string()))
    }

    /// Resolve against the parent extent, in device pixels.
    ///
    /// Percentages floor; out-of-parent results are the caller's business.
    pub fn resolve(&self, total: i32) -> i32 {
        match self {
            Dimension::Percent(pct) => ((total as f32) * pct / 100.0).floor() as i32,
            Dimension::Px(px) => *px,
        }
    }
}

/// Parse and resolve in one step.
pub fn resolve(value: &str, total: i32) -> Result<i32, StyleError> {
    Ok(Dimension::parse(value)?.resolve(total))
}
