//! Token lifetimes are written the way operators think about them: `300`,
//! `90s`, `5m`, `12h`, `1d`. Internally everything is whole seconds.

const MINUTE: i64 = 60;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;

/// Longest accepted lifetime: 100 years.
pub const MAX_DURATION: i64 = 100 * 365 * DAY;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DurationParseError {
    #[error("duration is empty")]
    Empty,
    #[error("invalid duration '{0}'")]
    Invalid(String),
    #[error("duration must be positive, got '{0}'")]
    NotPositive(String),
    #[error("duration '{0}' exceeds the {MAX_DURATION}s maximum")]
    TooLarge(String),
}

/// Parses a lifetime into seconds. A bare number is taken as seconds.
/// Values above [`MAX_DURATION`] are rejected so that `iat + lifetime`
/// stays far from `i64` overflow.
pub fn parse_duration(input: &str) -> Result<i64, DurationParseError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(DurationParseError::Empty);
    }

    let (digits, unit) = match trimmed.char_indices().last() {
        Some((idx, c)) if c.is_ascii_alphabetic() => (&trimmed[..idx], Some(c)),
        _ => (trimmed, None),
    };

    let value: i64 = digits
        .trim()
        .parse()
        .map_err(|_| DurationParseError::Invalid(trimmed.to_string()))?;

    let multiplier = match unit.map(|c| c.to_ascii_lowercase()) {
        None | Some('s') => 1,
        Some('m') => MINUTE,
        Some('h') => HOUR,
        Some('d') => DAY,
        Some(_) => return Err(DurationParseError::Invalid(trimmed.to_string())),
    };

    if value <= 0 {
        return Err(DurationParseError::NotPositive(trimmed.to_string()));
    }

    value
        .checked_mul(multiplier)
        .filter(|seconds| *seconds <= MAX_DURATION)
        .ok_or_else(|| DurationParseError::TooLarge(trimmed.to_string()))
}

/// Renders seconds in the largest unit that divides them evenly.
pub fn format_duration(seconds: i64) -> String {
    if seconds > 0 && seconds % DAY == 0 {
        format!("{}d", seconds / DAY)
    } else if seconds > 0 && seconds % HOUR == 0 {
        format!("{}h", seconds / HOUR)
    } else if seconds > 0 && seconds % MINUTE == 0 {
        format!("{}m", seconds / MINUTE)
    } else {
        format!("{seconds}s")
    }
}
