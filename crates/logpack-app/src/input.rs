//! Reading and validating the log length entered by the user

use std::io::BufRead;

use logpack_domain::constants::is_offered_length;
use logpack_domain::LogLength;
use logpack_types::LengthError;

/// Which lengths are accepted beyond the basic positive-number check
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LengthPolicy {
    /// Reject lengths that are not in `LOG_LENGTHS`
    pub strict: bool,
}

/// Read the first token of the next non-blank line.
///
/// Returns `Ok(None)` at end of input.
pub fn read_token<R: BufRead>(reader: &mut R) -> std::io::Result<Option<String>> {
    let mut line = String::new();
    loop {
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        if let Some(token) = line.split_whitespace().next() {
            return Ok(Some(token.to_string()));
        }
    }
}

/// Parse and validate one input token
pub fn parse_length(token: &str, policy: LengthPolicy) -> Result<LogLength, LengthError> {
    let token = token.trim();
    let meters: f64 = token
        .parse()
        .map_err(|_| LengthError::MalformedInput(token.to_string()))?;

    let length = LogLength::new(meters)?;

    if policy.strict && !is_offered_length(length.meters()) {
        return Err(LengthError::NotOffered(length.meters()));
    }

    tracing::debug!("Accepted log length {}", length);
    Ok(length)
}
