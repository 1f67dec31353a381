//! Typed path parameter helpers.

use roster_core::error::AppError;
use roster_core::types::MemberId;

/// Parses a member id from a path segment.
pub fn parse_member_id(s: &str) -> Result<MemberId, AppError> {
    s.parse::<MemberId>()
        .map_err(|_| AppError::invalid_argument(format!("Invalid member id: {s}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_core::error::ErrorKind;

    #[test]
    fn test_parse_member_id() {
        assert_eq!(parse_member_id("4").unwrap(), MemberId(4));
        assert_eq!(
            parse_member_id("four").unwrap_err().kind,
            ErrorKind::InvalidArgument
        );
    }
}
