use uuid::Uuid;

use crate::server::error::internal::InternalError;

/// Parses a stored string identifier into a UUID
///
/// # Arguments
/// - `value` - The String to attempt to parse into `Uuid`
///
/// # Returns
/// - `Ok(Uuid)` - Successfully parsed String to `Uuid`
/// - `Err(InternalError::ParseStringId)` - Failed to parse the string as a UUID
pub fn parse_uuid_from_string(value: String) -> Result<Uuid, InternalError> {
    let result = Uuid::parse_str(&value).map_err(|e| InternalError::ParseStringId {
        value: value.clone(),
        source: e,
    })?;

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hyphenated_uuid() {
        let id = Uuid::new_v4();

        assert_eq!(parse_uuid_from_string(id.to_string()).unwrap(), id);
    }

    #[test]
    fn rejects_non_uuid() {
        let result = parse_uuid_from_string("42".to_string());

        assert!(matches!(result, Err(InternalError::ParseStringId { .. })));
    }
}
