use validator::ValidationError;

/// Reject strings that are empty once surrounding whitespace is dropped.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(
            ValidationError::new("blank").with_message("This field may not be blank.".into()),
        );
    }
    Ok(())
}
