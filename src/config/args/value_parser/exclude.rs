use glob::Pattern;

const EMPTY_PATTERN: &str = "exclude pattern must not be empty.";

pub fn check_exclude_pattern(pattern: &str) -> Result<String, String> {
    let pattern = pattern.trim();
    if pattern.is_empty() {
        return Err(EMPTY_PATTERN.to_string());
    }

    Pattern::new(pattern).map_err(|e| format!("invalid glob pattern: {e}"))?;

    Ok(pattern.to_string())
}
