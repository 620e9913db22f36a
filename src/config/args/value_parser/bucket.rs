use std::sync::LazyLock;

use regex::Regex;

const INVALID_BUCKET_NAME: &str =
    "invalid bucket name. 3-63 characters of lowercase letters, numbers, dots and hyphens.";

static BUCKET_NAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9][a-z0-9.-]{1,61}[a-z0-9]$").unwrap());

pub fn check_bucket_name(bucket: &str) -> Result<String, String> {
    if !BUCKET_NAME_REGEX.is_match(bucket) || bucket.contains("..") {
        return Err(INVALID_BUCKET_NAME.to_string());
    }

    Ok(bucket.to_string())
}
