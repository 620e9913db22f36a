use serde::{Deserialize, Serialize};

pub const DEFAULT_REGION: &str = "us-east-1";

// (code, name, endpoint)
const REGION_CATALOG: &[(&str, &str, &str)] = &[
    ("us-east-1", "US East (N. Virginia)", "s3.amazonaws.com"),
    ("us-east-2", "US East (Ohio)", "s3.us-east-2.amazonaws.com"),
    (
        "us-west-1",
        "US West (N. California)",
        "s3.us-west-1.amazonaws.com",
    ),
    ("us-west-2", "US West (Oregon)", "s3.us-west-2.amazonaws.com"),
    (
        "ca-central-1",
        "Canada (Central)",
        "s3.ca-central-1.amazonaws.com",
    ),
    ("eu-west-1", "EU (Ireland)", "s3.eu-west-1.amazonaws.com"),
    ("eu-west-2", "EU (London)", "s3.eu-west-2.amazonaws.com"),
    (
        "eu-central-1",
        "EU (Frankfurt)",
        "s3.eu-central-1.amazonaws.com",
    ),
    (
        "ap-south-1",
        "Asia Pacific (Mumbai)",
        "s3.ap-south-1.amazonaws.com",
    ),
    (
        "ap-northeast-1",
        "Asia Pacific (Tokyo)",
        "s3.ap-northeast-1.amazonaws.com",
    ),
    (
        "ap-northeast-2",
        "Asia Pacific (Seoul)",
        "s3.ap-northeast-2.amazonaws.com",
    ),
    (
        "ap-southeast-1",
        "Asia Pacific (Singapore)",
        "s3.ap-southeast-1.amazonaws.com",
    ),
    (
        "ap-southeast-2",
        "Asia Pacific (Sydney)",
        "s3.ap-southeast-2.amazonaws.com",
    ),
    (
        "sa-east-1",
        "South America (Sao Paulo)",
        "s3.sa-east-1.amazonaws.com",
    ),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    pub code: String,
    pub name: String,
    pub endpoint: String,
    pub enabled: bool,
}

impl Region {
    pub fn new(code: &str, name: &str, endpoint: &str, enabled: bool) -> Self {
        Self {
            code: code.to_string(),
            name: name.to_string(),
            endpoint: endpoint.to_string(),
            enabled,
        }
    }
}

pub fn is_known_region(code: &str) -> bool {
    REGION_CATALOG.iter().any(|(known, _, _)| *known == code)
}

pub fn known_region_codes() -> Vec<&'static str> {
    REGION_CATALOG.iter().map(|(code, _, _)| *code).collect()
}

/// Every catalog region, enabled when its code is listed in `enabled_codes`.
pub fn build_regions<S: AsRef<str>>(enabled_codes: &[S]) -> Vec<Region> {
    REGION_CATALOG
        .iter()
        .map(|(code, name, endpoint)| {
            let enabled = enabled_codes
                .iter()
                .any(|enabled_code| enabled_code.as_ref() == *code);
            Region::new(code, name, endpoint, enabled)
        })
        .collect()
}
