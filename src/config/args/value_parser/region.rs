use crate::config::region::{is_known_region, known_region_codes};

pub fn check_region(region: &str) -> Result<String, String> {
    let region = region.trim();
    if !is_known_region(region) {
        return Err(format!(
            "unknown region: {region}. valid regions: {}",
            known_region_codes().join(", ")
        ));
    }

    Ok(region.to_string())
}
