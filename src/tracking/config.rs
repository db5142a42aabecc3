use crate::{Subnet, TrackingConfig};

/// Build the tracking configuration from stored subnet records
///
/// Joins every subnet identifier with commas, in input order. An empty input
/// produces an empty string, not an error. No deduplication and no sorting;
/// identifiers are assumed to never contain commas.
pub fn generate(subnets: &[Subnet]) -> TrackingConfig {
    let ids: Vec<&str> = subnets.iter().map(|s| s.subnet_id.as_str()).collect();

    TrackingConfig {
        track_subnets: ids.join(","),
    }
}
