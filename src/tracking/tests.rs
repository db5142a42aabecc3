//! Tests for tracking configuration generation and encoding

#[cfg(test)]
mod tests {
    use crate::tracking::{generate, json_to_base64};
    use crate::{Subnet, TrackingConfig};
    use base64::{Engine as _, engine::general_purpose};

    /// Helper function to create a stored subnet record
    fn create_test_subnet(id: i64, subnet_id: &str) -> Subnet {
        Subnet {
            id,
            owner: "owner".to_string(),
            subnet_id: subnet_id.to_string(),
            vm_id: "vm".to_string(),
        }
    }

    #[test]
    fn test_generate_empty_input_yields_empty_string() {
        let config = generate(&[]);

        assert_eq!(config.track_subnets, "");
    }

    #[test]
    fn test_generate_joins_ids_in_input_order() {
        let subnets = vec![create_test_subnet(1, "a"), create_test_subnet(2, "b")];

        let config = generate(&subnets);

        assert_eq!(config.track_subnets, "a,b");
    }

    #[test]
    fn test_generate_single_id_has_no_separator() {
        let subnets = vec![create_test_subnet(1, "only")];

        assert_eq!(generate(&subnets).track_subnets, "only");
    }

    #[test]
    fn test_generate_keeps_duplicates() {
        let subnets = vec![create_test_subnet(1, "a"), create_test_subnet(2, "a")];

        assert_eq!(generate(&subnets).track_subnets, "a,a");
    }

    #[test]
    fn test_encode_empty_config_is_byte_exact() {
        let encoded = json_to_base64(&generate(&[])).unwrap();

        // base64 of {"track-subnets":""}
        assert_eq!(encoded, "eyJ0cmFjay1zdWJuZXRzIjoiIn0=");
    }

    #[test]
    fn test_encode_round_trips_through_json() {
        let config = TrackingConfig {
            track_subnets: "a,b".to_string(),
        };

        let encoded = json_to_base64(&config).unwrap();
        let decoded = general_purpose::STANDARD.decode(encoded).unwrap();
        let parsed: TrackingConfig = serde_json::from_slice(&decoded).unwrap();

        assert_eq!(parsed, config);
    }
}
