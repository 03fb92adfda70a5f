//! Tests for configuration defaults and validation

#[cfg(test)]
mod tests {
    use shuffle_entropy::ExperimentError;
    use shuffle_entropy::io::configuration::{
        DEFAULT_ARRAY_SIZE, DEFAULT_SEED, DEFAULT_TRIALS, ExperimentConfig, MAX_ARRAY_SIZE,
    };

    // Tests the default configuration matches the published constants
    // Verified by swapping size and seed defaults
    #[test]
    fn test_default_configuration() {
        let config = ExperimentConfig::default();

        assert_eq!(config.size, DEFAULT_ARRAY_SIZE);
        assert_eq!(config.trials, DEFAULT_TRIALS);
        assert_eq!(config.seed, DEFAULT_SEED);
        assert!(config.validate().is_ok());
    }

    // Tests zero and oversized parameters are rejected
    // Verified by allowing size equal to zero
    #[test]
    fn test_validation_rejects_bad_parameters() {
        let cases = [
            (0, 10, "size"),
            (MAX_ARRAY_SIZE + 1, 10, "size"),
            (3, 0, "trials"),
        ];

        for (size, trials, expected) in cases {
            let config = ExperimentConfig {
                size,
                trials,
                seed: 0,
            };
            match config.validate() {
                Err(ExperimentError::InvalidConfiguration { parameter, .. }) => {
                    assert_eq!(parameter, expected);
                }
                other => unreachable!("Expected InvalidConfiguration, got {other:?}"),
            }
        }
    }

    // Tests the boundary sizes are accepted
    // Verified by using an exclusive maximum
    #[test]
    fn test_validation_accepts_boundaries() {
        for size in [1, MAX_ARRAY_SIZE] {
            let config = ExperimentConfig {
                size,
                trials: 1,
                seed: 0,
            };
            assert!(config.validate().is_ok(), "size {size} rejected");
        }
    }

    // Tests the base sequence is 0..size
    // Verified by starting the sequence at 1
    #[test]
    fn test_base_sequence() {
        let config = ExperimentConfig {
            size: 4,
            trials: 1,
            seed: 0,
        };
        assert_eq!(config.base_sequence(), vec![0, 1, 2, 3]);
    }
}
