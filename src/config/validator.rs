use crate::config::MindMapConfig;
use crate::error::{MindweaveError, Result, ValidationError};

/// Configuration validator
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate the configuration
    pub fn validate(config: &MindMapConfig) -> Result<()> {
        let mut errors = Vec::new();

        Self::validate_extraction(config, &mut errors);
        Self::validate_clustering(config, &mut errors);
        Self::validate_hierarchy(config, &mut errors);
        Self::validate_layout(config, &mut errors);

        if errors.is_empty() {
            Ok(())
        } else {
            Err(MindweaveError::ConfigValidation { errors })
        }
    }

    fn validate_extraction(config: &MindMapConfig, errors: &mut Vec<ValidationError>) {
        if config.extraction.max_keywords == 0 {
            errors.push(ValidationError::new(
                "extraction.max_keywords",
                "Must keep at least one keyword",
            ));
        }
        if config.extraction.max_keyphrases == 0 {
            errors.push(ValidationError::new(
                "extraction.max_keyphrases",
                "Must keep at least one keyphrase",
            ));
        }
    }

    fn validate_clustering(config: &MindMapConfig, errors: &mut Vec<ValidationError>) {
        let cooccurrence = config.clustering.cooccurrence_threshold;
        if !(0.0..=1.0).contains(&cooccurrence) {
            errors.push(ValidationError::new(
                "clustering.cooccurrence_threshold",
                format!("Must be within [0, 1], got {}", cooccurrence),
            ));
        }

        let merge = config.clustering.merge_threshold;
        if !(0.0..=1.0).contains(&merge) {
            errors.push(ValidationError::new(
                "clustering.merge_threshold",
                format!("Must be within [0, 1], got {}", merge),
            ));
        }
    }

    fn validate_hierarchy(config: &MindMapConfig, errors: &mut Vec<ValidationError>) {
        if config.hierarchy.max_main_nodes == 0 {
            errors.push(ValidationError::new(
                "hierarchy.max_main_nodes",
                "Must allow at least one main node",
            ));
        }
    }

    fn validate_layout(config: &MindMapConfig, errors: &mut Vec<ValidationError>) {
        if config.layout.main_radius <= 0.0 {
            errors.push(ValidationError::new(
                "layout.main_radius",
                format!("Must be positive, got {}", config.layout.main_radius),
            ));
        }
        if config.layout.sub_radius <= 0.0 {
            errors.push(ValidationError::new(
                "layout.sub_radius",
                format!("Must be positive, got {}", config.layout.sub_radius),
            ));
        }
    }
}
