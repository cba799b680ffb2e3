#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, PI};

    use crate::config::EvaluationConfig;
    use crate::constants::*;
    use crate::enums::*;
    use crate::error::ScenarioError;
    use crate::types::{ActorVariable, KinematicEnvelope, Values};

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_literal_kind_serde() {
        let variants = vec![
            LiteralKind::AtVisibility,
            LiteralKind::MayCollide,
            LiteralKind::InHeadOnSectorOf,
            LiteralKind::InPortSideSectorOf,
            LiteralKind::InStarboardSideSectorOf,
            LiteralKind::InSternSectorOf,
            LiteralKind::FasterThan,
        ];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: LiteralKind = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_literal_categories() {
        assert_eq!(LiteralKind::AtVisibility.category(), PenaltyCategory::Visibility);
        assert_eq!(LiteralKind::MayCollide.category(), PenaltyCategory::Collision);
        assert_eq!(LiteralKind::InSternSectorOf.category(), PenaltyCategory::Bearing);
        assert_eq!(LiteralKind::FasterThan.category(), PenaltyCategory::Dimension);
        assert!(LiteralKind::AtVisibility.is_symmetric());
        assert!(!LiteralKind::InHeadOnSectorOf.is_symmetric());
    }

    #[test]
    fn test_relation_names() {
        assert_eq!(RelationKind::from_name("head_on"), Some(RelationKind::HeadOn));
        assert_eq!(
            RelationKind::from_name("crossing"),
            Some(RelationKind::CrossingFromPort)
        );
        assert_eq!(RelationKind::from_name("overtaking"), Some(RelationKind::Overtaking));
        assert_eq!(RelationKind::from_name("sideways"), None);
    }

    #[test]
    fn test_values_derived_heading_north() {
        let v = Values::new(10.0, 20.0, 0.0, 5.0, 40.0);
        assert_eq!(v.position.x, 10.0);
        assert_eq!(v.position.y, 20.0);
        assert!(approx(v.velocity.x, 0.0));
        assert!(approx(v.velocity.y, 5.0));
        assert!(approx(v.unit_velocity.length(), 1.0));
        // Port side of a north-bound vessel is west
        assert!(approx(v.perp_unit_velocity.x, -1.0));
        assert!(approx(v.perp_unit_velocity.y, 0.0));
        assert_eq!(v.radius, 20.0);
    }

    #[test]
    fn test_values_derived_heading_east() {
        let v = Values::new(0.0, 0.0, FRAC_PI_2, 10.0, 10.0);
        assert!(approx(v.velocity.x, 10.0));
        assert!(approx(v.velocity.y, 0.0));
        // Port side of an east-bound vessel is north
        assert!(approx(v.perp_unit_velocity.y, 1.0));
    }

    #[test]
    fn test_values_zero_speed_keeps_direction() {
        let v = Values::new(0.0, 0.0, PI, 0.0, 10.0);
        assert_eq!(v.velocity.length(), 0.0);
        assert!(approx(v.unit_velocity.y, -1.0));
        assert_eq!(v.speed_floor(), EPSILON);
    }

    #[test]
    fn test_values_is_finite() {
        assert!(Values::new(1.0, 2.0, 3.0, 4.0, 5.0).is_finite());
        assert!(!Values::new(1.0, 2.0, f64::NAN, 4.0, 5.0).is_finite());
        assert!(!Values::new(f64::INFINITY, 2.0, 0.0, 4.0, 5.0).is_finite());
        assert!(!Values::new(1.0, 2.0, 0.0, 4.0, f64::NEG_INFINITY).is_finite());
    }

    #[test]
    fn test_values_block_round_trip() {
        let v = Values::new(1.0, 2.0, 3.0, 4.0, 5.0);
        let block = v.to_block();
        assert_eq!(block[FIELD_LENGTH], 5.0);
        assert_eq!(block[FIELD_SPEED], 4.0);
        assert_eq!(Values::from_block(&block), v);
    }

    #[test]
    fn test_values_serde_recomputes_derived_fields() {
        let v = Values::new(100.0, -50.0, 1.0, 7.0, 60.0);
        let json = serde_json::to_string(&v).unwrap();
        assert!(!json.contains("unit_velocity"));
        let back: Values = serde_json::from_str(&json).unwrap();
        assert_eq!(back, v);
    }

    #[test]
    fn test_actor_variable_roles() {
        let ego = ActorVariable::ego(0);
        let target = ActorVariable::target(1);
        assert!(ego.is_ego());
        assert!(!target.is_ego());
        assert_eq!(ego.envelope, KinematicEnvelope::default());
    }

    #[test]
    fn test_envelope_validation() {
        assert!(KinematicEnvelope::default().is_valid());
        assert!(!KinematicEnvelope::new(5.0, 1.0, 10.0, 20.0).is_valid());
        assert!(!KinematicEnvelope::new(1.0, 5.0, 0.0, 20.0).is_valid());
        assert!(!KinematicEnvelope::new(1.0, f64::NAN, 10.0, 20.0).is_valid());
    }

    #[test]
    fn test_config_defaults_valid() {
        let config = EvaluationConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.head_on_half_angle, HEAD_ON_HALF_ANGLE);
    }

    #[test]
    fn test_config_partial_json() {
        let config = EvaluationConfig::from_json(r#"{"max_distance": 5000.0}"#).unwrap();
        assert_eq!(config.max_distance, 5000.0);
        assert_eq!(config.distance_scale, DISTANCE_SCALE);
    }

    #[test]
    fn test_config_rejects_bad_values() {
        let err = EvaluationConfig::from_json(r#"{"speed_scale": -1.0}"#).unwrap_err();
        assert!(matches!(err, ScenarioError::InvalidConfig(_)));
        assert!(err.is_construction_error());

        let err = EvaluationConfig::from_json(r#"{"head_on_half_angle": 3.0}"#).unwrap_err();
        assert!(matches!(err, ScenarioError::InvalidConfig(_)));

        let err = EvaluationConfig::from_json("not json").unwrap_err();
        assert!(matches!(err, ScenarioError::InvalidConfig(_)));
    }

    #[test]
    fn test_error_messages() {
        let err = ScenarioError::LengthMismatch {
            expected: 10,
            actual: 9,
        };
        assert_eq!(
            err.to_string(),
            "decision vector length mismatch: expected 10, got 9"
        );
        assert!(!err.is_construction_error());
        assert_eq!(ScenarioError::UnknownActorId(4).to_string(), "unknown actor id: 4");
    }
}
