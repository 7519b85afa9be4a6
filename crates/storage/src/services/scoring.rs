use std::collections::HashMap;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use utoipa::ToSchema;

use crate::models::ScoringCriterion;

/// Weighted total for one judge's score sheet
///
/// total = Σ(value · weight) / Σ(weight), taken over criteria that exist in
/// the rubric and carry a non-zero value (0 means "not yet scored"). The
/// division by the sum of contributing weights normalizes rubrics whose
/// weights do not sum to 100. Rounded to one decimal place, halves to even
/// (a sheet totalling exactly 8.45 rounds to 8.4, not 8.5).
pub fn calculate_total_score(
    values: &HashMap<String, i32>,
    criteria: &[ScoringCriterion],
) -> Decimal {
    let mut weighted_sum = 0i64;
    let mut weight_sum = 0i64;

    for criterion in criteria {
        let Some(&value) = values.get(&criterion.name) else {
            continue;
        };
        if value == 0 {
            continue;
        }
        weighted_sum += i64::from(value) * i64::from(criterion.weight);
        weight_sum += i64::from(criterion.weight);
    }

    if weight_sum == 0 {
        return Decimal::ZERO;
    }

    (Decimal::from(weighted_sum) / Decimal::from(weight_sum))
        .round_dp_with_strategy(1, RoundingStrategy::MidpointNearestEven)
}

/// A single problem found while validating a score sheet against a rubric
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(tag = "code", rename_all = "snake_case")]
pub enum ValidationIssue {
    /// Required criterion has no value, or a value of 0 (the unscored
    /// sentinel). The effective valid range for a required criterion is
    /// (0, max_score] even when min_score is 0.
    MissingRequiredCriterion { criterion: String },
    /// Non-zero value outside the criterion's [min_score, max_score]
    OutOfRange {
        criterion: String,
        value: i32,
        min: i32,
        max: i32,
    },
    /// Value keyed by a name the rubric does not define
    UnknownCriterion { criterion: String },
}

#[derive(Debug, Clone, Default, Serialize, ToSchema)]
pub struct ValidationReport {
    pub issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Check a score sheet against its rubric
///
/// Advisory for draft saves, mandatory for final submission: the caller
/// decides whether a non-empty report blocks the write.
pub fn validate_score(
    values: &HashMap<String, i32>,
    criteria: &[ScoringCriterion],
) -> ValidationReport {
    let mut issues = Vec::new();

    for criterion in criteria {
        let value = values.get(&criterion.name).copied();

        if criterion.is_required && value.unwrap_or(0) == 0 {
            issues.push(ValidationIssue::MissingRequiredCriterion {
                criterion: criterion.name.clone(),
            });
            continue;
        }

        if let Some(value) = value {
            if value != 0 && (value < criterion.min_score || value > criterion.max_score) {
                issues.push(ValidationIssue::OutOfRange {
                    criterion: criterion.name.clone(),
                    value,
                    min: criterion.min_score,
                    max: criterion.max_score,
                });
            }
        }
    }

    let mut unknown: Vec<&String> = values
        .keys()
        .filter(|name| !criteria.iter().any(|c| &c.name == *name))
        .collect();
    unknown.sort();

    for name in unknown {
        issues.push(ValidationIssue::UnknownCriterion {
            criterion: name.clone(),
        });
    }

    ValidationReport { issues }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use uuid::Uuid;

    fn criterion(name: &str, weight: i32, required: bool) -> ScoringCriterion {
        ScoringCriterion {
            criterion_id: Uuid::new_v4(),
            hackathon_id: Uuid::nil(),
            name: name.to_string(),
            description: None,
            weight,
            min_score: 0,
            max_score: 10,
            is_required: required,
            display_order: 0,
            created_at: chrono::NaiveDateTime::default(),
        }
    }

    fn standard_rubric() -> Vec<ScoringCriterion> {
        vec![
            criterion("innovation", 30, true),
            criterion("technical", 25, true),
            criterion("design", 20, true),
            criterion("business", 15, false),
            criterion("presentation", 10, false),
        ]
    }

    fn values(pairs: &[(&str, i32)]) -> HashMap<String, i32> {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn weighted_total_over_full_rubric() {
        let v = values(&[
            ("innovation", 9),
            ("technical", 8),
            ("design", 8),
            ("business", 9),
            ("presentation", 8),
        ]);

        // (9*30 + 8*25 + 8*20 + 9*15 + 8*10) / 100
        assert_eq!(calculate_total_score(&v, &standard_rubric()), dec!(8.4));
    }

    #[test]
    fn partial_values_normalize_over_present_weights() {
        let v = values(&[("innovation", 9), ("technical", 8)]);

        // (9*30 + 8*25) / 55
        assert_eq!(calculate_total_score(&v, &standard_rubric()), dec!(8.5));
    }

    #[test]
    fn zero_values_are_unscored() {
        let v = values(&[("innovation", 0), ("technical", 0)]);
        assert_eq!(calculate_total_score(&v, &standard_rubric()), Decimal::ZERO);

        let v = values(&[("innovation", 0), ("technical", 8)]);
        assert_eq!(calculate_total_score(&v, &standard_rubric()), dec!(8.0));
    }

    #[test]
    fn empty_sheet_scores_zero() {
        assert_eq!(
            calculate_total_score(&HashMap::new(), &standard_rubric()),
            Decimal::ZERO
        );
    }

    #[test]
    fn keys_outside_rubric_do_not_contribute() {
        let v = values(&[("innovation", 9), ("vibes", 10)]);
        assert_eq!(calculate_total_score(&v, &standard_rubric()), dec!(9.0));
    }

    #[test]
    fn halves_round_to_even() {
        let rubric = vec![criterion("a", 75, true), criterion("b", 25, true)];
        let v = values(&[("a", 9), ("b", 6)]);

        // (9*75 + 6*25) / 100 = 8.25 -> 8.2
        assert_eq!(calculate_total_score(&v, &rubric), dec!(8.2));

        let rubric = vec![criterion("a", 55, true), criterion("b", 45, true)];
        let v = values(&[("a", 9), ("b", 8)]);

        // (9*55 + 8*45) / 100 = 8.55 -> 8.6
        assert_eq!(calculate_total_score(&v, &rubric), dec!(8.6));
    }

    #[test]
    fn missing_required_criterion_is_reported() {
        let v = values(&[("innovation", 9), ("technical", 8)]);
        let report = validate_score(&v, &standard_rubric());

        assert!(!report.is_valid());
        assert_eq!(
            report.issues,
            vec![ValidationIssue::MissingRequiredCriterion {
                criterion: "design".to_string()
            }]
        );
    }

    #[test]
    fn zero_counts_as_missing_for_required() {
        let v = values(&[("innovation", 9), ("technical", 8), ("design", 0)]);
        let report = validate_score(&v, &standard_rubric());

        assert_eq!(
            report.issues,
            vec![ValidationIssue::MissingRequiredCriterion {
                criterion: "design".to_string()
            }]
        );
    }

    #[test]
    fn optional_criteria_may_be_absent() {
        let v = values(&[("innovation", 9), ("technical", 8), ("design", 7)]);
        assert!(validate_score(&v, &standard_rubric()).is_valid());
    }

    #[test]
    fn out_of_range_value_is_reported() {
        let v = values(&[
            ("innovation", 9),
            ("technical", 8),
            ("design", 7),
            ("presentation", 11),
        ]);
        let report = validate_score(&v, &standard_rubric());

        assert_eq!(
            report.issues,
            vec![ValidationIssue::OutOfRange {
                criterion: "presentation".to_string(),
                value: 11,
                min: 0,
                max: 10,
            }]
        );
    }

    #[test]
    fn unknown_keys_are_reported() {
        let v = values(&[
            ("innovation", 9),
            ("technical", 8),
            ("design", 7),
            ("vibes", 5),
        ]);
        let report = validate_score(&v, &standard_rubric());

        assert_eq!(
            report.issues,
            vec![ValidationIssue::UnknownCriterion {
                criterion: "vibes".to_string()
            }]
        );
    }

    #[test]
    fn report_collects_every_issue() {
        let v = values(&[("technical", 12), ("vibes", 5)]);
        let report = validate_score(&v, &standard_rubric());

        assert_eq!(report.issues.len(), 4);
        assert!(report.issues.iter().any(|i| matches!(
            i,
            ValidationIssue::OutOfRange { criterion, .. } if criterion == "technical"
        )));
    }
}
