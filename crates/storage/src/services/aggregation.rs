use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use sqlx::PgPool;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::error::Result;
use crate::repository::criteria::CriteriaRepository;
use crate::repository::score::ScoreRepository;
use crate::services::scoring::calculate_total_score;

/// Project-level score across all judges who submitted a final score
///
/// `average_score` is `None` when no final score exists yet. Callers must
/// keep that distinct from an average of 0.0.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ProjectAggregate {
    pub project_id: Uuid,
    pub average_score: Option<Decimal>,
    pub final_score_count: i64,
}

/// Arithmetic mean of per-judge totals, one decimal, halves to even
pub fn project_average(totals: &[Decimal]) -> Option<Decimal> {
    if totals.is_empty() {
        return None;
    }

    let sum: Decimal = totals.iter().copied().sum();
    Some(
        (sum / Decimal::from(totals.len() as i64))
            .round_dp_with_strategy(1, RoundingStrategy::MidpointNearestEven),
    )
}

/// Recompute a project's cross-judge aggregate from persisted final scores
///
/// Draft scores never contribute. Each judge's total is rederived from the
/// stored criterion values and the current rubric rather than trusting the
/// cached `total_score` column.
pub async fn aggregate_project(pool: &PgPool, project_id: Uuid) -> Result<ProjectAggregate> {
    let finals = ScoreRepository::new(pool)
        .list_final_for_project(project_id)
        .await?;

    let Some(first) = finals.first() else {
        return Ok(ProjectAggregate {
            project_id,
            average_score: None,
            final_score_count: 0,
        });
    };

    let rubric = CriteriaRepository::new(pool)
        .get_rubric(first.hackathon_id)
        .await?;

    let totals: Vec<Decimal> = finals
        .iter()
        .map(|score| calculate_total_score(score.values(), &rubric))
        .collect();

    Ok(ProjectAggregate {
        project_id,
        average_score: project_average(&totals),
        final_score_count: totals.len() as i64,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn no_final_scores_means_no_data() {
        assert_eq!(project_average(&[]), None);
    }

    #[test]
    fn single_final_score_is_the_aggregate() {
        assert_eq!(project_average(&[dec!(8.0)]), Some(dec!(8.0)));
    }

    #[test]
    fn mean_across_judges() {
        assert_eq!(
            project_average(&[dec!(8.0), dec!(7.0), dec!(9.5)]),
            Some(dec!(8.2))
        );
    }

    #[test]
    fn mean_rounds_halves_to_even() {
        // (8.2 + 8.3) / 2 = 8.25 -> 8.2
        assert_eq!(project_average(&[dec!(8.2), dec!(8.3)]), Some(dec!(8.2)));
    }

    #[test]
    fn zero_average_is_not_no_data() {
        assert_eq!(project_average(&[dec!(0.0)]), Some(dec!(0.0)));
    }
}
