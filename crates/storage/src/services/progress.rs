use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use sqlx::PgPool;
use utoipa::ToSchema;

use crate::error::Result;
use crate::models::JudgeAssignment;
use crate::repository::score::ScoreRepository;

/// Completion metrics for one judge's assignment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct JudgeProgress {
    pub total: i64,
    pub completed: i64,
    pub pending: i64,
    pub completion_rate: Decimal,
}

/// Derive progress from an assignment size and a count of final scores.
/// An empty assignment reports a rate of 0, never a division fault.
pub fn progress_from_counts(total: i64, completed: i64) -> JudgeProgress {
    let completed = completed.min(total);
    let completion_rate = if total == 0 {
        Decimal::ZERO
    } else {
        (Decimal::from(completed * 100) / Decimal::from(total))
            .round_dp_with_strategy(1, RoundingStrategy::MidpointNearestEven)
    };

    JudgeProgress {
        total,
        completed,
        pending: total - completed,
        completion_rate,
    }
}

/// Count final scores among the assignment's projects and derive progress.
/// Called on every assignment read, so a final upsert is reflected on the
/// next fetch without any stored counter.
pub async fn progress_for_assignment(
    pool: &PgPool,
    assignment: &JudgeAssignment,
) -> Result<JudgeProgress> {
    let completed = ScoreRepository::new(pool)
        .count_final_for_projects(assignment.judge_id, &assignment.project_ids)
        .await?;

    Ok(progress_from_counts(
        assignment.project_ids.len() as i64,
        completed,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn three_of_five_complete() {
        let progress = progress_from_counts(5, 3);

        assert_eq!(progress.total, 5);
        assert_eq!(progress.completed, 3);
        assert_eq!(progress.pending, 2);
        assert_eq!(progress.completion_rate, dec!(60.0));
    }

    #[test]
    fn empty_assignment_has_zero_rate() {
        let progress = progress_from_counts(0, 0);

        assert_eq!(progress.pending, 0);
        assert_eq!(progress.completion_rate, Decimal::ZERO);
    }

    #[test]
    fn fully_scored_assignment() {
        let progress = progress_from_counts(4, 4);

        assert_eq!(progress.pending, 0);
        assert_eq!(progress.completion_rate, dec!(100.0));
    }

    #[test]
    fn rate_rounds_to_one_decimal() {
        // 1/3 -> 33.333... -> 33.3
        assert_eq!(progress_from_counts(3, 1).completion_rate, dec!(33.3));
    }

    #[test]
    fn completed_is_clamped_to_total() {
        // stale score rows for projects removed from an assignment
        let progress = progress_from_counts(2, 3);

        assert_eq!(progress.completed, 2);
        assert_eq!(progress.pending, 0);
    }
}
