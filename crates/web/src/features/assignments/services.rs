use std::collections::HashMap;

use sqlx::PgPool;
use storage::{
    dto::assignment::{
        AssignedProject, AssignmentResponse, AssignmentSummary, HackathonInfo, ProjectScoreStatus,
    },
    error::Result,
    models::{Hackathon, JudgeAssignment},
    repository::{
        assignment::AssignmentRepository, hackathon::HackathonRepository,
        project::ProjectRepository, score::ScoreRepository,
    },
    services::progress::{self, JudgeProgress},
};
use uuid::Uuid;

fn hackathon_info(hackathon: Hackathon) -> HackathonInfo {
    HackathonInfo {
        hackathon_id: hackathon.hackathon_id,
        title: hackathon.title,
        status: hackathon.status,
    }
}

/// All of a judge's assignments with per-hackathon progress
pub async fn list_assignments(pool: &PgPool, judge_id: Uuid) -> Result<Vec<AssignmentSummary>> {
    let assignments = AssignmentRepository::new(pool).list_for_judge(judge_id).await?;
    let hackathon_repo = HackathonRepository::new(pool);

    let mut summaries = Vec::with_capacity(assignments.len());
    for assignment in assignments {
        let hackathon = hackathon_repo.find_by_id(assignment.hackathon_id).await?;
        let progress = progress::progress_for_assignment(pool, &assignment).await?;

        summaries.push(AssignmentSummary {
            assignment_id: assignment.assignment_id,
            hackathon: hackathon_info(hackathon),
            role: assignment.role,
            project_ids: assignment.project_ids,
            progress,
        });
    }

    Ok(summaries)
}

/// One assignment, expanded with project titles and per-project score
/// status from this judge's point of view
pub async fn get_assignment(
    pool: &PgPool,
    hackathon_id: Uuid,
    judge_id: Uuid,
) -> Result<AssignmentResponse> {
    let assignment = AssignmentRepository::new(pool)
        .find_for_judge(hackathon_id, judge_id)
        .await?;
    let hackathon = HackathonRepository::new(pool).find_by_id(hackathon_id).await?;

    let projects = ProjectRepository::new(pool)
        .find_by_ids(&assignment.project_ids)
        .await?;
    let scores = ScoreRepository::new(pool)
        .list_for_judge_in(judge_id, &assignment.project_ids)
        .await?;

    // project_id -> is_draft for this judge's existing records
    let score_states: HashMap<Uuid, bool> = scores
        .into_iter()
        .map(|s| (s.project_id, s.is_draft))
        .collect();

    let projects = projects
        .into_iter()
        .map(|p| {
            let state = score_states.get(&p.project_id).copied();
            AssignedProject {
                project_id: p.project_id,
                title: p.title,
                description: p.description,
                status: match state {
                    Some(false) => ProjectScoreStatus::Scored,
                    _ => ProjectScoreStatus::Pending,
                },
                has_draft: state == Some(true),
            }
        })
        .collect();

    let progress = progress::progress_for_assignment(pool, &assignment).await?;

    Ok(AssignmentResponse {
        assignment_id: assignment.assignment_id,
        hackathon: hackathon_info(hackathon),
        judge_id: assignment.judge_id,
        role: assignment.role,
        projects,
        progress,
    })
}

/// Completion metrics only, for the lightweight progress poll
pub async fn get_progress(
    pool: &PgPool,
    hackathon_id: Uuid,
    judge_id: Uuid,
) -> Result<JudgeProgress> {
    let assignment: JudgeAssignment = AssignmentRepository::new(pool)
        .find_for_judge(hackathon_id, judge_id)
        .await?;

    progress::progress_for_assignment(pool, &assignment).await
}
