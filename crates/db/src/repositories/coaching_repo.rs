//! Read-side query feeding the coaching aggregator.
//!
//! Fetches every referent-evaluated evaluation of a coach's coachees in one
//! join; the score math happens in `talentflow_core::coaching` on the way
//! out, never in SQL, so the classification rules live in exactly one
//! place.

use sqlx::PgPool;
use talentflow_core::types::DbId;

use crate::models::coaching::CoachingCandidate;

pub struct CoachingRepo;

impl CoachingRepo {
    /// List all completed evaluations across the coach's coachees.
    ///
    /// Includes every evaluation whose referent evaluation exists
    /// (`evaluatedByReferent` and the terminal states after it).
    pub async fn list_candidates(
        pool: &PgPool,
        coach_id: DbId,
    ) -> Result<Vec<CoachingCandidate>, sqlx::Error> {
        sqlx::query_as::<_, CoachingCandidate>(
            "SELECT \
                e.id AS evaluation_id, \
                e.status, \
                e.self_entries, \
                e.referent_entries, \
                e.referent_submitted_at, \
                os.id AS objective_set_id, \
                os.objectives, \
                emp.id AS employee_id, \
                emp.display_name AS employee_name, \
                p.id AS project_id, \
                p.name AS project_name \
             FROM evaluations e \
             JOIN objective_sets os ON os.id = e.objective_set_id \
             JOIN assignments a ON a.id = os.assignment_id \
             JOIN users emp ON emp.id = a.employee_id \
             JOIN projects p ON p.id = a.project_id \
             WHERE emp.coach_id = $1 \
               AND e.status IN ('evaluatedByReferent', 'finalized', 'rejected') \
             ORDER BY emp.display_name, emp.id, e.referent_submitted_at DESC",
        )
        .bind(coach_id)
        .fetch_all(pool)
        .await
    }
}
