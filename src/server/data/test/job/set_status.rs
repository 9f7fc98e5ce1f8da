use super::*;
use crate::server::model::job::JobTimestamps;

/// Tests writing a status with its timestamps.
///
/// Expected: Ok with status and both timestamps stored as given
#[tokio::test]
async fn stores_status_and_timestamps() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_application_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_hr, job) = factory::helpers::create_published_job(db).await?;
    let now = Utc::now();

    let repo = JobRepository::new(db);
    let closed = repo
        .set_status(
            job.id,
            JobStatus::Closed,
            JobTimestamps {
                published_at: job.published_at,
                closed_at: Some(now),
            },
        )
        .await?;

    assert_eq!(closed.status, JobStatus::Closed);
    assert_eq!(closed.published_at, job.published_at);
    assert_eq!(closed.closed_at, Some(now));
    assert_eq!(repo.count_by_status(JobStatus::Closed).await?, 1);
    assert_eq!(repo.count_by_status(JobStatus::Published).await?, 0);

    Ok(())
}
