pub use sea_orm_migration::prelude::*;

mod m20260301_000001_create_user_table;
mod m20260301_000002_create_job_table;
mod m20260301_000003_create_job_application_table;
mod m20260301_000004_create_document_table;
mod m20260301_000005_create_interview_table;
mod m20260301_000006_create_notification_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_user_table::Migration),
            Box::new(m20260301_000002_create_job_table::Migration),
            Box::new(m20260301_000003_create_job_application_table::Migration),
            Box::new(m20260301_000004_create_document_table::Migration),
            Box::new(m20260301_000005_create_interview_table::Migration),
            Box::new(m20260301_000006_create_notification_table::Migration),
        ]
    }
}
