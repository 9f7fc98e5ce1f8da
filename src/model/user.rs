use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

string_enum! {
    /// Access role held by a user account.
    pub enum Role {
        SuperAdmin => "super_admin",
        HrAdmin => "hr_admin",
        HrManager => "hr_manager",
        Recruiter => "recruiter",
        Interviewer => "interviewer",
        Applicant => "applicant",
    }
}

impl Role {
    /// Roles allowed to manage jobs, review applications and documents, and read reports.
    pub fn is_hr_staff(self) -> bool {
        matches!(
            self,
            Role::SuperAdmin | Role::HrAdmin | Role::HrManager | Role::Recruiter
        )
    }

    /// Roles allowed to delete other users' documents and broadcast notifications.
    pub fn is_hr_management(self) -> bool {
        matches!(self, Role::SuperAdmin | Role::HrAdmin | Role::HrManager)
    }

    pub fn can_schedule_interviews(self) -> bool {
        self.is_hr_staff() || self == Role::Interviewer
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: i32,
    pub email: String,
    pub full_name: Option<String>,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}
