pub use super::document::Entity as Document;
pub use super::interview::Entity as Interview;
pub use super::job::Entity as Job;
pub use super::job_application::Entity as JobApplication;
pub use super::notification::Entity as Notification;
pub use super::user::Entity as User;
