use crate::server::model::user::User;

mod application;
mod auth;
mod document;
mod interview;
mod job;
mod notification;
mod report;

/// Converts a factory-built user row into the domain user services act on.
fn as_user(model: entity::user::Model) -> User {
    User::from_entity(model).unwrap()
}
