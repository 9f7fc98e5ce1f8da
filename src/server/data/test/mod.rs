mod interview;
mod job;
mod notification;
mod report;
mod user;
