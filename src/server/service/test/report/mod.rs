use crate::server::{
    error::AppError,
    model::report::{DateRange, ExportKind},
    service::report::ReportService,
};
use test_utils::{builder::TestBuilder, factory};

mod aggregates;
