/// Use cases module containing application business logic orchestration
mod generate_report;

pub use generate_report::{GenerateReportUseCase, COLUMN_HEADERS};
