/// Batch conversion module
///
/// This module handles:
/// - The ordered source -> target table of brand logos (mapping.rs)
/// - Walking that table and deciding skip / convert per entry (driver.rs)
/// - Console progress and the final summary (report.rs)

pub mod mapping;
pub mod driver;
pub mod report;
