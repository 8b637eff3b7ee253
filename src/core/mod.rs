pub mod deviation;
pub mod ledger;
pub mod report;
