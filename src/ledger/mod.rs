//! Budget record model and its period type.

pub mod budget;
pub mod record;

pub use budget::BudgetPeriod;
pub use record::BudgetRecord;
