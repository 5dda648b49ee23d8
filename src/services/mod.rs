//! Service layer for fintrack
//!
//! The pure engine stages (normalize, merge, filter) plus the services that
//! manage budgets, templates and recorded entries on top of storage.

pub mod budget;
pub mod filter;
pub mod ledger;
pub mod normalize;
pub mod record;
pub mod template;

pub use budget::BudgetService;
pub use filter::{filter_ledger, FilterState, TypeFilter};
pub use ledger::{load_ledger, merge_ledger, merge_normalized, restrict_to_period, LedgerSource, LedgerView};
pub use normalize::{normalize, normalize_expenses, normalize_income};
pub use record::RecordService;
pub use template::TemplateService;
