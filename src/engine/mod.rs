//! Order validation and labor requirement engine
//!
//! Pure rule-evaluation logic: given a property's configured rooms,
//! inventory, and labor rules (read-only inputs), determine whether a
//! proposed event order can be fulfilled and what labor it requires.
//! All functions here are side-effect free; data loading lives in the
//! service layer.

pub mod inventory;
pub mod labor;
pub mod rooms;
pub mod rules;
pub mod validator;

pub use inventory::{EquipmentRequest, ItemCheckResult};
pub use labor::LaborPlan;
pub use rooms::CompatibilityResult;
pub use rules::RuleSpec;
pub use validator::ValidationReport;
