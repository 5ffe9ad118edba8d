pub mod bands;
pub mod criteria;
pub mod result;
pub mod selection;

pub use bands::{Bound, CategoryBand};
pub use criteria::{CriterionDefinition, CriterionGroup};
pub use result::ScoreResult;
pub use selection::SelectionSet;
