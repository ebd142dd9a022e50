//! Assignment validation against employee restrictions.
//!
//! [`TagDeriver`] turns an employee note into [`RestrictionTag`]s and
//! [`ConstraintValidator`] applies the restriction rules to the slot the
//! rotation resolves for a (group, date).
//!
//! [`RestrictionTag`]: crate::models::RestrictionTag

mod tags;
mod validator;

pub use tags::{KeywordTagDeriver, TagDeriver};
pub use validator::ConstraintValidator;
