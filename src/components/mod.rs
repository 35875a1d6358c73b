//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render form and dashboard chrome while the pages own
//! route-scoped orchestration and state wiring.

pub mod form_field;
pub mod stat_card;
