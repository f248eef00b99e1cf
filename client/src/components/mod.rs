//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Leaf widgets (`button`, `image`) carry no state of their own. Widgets that
//! do hold state (`filter_control`, `collapsible_list`) create it locally on
//! mount, so two instances never share a selection.

pub mod button;
pub mod collapsible_list;
pub mod filter_control;
pub mod image;
pub mod left_panel;
pub mod nav_panel;
pub mod profile_card;
pub mod right_panel;
