//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the campaign form, table, and tab strip. Each owns its
//! view state in a local signal; only the tab/reload state comes from context.

pub mod campaign_form;
pub mod campaign_list;
pub mod campaign_row;
pub mod tab_bar;
