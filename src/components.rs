//! Reusable HTML components for page generation
//!
//! This module provides Maud component functions shared by the leaderboard
//! and detail pages. Components take plain data and a root prefix, so the
//! same markup works at every directory depth of the generated site.

pub mod footer;
pub mod layout;
pub mod podium;
pub mod snapshot_nav;
pub mod standings_table;
