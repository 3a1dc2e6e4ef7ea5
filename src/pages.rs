//! Page generation modules for different view types
//!
//! This module organizes HTML page generators by page type. The leaderboard
//! page serves both the site index and every snapshot page; the details page
//! shows one participant's document. Both build on the shared components.

pub mod details;
pub mod leaderboard;
