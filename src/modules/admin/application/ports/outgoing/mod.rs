pub mod admin_stats_query;

pub use admin_stats_query::{AdminStats, AdminStatsQuery, AdminStatsQueryError};
