pub mod admin_stats_query_postgres;

pub use admin_stats_query_postgres::AdminStatsQueryPostgres;
