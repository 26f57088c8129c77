pub mod table_query;
pub mod postgrest_utils;
pub mod fixture_tables;
pub mod data_source;
