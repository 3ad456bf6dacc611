pub mod season_client;
pub mod series_client;
