pub mod lake;
pub mod month_key;
pub mod record_frame;
pub mod season;
