mod atlas;
mod clients;
mod error;
mod filtering;
mod lakes;
mod series;
mod table;
mod types;

pub use error::LakewatchError;

pub use atlas::{LakeAtlas, LatLon};

pub use clients::season_client::SeasonClient;
pub use clients::series_client::SeriesClient;

pub use filtering::LakeFrameFilterExt;

pub use lakes::locate_lake::{LakeFilter, LakeLocator};

pub use series::extract::{MonthlySeries, SeriesPoint};
pub use series::fill::FillPolicy;

pub use table::error::TableError;
pub use table::LakeTable;

pub use types::lake::{Lake, LakeId};
pub use types::month_key::{MonthColumn, MonthKey, YearRange};
pub use types::record_frame::LakeRecordFrame;
pub use types::season::{season_column_name, SeasonLabel, SeasonMetric, SeasonValue};
