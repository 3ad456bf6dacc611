use crate::table::schema::{DISTRICT_COL, LAKE_ID_COL, STATE_COL};
use crate::types::lake::LakeId;
use polars::prelude::{col, lit, LazyFrame};

/// Equality filters on the classification and identifier columns of a lake
/// table `LazyFrame`. The dropdown, sidebar and map-click paths all narrow the
/// record set through these.
pub trait LakeFrameFilterExt {
    /// Keeps rows whose `STATE` column equals `state`.
    fn filter_state(self, state: &str) -> LazyFrame;

    /// Keeps rows whose `District` column equals `district`.
    fn filter_district(self, district: &str) -> LazyFrame;

    /// Keeps rows whose `Lake_id` column equals `lake`.
    fn filter_lake(self, lake: &LakeId) -> LazyFrame;
}

impl LakeFrameFilterExt for LazyFrame {
    fn filter_state(self, state: &str) -> LazyFrame {
        self.filter(col(STATE_COL).eq(lit(state.to_string())))
    }

    fn filter_district(self, district: &str) -> LazyFrame {
        self.filter(col(DISTRICT_COL).eq(lit(district.to_string())))
    }

    fn filter_lake(self, lake: &LakeId) -> LazyFrame {
        match lake {
            LakeId::Int(v) => self.filter(col(LAKE_ID_COL).eq(lit(*v))),
            LakeId::Name(s) => self.filter(col(LAKE_ID_COL).eq(lit(s.clone()))),
        }
    }
}
