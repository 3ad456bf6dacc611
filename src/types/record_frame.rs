//! Contains the `LakeRecordFrame` structure for lazy operations on the lake
//! record set: the rows behind the tabular display and the CSV export.

use crate::error::LakewatchError;
use crate::filtering::LakeFrameFilterExt;
use crate::types::lake::LakeId;
use polars::prelude::{CsvWriter, DataFrame, Expr, LazyFrame, SerWriter};
use std::fs::File;
use std::path::Path;

/// A wrapper around a Polars `LazyFrame` of lake table rows.
///
/// Narrowing helpers return a new frame and leave the original untouched, so
/// a sidebar can stack state, district and lake filters in any order. Exported
/// CSV always reflects raw cell values; fill policies apply to charted series
/// only, never to the export.
#[derive(Clone)]
pub struct LakeRecordFrame {
    /// The underlying Polars LazyFrame containing the lake records.
    pub frame: LazyFrame,
}

impl LakeRecordFrame {
    pub fn new(frame: LazyFrame) -> Self {
        Self { frame }
    }

    /// Applies an arbitrary Polars predicate, for callers that need more than
    /// the tailored helpers below.
    pub fn filter(&self, predicate: Expr) -> LakeRecordFrame {
        LakeRecordFrame::new(self.frame.clone().filter(predicate))
    }

    /// Narrows to rows of one administrative state.
    pub fn with_state(&self, state: &str) -> LakeRecordFrame {
        LakeRecordFrame::new(self.frame.clone().filter_state(state))
    }

    /// Narrows to rows of one administrative district.
    pub fn with_district(&self, district: &str) -> LakeRecordFrame {
        LakeRecordFrame::new(self.frame.clone().filter_district(district))
    }

    /// Narrows to the rows of one lake.
    pub fn with_lake(&self, lake: &LakeId) -> LakeRecordFrame {
        LakeRecordFrame::new(self.frame.clone().filter_lake(lake))
    }

    /// Materializes the record set for tabular display.
    pub fn collect(&self) -> Result<DataFrame, LakewatchError> {
        Ok(self.frame.clone().collect()?)
    }

    /// Writes the record set to `path` as CSV, a verbatim dump of the matching
    /// rows with headers.
    pub fn write_csv(&self, path: &Path) -> Result<(), LakewatchError> {
        let mut df = self.frame.clone().collect()?;
        let file = File::create(path)
            .map_err(|e| LakewatchError::CsvExportIo(path.to_path_buf(), e))?;
        CsvWriter::new(file)
            .include_header(true)
            .finish(&mut df)
            .map_err(LakewatchError::from)
    }
}
