use crate::table::error::TableError;
use crate::table::LakeTable;
use log::info;
use polars::prelude::{CsvReadOptions, SerReader};
use std::fs::File;
use std::path::Path;

/// Reads a delimited lake table from disk and normalizes it.
///
/// The file must have a header row; see [`LakeTable::from_dataframe`] for the
/// normalization applied afterwards.
pub(crate) fn load_csv(path: &Path) -> Result<LakeTable, TableError> {
    let file = File::open(path).map_err(|e| TableError::CsvReadIo(path.to_path_buf(), e))?;

    let df = CsvReadOptions::default()
        .with_has_header(true)
        .into_reader_with_file_handle(file)
        .finish()
        .map_err(|e| TableError::CsvReadPolars(path.to_path_buf(), e))?;

    info!(
        "Loaded {} rows x {} columns from {}",
        df.height(),
        df.width(),
        path.display()
    );
    LakeTable::from_dataframe(df)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::lake::LakeId;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_fixture(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn loads_csv_with_padded_headers() {
        let file = write_fixture(
            " Lake_id ,Lat,Lon, 1990_01 ,1990_02\n\
             1,9.5,76.3,12.5,13.0\n\
             2,10.1,77.0,,14.5\n",
        );
        let table = load_csv(file.path()).unwrap();
        assert_eq!(table.height(), 2);
        assert_eq!(table.months().len(), 2);
        assert_eq!(table.row_of(&LakeId::Int(2)), Some(1));
        assert_eq!(table.cell_f64("1990_01", 1).unwrap(), None);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load_csv(Path::new("/definitely/not/here.csv")).unwrap_err();
        assert!(matches!(err, TableError::CsvReadIo(_, _)));
    }

    #[test]
    fn table_without_lake_id_column_fails() {
        let file = write_fixture("Name,Lat,Lon\nfoo,9.5,76.3\n");
        let err = load_csv(file.path()).unwrap_err();
        assert!(matches!(err, TableError::MissingColumn(name) if name == "Lake_id"));
    }
}
