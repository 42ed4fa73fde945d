//! Optimizer CSV reader.

use super::{Point, PointSet};
use crate::error::{FrontPlotError, Result};
use std::fs::File;
use std::io::{BufReader, ErrorKind, Read};
use std::path::Path;

/// Header of the first objective column.
pub const F1_COLUMN: &str = "f1";
/// Header of the second objective column.
pub const F2_COLUMN: &str = "f2";

/// Reader for `f1,f2` objective tables.
#[derive(Debug)]
pub struct CsvReader;

impl CsvReader {
    /// Read a CSV file into a point set.
    ///
    /// Loading is all-or-nothing: the first bad row aborts the read.
    pub fn read_file(path: &Path) -> Result<PointSet> {
        let file = File::open(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => FrontPlotError::NotFound {
                path: path.to_path_buf(),
            },
            _ => FrontPlotError::io(path, e),
        })?;

        let points = Self::read(BufReader::new(file), path)?;
        tracing::info!("Loaded {} points from {}", points.len(), path.display());

        Ok(points)
    }

    /// Read CSV content from any reader. `source` only names the input in errors.
    pub fn read<R: Read>(reader: BufReader<R>, source: &Path) -> Result<PointSet> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(reader);

        let headers = reader.headers()?.clone();
        let column_index = |name: &str| {
            headers
                .iter()
                .position(|header| header == name)
                .ok_or_else(|| FrontPlotError::schema(source, name))
        };
        let f1_idx = column_index(F1_COLUMN)?;
        let f2_idx = column_index(F2_COLUMN)?;

        let mut points = PointSet::new();
        for (idx, record) in reader.records().enumerate() {
            let record = record?;
            let row = idx + 1;

            let f1 = parse_cell(&record, f1_idx, row, F1_COLUMN)?;
            let f2 = parse_cell(&record, f2_idx, row, F2_COLUMN)?;
            points.push(Point::new(f1, f2));
        }

        Ok(points)
    }
}

fn parse_cell(record: &csv::StringRecord, idx: usize, row: usize, column: &str) -> Result<f64> {
    let cell = record.get(idx).unwrap_or("");

    match cell.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(FrontPlotError::parse(row, column, cell)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read_str(content: &str) -> Result<PointSet> {
        CsvReader::read(BufReader::new(content.as_bytes()), Path::new("test.csv"))
    }

    #[test]
    fn can_read_points_in_order() {
        let csv = "f1,f2\n0.1,3.9\n1.0,2.0\n3.9,0.1\n";

        let points = read_str(csv).unwrap();

        assert_eq!(points.len(), 3);
        assert_eq!(points.as_slice()[0], Point::new(0.1, 3.9));
        assert_eq!(points.as_slice()[2], Point::new(3.9, 0.1));
    }

    #[test]
    fn can_read_header_only_file() {
        let points = read_str("f1,f2\n").unwrap();

        assert!(points.is_empty());
    }

    #[test]
    fn ignores_extra_columns_and_column_order() {
        let csv = "id,f2,rank,f1\na,2.5,1,0.5\nb,1.5,1,1.25\n";

        let points = read_str(csv).unwrap();

        assert_eq!(
            points.as_slice(),
            &[Point::new(0.5, 2.5), Point::new(1.25, 1.5)]
        );
    }

    #[test]
    fn can_read_optimizer_precision_with_padding() {
        let csv = "f1, f2\n 0.0000000000 , 4.0000000000\n";

        let points = read_str(csv).unwrap();

        assert_eq!(points.as_slice(), &[Point::new(0.0, 4.0)]);
    }

    #[test]
    fn fails_with_schema_error_on_missing_column() {
        let result = read_str("f1,g2\n1.0,2.0\n");

        match result {
            Err(FrontPlotError::Schema { column, .. }) => assert_eq!(column, "f2"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn column_match_is_case_sensitive() {
        let result = read_str("F1,f2\n1.0,2.0\n");

        assert!(matches!(result, Err(FrontPlotError::Schema { column, .. }) if column == "f1"));
    }

    #[test]
    fn fails_with_parse_error_naming_row_and_column() {
        let csv = "f1,f2\n1.0,2.0\nabc,1.0\n";

        match read_str(csv) {
            Err(FrontPlotError::Parse { row, column, value }) => {
                assert_eq!(row, 2);
                assert_eq!(column, "f1");
                assert_eq!(value, "abc");
            },
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn rejects_empty_missing_and_non_finite_cells() {
        for csv in ["f1,f2\n1.0,\n", "f1,f2\n1.0\n", "f1,f2\ninf,1.0\n", "f1,f2\n1.0,NaN\n"] {
            assert!(
                matches!(read_str(csv), Err(FrontPlotError::Parse { row: 1, .. })),
                "accepted: {csv:?}"
            );
        }
    }

    #[test]
    fn fails_with_not_found_on_missing_file() {
        let result = CsvReader::read_file(Path::new("definitely/not/here.csv"));

        assert!(matches!(result, Err(FrontPlotError::NotFound { .. })));
    }
}
