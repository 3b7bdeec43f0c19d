//! CSV persistence for rectangular numeric arrays
//!
//! Plain comma-delimited text, one array row per line, no header. The
//! format round-trips: anything written by [`save_to_csv`] loads back with
//! [`load_from_csv`] (or [`load_from_csv_split`] when features and targets
//! are stored side by side in one file).
//!
//! # Quick Examples
//!
//! ```rust,ignore
//! use nalgebra::DMatrix;
//! use pinnprep_rs::io::{save_to_csv, load_from_csv_split};
//!
//! let table = DMatrix::from_row_slice(2, 3, &[0.0, 0.0, 1.5, 1.0, 0.0, 2.5]);
//!
//! // ".csv" is appended automatically
//! let path = save_to_csv(&table, "boundary_data")?;
//!
//! // Last column is the target, the rest are coordinates
//! let (x, y) = load_from_csv_split(path.to_str().unwrap(), 1)?;
//! assert_eq!(x.ncols(), 2);
//! assert_eq!(y.ncols(), 1);
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::PathBuf;

use nalgebra::DMatrix;

use crate::error::PrepError;

/// Save a rectangular array as comma-delimited text
///
/// Appends a `.csv` suffix when `name_of_file` does not already end with
/// one, and returns the path actually written.
///
/// # Errors
///
/// - [`PrepError::EmptyArray`]: the matrix has no rows or no columns
/// - [`PrepError::Io`]: file creation or write failure
pub fn save_to_csv(array: &DMatrix<f64>, name_of_file: &str) -> Result<PathBuf, PrepError> {
    if array.nrows() == 0 || array.ncols() == 0 {
        return Err(PrepError::EmptyArray);
    }

    let path = if name_of_file.ends_with(".csv") {
        PathBuf::from(name_of_file)
    } else {
        PathBuf::from(format!("{}.csv", name_of_file))
    };

    let mut writer = BufWriter::new(File::create(&path)?);
    for row in 0..array.nrows() {
        let line = (0..array.ncols())
            .map(|col| array[(row, col)].to_string())
            .collect::<Vec<_>>()
            .join(",");
        writeln!(writer, "{}", line)?;
    }
    writer.flush()?;

    Ok(path)
}

/// Load a comma-delimited numeric file into a rectangular array
///
/// Blank lines are skipped. Compatible with [`save_to_csv`].
///
/// # Errors
///
/// - [`PrepError::InvalidExtension`]: the path does not end in `.csv`
/// - [`PrepError::EmptyArray`]: the file holds no data rows
/// - [`PrepError::MalformedCsv`]: a non-numeric field or a ragged line
/// - [`PrepError::Io`]: file open or read failure
pub fn load_from_csv(path_to_csv_file: &str) -> Result<DMatrix<f64>, PrepError> {
    if !path_to_csv_file.ends_with(".csv") {
        return Err(PrepError::InvalidExtension(path_to_csv_file.to_string()));
    }

    let reader = BufReader::new(File::open(path_to_csv_file)?);

    let mut values: Vec<f64> = Vec::new();
    let mut num_cols: Option<usize> = None;
    let mut num_rows = 0;

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let fields: Vec<&str> = trimmed.split(',').collect();
        match num_cols {
            None => num_cols = Some(fields.len()),
            Some(expected) if fields.len() != expected => {
                return Err(PrepError::MalformedCsv {
                    line: index + 1,
                    message: format!("{} fields, expected {}", fields.len(), expected),
                });
            }
            Some(_) => {}
        }

        for field in fields {
            let value = field.trim().parse::<f64>().map_err(|source| {
                PrepError::MalformedCsv {
                    line: index + 1,
                    message: format!("cannot parse \"{}\" as a number: {}", field, source),
                }
            })?;
            values.push(value);
        }
        num_rows += 1;
    }

    let num_cols = num_cols.ok_or(PrepError::EmptyArray)?;
    Ok(DMatrix::from_row_slice(num_rows, num_cols, &values))
}

/// Load a combined X/Y file and split the columns
///
/// Combined mode of [`load_from_csv`]: each row is split into
/// (all-but-last-`y_dim` columns, last-`y_dim` columns), returned as
/// `(x, y)`.
///
/// # Errors
///
/// Everything [`load_from_csv`] raises, plus [`PrepError::MalformedCsv`]
/// when `y_dim` is zero or leaves no feature columns.
pub fn load_from_csv_split(
    path_to_csv_file: &str,
    y_dim: usize,
) -> Result<(DMatrix<f64>, DMatrix<f64>), PrepError> {
    let combined = load_from_csv(path_to_csv_file)?;

    if y_dim == 0 || y_dim >= combined.ncols() {
        return Err(PrepError::MalformedCsv {
            line: 0,
            message: format!(
                "cannot split {} columns into features plus {} target columns",
                combined.ncols(),
                y_dim
            ),
        });
    }

    let x_dim = combined.ncols() - y_dim;
    let x = combined.columns(0, x_dim).into_owned();
    let y = combined.columns(x_dim, y_dim).into_owned();
    Ok((x, y))
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::io::Write as _;
    use tempfile::TempDir;

    fn csv_path(dir: &TempDir, name: &str) -> String {
        dir.path().join(name).to_str().unwrap().to_string()
    }

    #[test]
    fn test_save_appends_csv_suffix() {
        let dir = TempDir::new().unwrap();
        let array = DMatrix::from_row_slice(1, 2, &[1.0, 2.0]);

        let path = save_to_csv(&array, &csv_path(&dir, "points")).unwrap();
        assert!(path.to_str().unwrap().ends_with("points.csv"));
        assert!(path.exists());

        let path = save_to_csv(&array, &csv_path(&dir, "points.csv")).unwrap();
        assert!(path.to_str().unwrap().ends_with("points.csv"));
    }

    #[test]
    fn test_save_rejects_empty_array() {
        let array = DMatrix::<f64>::zeros(0, 3);
        assert!(matches!(
            save_to_csv(&array, "nowhere"),
            Err(PrepError::EmptyArray)
        ));
    }

    #[test]
    fn test_round_trip() {
        let dir = TempDir::new().unwrap();
        let array = DMatrix::from_row_slice(3, 2, &[0.0, 1.5, -2.25, 3.0, 1e-3, 4.0]);

        let path = save_to_csv(&array, &csv_path(&dir, "round_trip")).unwrap();
        let loaded = load_from_csv(path.to_str().unwrap()).unwrap();

        assert_eq!(loaded.shape(), (3, 2));
        for row in 0..3 {
            for col in 0..2 {
                assert_relative_eq!(loaded[(row, col)], array[(row, col)]);
            }
        }
    }

    #[test]
    fn test_load_requires_csv_extension() {
        assert!(matches!(
            load_from_csv("data.txt"),
            Err(PrepError::InvalidExtension(_))
        ));
    }

    #[test]
    fn test_load_rejects_malformed_fields() {
        let dir = TempDir::new().unwrap();
        let path = csv_path(&dir, "bad.csv");
        let mut file = File::create(&path).unwrap();
        writeln!(file, "1.0,2.0").unwrap();
        writeln!(file, "1.0,abc").unwrap();

        let err = load_from_csv(&path).unwrap_err();
        assert!(matches!(err, PrepError::MalformedCsv { line: 2, .. }));
    }

    #[test]
    fn test_load_rejects_ragged_lines() {
        let dir = TempDir::new().unwrap();
        let path = csv_path(&dir, "ragged.csv");
        let mut file = File::create(&path).unwrap();
        writeln!(file, "1.0,2.0").unwrap();
        writeln!(file, "1.0,2.0,3.0").unwrap();

        let err = load_from_csv(&path).unwrap_err();
        assert!(matches!(err, PrepError::MalformedCsv { line: 2, .. }));
    }

    #[test]
    fn test_load_empty_file_is_empty_array() {
        let dir = TempDir::new().unwrap();
        let path = csv_path(&dir, "empty.csv");
        File::create(&path).unwrap();

        assert!(matches!(load_from_csv(&path), Err(PrepError::EmptyArray)));
    }

    #[test]
    fn test_split_mode_partitions_columns() {
        let dir = TempDir::new().unwrap();
        let combined = DMatrix::from_row_slice(2, 3, &[0.0, 0.5, 10.0, 1.0, 0.5, 20.0]);
        let path = save_to_csv(&combined, &csv_path(&dir, "combined")).unwrap();

        let (x, y) = load_from_csv_split(path.to_str().unwrap(), 1).unwrap();

        assert_eq!(x.shape(), (2, 2));
        assert_eq!(y.shape(), (2, 1));
        assert_relative_eq!(x[(1, 1)], 0.5);
        assert_relative_eq!(y[(0, 0)], 10.0);
        assert_relative_eq!(y[(1, 0)], 20.0);
    }

    #[test]
    fn test_split_mode_rejects_bad_y_dim() {
        let dir = TempDir::new().unwrap();
        let combined = DMatrix::from_row_slice(1, 2, &[1.0, 2.0]);
        let path = save_to_csv(&combined, &csv_path(&dir, "narrow")).unwrap();
        let path = path.to_str().unwrap();

        assert!(matches!(
            load_from_csv_split(path, 0),
            Err(PrepError::MalformedCsv { .. })
        ));
        assert!(matches!(
            load_from_csv_split(path, 2),
            Err(PrepError::MalformedCsv { .. })
        ));
    }
}
