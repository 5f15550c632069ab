use calamine::{open_workbook_auto_from_rs, Data, Reader};
use std::collections::{HashMap, HashSet};
use std::io::Cursor;
use std::path::Path;

use super::error::ImportError;
use crate::shared::date_utils::excel_serial_to_date;

/// Header → cell text for one data row
pub type RawRow = HashMap<String, String>;

/// Non-blank data row with its position in the file
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedRow {
    /// 1-based data row number (header excluded), counting blank rows
    pub number: usize,
    pub cells: RawRow,
}

/// Accepted upload formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Csv,
    Xlsx,
    Xls,
}

impl FileFormat {
    /// Detect by extension, case-insensitively
    pub fn from_file_name(file_name: &str) -> Result<Self, ImportError> {
        let extension = Path::new(file_name)
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();

        match extension.as_str() {
            "csv" => Ok(FileFormat::Csv),
            "xlsx" => Ok(FileFormat::Xlsx),
            "xls" => Ok(FileFormat::Xls),
            _ => Err(ImportError::UnsupportedFormat(file_name.to_string())),
        }
    }
}

/// Parsed upload: headers plus one map per non-blank data row
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedFile {
    pub file_name: String,
    pub headers: Vec<String>,
    pub rows: Vec<ParsedRow>,
}

impl ParsedFile {
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Build from a grid whose first row is the header row
    pub fn from_grid(file_name: &str, grid: Vec<Vec<String>>) -> Result<Self, ImportError> {
        let mut grid = grid.into_iter();
        let headers: Vec<String> = grid
            .next()
            .ok_or(ImportError::EmptyFile)?
            .into_iter()
            .map(|h| h.trim().to_string())
            .collect();

        if headers.iter().all(|h| h.is_empty()) {
            return Err(ImportError::EmptyFile);
        }

        let mut seen = HashSet::new();
        if let Some(dup) = headers
            .iter()
            .filter(|h| !h.is_empty())
            .find(|h| !seen.insert(h.as_str()))
        {
            return Err(ImportError::DuplicateHeader(dup.clone()));
        }

        let rows: Vec<ParsedRow> = grid
            .enumerate()
            .filter(|(_, cells)| cells.iter().any(|c| !c.trim().is_empty()))
            .map(|(idx, cells)| ParsedRow {
                number: idx + 1,
                cells: headers
                    .iter()
                    .enumerate()
                    .filter(|(_, h)| !h.is_empty())
                    .map(|(col, h)| (h.clone(), cells.get(col).cloned().unwrap_or_default()))
                    .collect(),
            })
            .collect();

        Ok(Self {
            file_name: file_name.to_string(),
            headers,
            rows,
        })
    }
}

/// Parse uploaded bytes by file extension
pub fn parse_file(file_name: &str, bytes: &[u8], max_bytes: u64) -> Result<ParsedFile, ImportError> {
    let format = FileFormat::from_file_name(file_name)?;
    let size = bytes.len() as u64;
    if size > max_bytes {
        return Err(ImportError::FileTooLarge {
            size,
            limit: max_bytes,
        });
    }

    let grid = match format {
        FileFormat::Csv => read_csv(bytes)?,
        FileFormat::Xlsx | FileFormat::Xls => read_workbook(bytes)?,
    };

    let parsed = ParsedFile::from_grid(file_name, grid)?;
    tracing::info!(
        "Parsed {}: {} columns, {} rows",
        file_name,
        parsed.headers.len(),
        parsed.rows.len()
    );
    Ok(parsed)
}

/// Read a file from disk and parse it
pub fn parse_path(path: &Path, max_bytes: u64) -> Result<ParsedFile, ImportError> {
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default()
        .to_string();
    FileFormat::from_file_name(&file_name)?;

    let size = std::fs::metadata(path)
        .map_err(|e| ImportError::Parse(format!("{}: {}", path.display(), e)))?
        .len();
    if size > max_bytes {
        return Err(ImportError::FileTooLarge {
            size,
            limit: max_bytes,
        });
    }

    let bytes =
        std::fs::read(path).map_err(|e| ImportError::Parse(format!("{}: {}", path.display(), e)))?;
    parse_file(&file_name, &bytes, max_bytes)
}

fn read_csv(bytes: &[u8]) -> Result<Vec<Vec<String>>, ImportError> {
    // Strip UTF-8 BOM if present
    let bytes = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(bytes);

    let mut grid = Vec::new();
    for record in reader.records() {
        let record = record?;
        grid.push(record.iter().map(|c| c.to_string()).collect());
    }
    Ok(grid)
}

fn read_workbook(bytes: &[u8]) -> Result<Vec<Vec<String>>, ImportError> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes.to_vec()))?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or(ImportError::EmptyFile)??;

    Ok(range
        .rows()
        .map(|row| row.iter().map(cell_to_string).collect())
        .collect())
}

/// Stringify a cell the way it reads in the sheet; integral floats lose `.0`
fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => format_float(*f),
        Data::Bool(b) => b.to_string(),
        Data::DateTime(dt) => excel_serial_to_date(dt.as_f64())
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| format_float(dt.as_f64())),
        Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
        Data::Error(e) => {
            tracing::debug!("Spreadsheet cell error: {:?}", e);
            String::new()
        }
    }
}

fn format_float(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAX: u64 = 1024 * 1024;

    #[test]
    fn test_format_detection() {
        assert_eq!(FileFormat::from_file_name("lots.CSV"), Ok(FileFormat::Csv));
        assert_eq!(FileFormat::from_file_name("a.b.xlsx"), Ok(FileFormat::Xlsx));
        assert_eq!(FileFormat::from_file_name("old.xls"), Ok(FileFormat::Xls));
        assert!(matches!(
            FileFormat::from_file_name("lots.pdf"),
            Err(ImportError::UnsupportedFormat(_))
        ));
        assert!(FileFormat::from_file_name("noext").is_err());
    }

    #[test]
    fn test_parse_csv_with_bom_and_blank_rows() {
        let data = "\u{FEFF}Lot, Park Name ,Status\n12A,Oakwood,FOR_RENT\n,,\n14B,Oakwood,FOR_SALE\n";
        let parsed = parse_file("lots.csv", data.as_bytes(), MAX).unwrap();
        assert_eq!(parsed.headers, vec!["Lot", "Park Name", "Status"]);
        assert_eq!(parsed.row_count(), 2);
        assert_eq!(parsed.rows[0].cells["Lot"], "12A");
        assert_eq!(parsed.rows[0].cells["Park Name"], "Oakwood");
        assert_eq!(parsed.rows[1].cells["Status"], "FOR_SALE");
        // the blank line still counts
        assert_eq!(parsed.rows[0].number, 1);
        assert_eq!(parsed.rows[1].number, 3);
    }

    #[test]
    fn test_duplicate_header_is_rejected() {
        let data = "Lot,Price,Price
12A,900,1000
";
        assert_eq!(
            parse_file("lots.csv", data.as_bytes(), MAX),
            Err(ImportError::DuplicateHeader("Price".into()))
        );

        // untitled columns are ignored, not duplicates
        let parsed = parse_file("lots.csv", b"Lot,,
12A,x,y
", MAX).unwrap();
        assert_eq!(parsed.rows[0].cells.len(), 1);
    }

    #[test]
    fn test_short_rows_are_padded() {
        let data = "Lot,Park Name,Status\n12A\n";
        let parsed = parse_file("lots.csv", data.as_bytes(), MAX).unwrap();
        assert_eq!(parsed.rows[0].cells["Status"], "");
    }

    #[test]
    fn test_empty_file() {
        assert_eq!(parse_file("lots.csv", b"", MAX), Err(ImportError::EmptyFile));
    }

    #[test]
    fn test_too_large() {
        let data = "Lot\n1\n";
        assert_eq!(
            parse_file("lots.csv", data.as_bytes(), 3),
            Err(ImportError::FileTooLarge { size: 6, limit: 3 })
        );
    }

    #[test]
    fn test_corrupt_workbook_is_parse_error() {
        let result = parse_file("lots.xlsx", b"not a zip archive", MAX);
        assert!(matches!(result, Err(ImportError::Parse(_))));
    }

    #[test]
    fn test_cell_to_string() {
        assert_eq!(cell_to_string(&Data::Float(3.0)), "3");
        assert_eq!(cell_to_string(&Data::Float(2.5)), "2.5");
        assert_eq!(cell_to_string(&Data::Int(1200)), "1200");
        assert_eq!(cell_to_string(&Data::Empty), "");
        assert_eq!(cell_to_string(&Data::String("x".into())), "x");
    }
}
