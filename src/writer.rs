//! Spreadsheet serialization of scraped records.

use std::path::Path;

use rust_xlsxwriter::{Format, Workbook};
use tracing::info;

use crate::record::PageRecord;
use crate::Result;

/// Default output path.
pub const DEFAULT_OUTPUT: &str = "resultados_raspagem.xlsx";

/// Sheet name inside the workbook.
const SHEET_NAME: &str = "Resultados";

/// Header row, one column per record field.
const COLUMNS: [&str; 4] = ["Título", "Link", "Data de Publicação", "Conteúdo"];

/// Writes the records to an `.xlsx` file, one row per record.
///
/// With no records, prints a diagnostic and performs no file I/O, so the
/// output file exists iff at least one record was collected. An existing
/// file at `path` is overwritten.
pub fn save_xlsx(records: &[PageRecord], path: &Path) -> Result<()> {
    if records.is_empty() {
        println!("Nenhum dado válido para salvar.");
        return Ok(());
    }

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    let bold = Format::new().set_bold();
    for (col, name) in COLUMNS.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *name, &bold)?;
    }

    for (i, record) in records.iter().enumerate() {
        let row = i as u32 + 1;
        worksheet.write_string(row, 0, &record.title)?;
        worksheet.write_string(row, 1, &record.link)?;
        if let Some(date) = record.published {
            worksheet.write_string(row, 2, date.format("%Y-%m-%d").to_string())?;
        }
        worksheet.write_string(row, 3, &record.content)?;
    }

    workbook.save(path)?;
    info!(path = %path.display(), rows = records.len(), "planilha gravada");
    println!("Resultados salvos no arquivo: {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use calamine::{open_workbook, Data, Reader, Xlsx};
    use chrono::NaiveDate;
    use tempfile::tempdir;

    fn sample_records() -> Vec<PageRecord> {
        vec![
            PageRecord::new(
                "Primeira notícia",
                "https://example.com/a",
                NaiveDate::from_ymd_opt(2023, 5, 1),
                "Corpo da primeira.",
            ),
            PageRecord::new("Segunda notícia", "https://example.com/b", None, "Corpo da segunda."),
        ]
    }

    #[test]
    fn test_save_empty_writes_nothing() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("vazio.xlsx");
        save_xlsx(&[], &path).unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn test_save_writes_header_and_rows() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("saida.xlsx");
        save_xlsx(&sample_records(), &path).unwrap();
        assert!(path.exists());

        let mut workbook: Xlsx<_> = open_workbook(&path).unwrap();
        let range = workbook.worksheet_range("Resultados").unwrap();
        assert_eq!(range.height(), 3);
        assert_eq!(range.width(), 4);
        assert_eq!(
            range.get_value((0, 0)),
            Some(&Data::String("Título".to_string()))
        );
        assert_eq!(
            range.get_value((0, 2)),
            Some(&Data::String("Data de Publicação".to_string()))
        );
        assert_eq!(
            range.get_value((1, 1)),
            Some(&Data::String("https://example.com/a".to_string()))
        );
        assert_eq!(
            range.get_value((1, 2)),
            Some(&Data::String("2023-05-01".to_string()))
        );
        assert_eq!(
            range.get_value((2, 3)),
            Some(&Data::String("Corpo da segunda.".to_string()))
        );
    }

    #[test]
    fn test_save_missing_date_leaves_cell_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("saida.xlsx");
        save_xlsx(&sample_records(), &path).unwrap();

        let mut workbook: Xlsx<_> = open_workbook(&path).unwrap();
        let range = workbook.worksheet_range("Resultados").unwrap();
        assert_eq!(range.get_value((2, 2)), Some(&Data::Empty));
    }

    #[test]
    fn test_save_overwrites_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("saida.xlsx");
        save_xlsx(&sample_records(), &path).unwrap();

        let single = vec![PageRecord::new("Só uma", "https://example.com/c", None, "Corpo.")];
        save_xlsx(&single, &path).unwrap();

        let mut workbook: Xlsx<_> = open_workbook(&path).unwrap();
        let range = workbook.worksheet_range("Resultados").unwrap();
        // Header plus a single row, the previous rows are gone.
        assert_eq!(range.height(), 2);
    }
}
