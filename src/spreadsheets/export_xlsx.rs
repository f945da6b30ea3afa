use crate::errors::ServerError;
use crate::listview::SortKey;
use crate::responses::xlsx_response;
use crate::responses::ResultResp;
use rust_xlsxwriter::{Format, Workbook};

/// One spreadsheet column: header text plus the typed cell value.
pub struct ExportColumn<R> {
    pub header: &'static str,
    pub value: fn(&R) -> SortKey<'_>,
}

impl<R> ExportColumn<R> {
    pub fn new(header: &'static str, value: fn(&R) -> SortKey<'_>) -> Self {
        Self { header, value }
    }
}

/// Build a workbook from `rows` in the order given.
pub fn build_workbook<R>(rows: &[&R], columns: &[ExportColumn<R>]) -> Result<Vec<u8>, ServerError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    let bold = Format::new().set_bold();
    let date_format = Format::new().set_num_format("yyyy-mm-dd hh:mm");

    // Headers
    for (col, column) in columns.iter().enumerate() {
        worksheet
            .write_string_with_format(0, col as u16, column.header, &bold)
            .map_err(|e| {
                ServerError::XlsxError(format!("Failed to write header '{}': {}", column.header, e))
            })?;
    }

    // Rows
    for (i, record) in rows.iter().enumerate() {
        let r = (i + 1) as u32;

        for (col, column) in columns.iter().enumerate() {
            let c = col as u16;
            let written = match (column.value)(record) {
                SortKey::Text(text) => worksheet.write_string(r, c, text.into_owned()).map(|_| ()),
                SortKey::Number(n) => worksheet.write_number(r, c, n).map(|_| ()),
                SortKey::Date(ts) => worksheet
                    .write_datetime_with_format(r, c, &ts, &date_format)
                    .map(|_| ()),
                SortKey::Missing => Ok(()),
            };
            written.map_err(|e| {
                ServerError::XlsxError(format!("Failed to write {}: {}", column.header, e))
            })?;
        }
    }

    worksheet.autofit();

    workbook
        .save_to_buffer()
        .map_err(|e| ServerError::XlsxError(format!("Failed to save workbook: {}", e)))
}

pub fn export_view_xlsx<R>(rows: &[&R], columns: &[ExportColumn<R>], name: &str) -> ResultResp {
    let buffer = build_workbook(rows, columns)?;
    let stamp = chrono::Local::now().format("%Y%m%d");
    xlsx_response(buffer, &format!("{name}_{stamp}.xlsx"))
}
