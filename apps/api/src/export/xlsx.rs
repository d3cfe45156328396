use rust_xlsxwriter::{Color, Format, Workbook, Worksheet};

use crate::export::{Cell, ExportError, RowKind, Sheet, TabularDocument};
use crate::matching::models::Category;

pub const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

const COLUMN_WIDTH: f64 = 20.0;

/// Renders every sheet of `doc` into an in-memory `.xlsx` workbook.
pub fn render_xlsx(doc: &TabularDocument) -> Result<Vec<u8>, ExportError> {
    let mut workbook = Workbook::new();
    for sheet in &doc.sheets {
        let worksheet = workbook.add_worksheet();
        write_sheet(worksheet, sheet)?;
    }
    Ok(workbook.save_to_buffer()?)
}

fn write_sheet(worksheet: &mut Worksheet, sheet: &Sheet) -> Result<(), ExportError> {
    worksheet.set_name(&sheet.name)?;

    let header = Format::new()
        .set_bold()
        .set_background_color(Color::RGB(0xD3D3D3));
    let label = Format::new().set_bold();

    for (row_idx, row) in sheet.rows.iter().enumerate() {
        let row_num = row_idx as u32;
        let format = match row.kind {
            RowKind::Header => Some(header.clone()),
            RowKind::SectionLabel(category) => Some(section_format(category)),
            RowKind::JobInfo => None,
            RowKind::Data | RowKind::Blank => None,
        };

        for (col_idx, cell) in row.cells.iter().enumerate() {
            let col_num = col_idx as u16;
            let cell_format = match (row.kind, col_idx) {
                (RowKind::JobInfo, 0) => Some(&label),
                _ => format.as_ref(),
            };
            match (cell, cell_format) {
                (Cell::Text(text), Some(f)) => {
                    worksheet.write_string_with_format(row_num, col_num, text, f)?;
                }
                (Cell::Text(text), None) => {
                    worksheet.write_string(row_num, col_num, text)?;
                }
                (Cell::Number(n), Some(f)) => {
                    worksheet.write_number_with_format(row_num, col_num, *n, f)?;
                }
                (Cell::Number(n), None) => {
                    worksheet.write_number(row_num, col_num, *n)?;
                }
            }
        }
    }

    for col in 0..sheet.column_count() {
        worksheet.set_column_width(col as u16, COLUMN_WIDTH)?;
    }
    Ok(())
}

fn section_format(category: Category) -> Format {
    let color = match category {
        Category::MustInterview => 0x00008B,
        Category::CanInterview => 0x006400,
        Category::MaybeInterview => 0x8B8000,
        Category::Reject => 0x8B0000,
    };
    Format::new().set_bold().set_font_color(Color::RGB(color))
}
