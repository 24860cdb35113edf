use rust_xlsxwriter::{Format, Workbook};

use crate::error::Result;
use crate::models::Product;

pub const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";
pub const XLSX_FILENAME: &str = "resultados.xlsx";

const HEADERS: [&str; 4] = ["Producto", "URL", "Precio", "Imagen"];

/// Render products as an in-memory `.xlsx` workbook, header row first.
pub fn to_xlsx(products: &[Product]) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name("Sheet1")?;

    let bold = Format::new().set_bold();
    for (col, title) in HEADERS.iter().enumerate() {
        sheet.write_string_with_format(0, col as u16, *title, &bold)?;
    }

    for (i, product) in products.iter().enumerate() {
        let row = i as u32 + 1;
        sheet.write_string(row, 0, &product.name)?;
        sheet.write_string(row, 1, &product.url)?;
        sheet.write_string(row, 2, &product.price)?;
        sheet.write_string(row, 3, &product.image)?;
    }

    Ok(workbook.save_to_buffer()?)
}

pub fn save_xlsx(products: &[Product], path: &str) -> Result<()> {
    let bytes = to_xlsx(products)?;
    std::fs::write(path, bytes)?;
    Ok(())
}
