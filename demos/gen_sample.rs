use anyhow::Result;

fn main() -> Result<()> {
    std::fs::create_dir_all("excel_target")?;

    let mut book = umya_spreadsheet::new_file();
    let sheet = book.get_active_sheet_mut();
    sheet.set_name("헌법");

    // Header row with a Korean font so the English copy visibly switches to the fallback.
    sheet.get_cell_mut("A1").set_value("조항");
    sheet.get_cell_mut("B1").set_value("내용");
    for coord in ["A1", "B1"] {
        let font = sheet.get_style_mut(coord).get_font_mut();
        font.set_name("맑은 고딕");
        font.set_bold(true);
    }

    sheet.get_cell_mut("A2").set_value("제1조");
    sheet.get_cell_mut("B2").set_value("대한민국은 민주공화국이다.");
    // Same text twice: only one translation request.
    sheet.get_cell_mut("A3").set_value("제1조");
    sheet.get_cell_mut("B3").set_value_number(1948);

    umya_spreadsheet::writer::xlsx::write(&book, "excel_target/sample.xlsx")?;
    println!("Wrote excel_target/sample.xlsx");
    Ok(())
}
