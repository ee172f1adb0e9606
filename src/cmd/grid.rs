use crate::data::{PanelSettings, Persistable};
use crate::panel::{PanelLocale, PanelView, YearCell, YearPanel, YearPanelProps};
use anyhow::Result;
use chrono::{Local, NaiveDate};

const CELL_WIDTH: usize = 8;

pub fn run(date: Option<NaiveDate>) -> Result<()> {
    let settings = PanelSettings::load()?;
    let locale = PanelLocale::load()?;
    let value = match date {
        Some(date) => date,
        None => settings.default_date(Local::now().date_naive()),
    };
    let panel = YearPanel::new(YearPanelProps {
        value: Some(value),
        locale,
        ..Default::default()
    });
    write_grid(&panel.view()?, &mut std::io::stdout())
}

/// Prints the header and the 4x3 grid. Boundary years are parenthesised and the
/// selected year is bracketed.
pub(crate) fn write_grid<W: std::io::Write>(view: &PanelView, out: &mut W) -> Result<()> {
    let header = &view.header;
    writeln!(
        out,
        "« {}  |  {}  |  {} »",
        header.previous_title, header.label, header.next_title
    )?;
    writeln!(out, "---")?;
    for row in &view.rows {
        let cells: Vec<String> = row.iter().map(|c| format_cell(&c.cell)).collect();
        writeln!(out, "  {}", cells.join(" ").trim_end())?;
    }
    writeln!(out, "---")?;
    if let Some(footer) = &view.footer {
        writeln!(out, "{footer}")?;
    }
    Ok(())
}

fn format_cell(cell: &YearCell) -> String {
    let text = if cell.is_selected {
        format!("[{}]", cell.label)
    } else if cell.is_current_decade {
        cell.label.clone()
    } else {
        format!("({})", cell.label)
    };
    format!("{:^width$}", text, width = CELL_WIDTH)
}
