use crate::data::settings::DATE_FORMAT;
use crate::data::{PanelSettings, Persistable};
use crate::panel::PanelLocale;
use crate::ui::year_view::{run_app, App};
use crate::ui::{restore_terminal, setup_terminal};
use anyhow::Result;
use chrono::{Local, NaiveDate};
use tracing::info;

pub fn run(value: Option<NaiveDate>) -> Result<()> {
    let settings = PanelSettings::load()?;
    let locale = PanelLocale::load()?;
    let default_value = settings.default_date(Local::now().date_naive());

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = crossterm::terminal::disable_raw_mode();
        let _ = crossterm::execute!(
            std::io::stdout(),
            crossterm::terminal::LeaveAlternateScreen,
            crossterm::event::DisableMouseCapture
        );
        original_hook(info);
    }));

    let mut terminal = setup_terminal()?;

    info!(?value, %default_value, "opening year panel");
    let mut app = App::new(value, default_value, locale, settings.show_footer);
    let result = run_app(&mut terminal, &mut app);

    restore_terminal(&mut terminal)?;
    result?;

    if let Some(chosen) = app.chosen() {
        info!(%chosen, "year panel closed with a selection");
        println!("{}", chosen.format(DATE_FORMAT));
    }
    Ok(())
}
