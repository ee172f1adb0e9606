use crate::panel::date::{add_years, with_month, with_year};
use crate::panel::decade::{
    compute_grid, dispatch_for, Action, DecadeRange, YearCell, COLS, ROWS,
};
use crate::panel::PanelError;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Mode tag handed to the footer renderer.
pub const FOOTER_MODE: &str = "year";

pub type SelectHandler = Box<dyn FnMut(NaiveDate)>;
pub type DecadePanelHandler = Box<dyn FnMut()>;
pub type FooterRenderer = Box<dyn Fn(&str) -> Option<String>>;

/// Pre-resolved header titles. Keys match the camelCase names locale packs use.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PanelLocale {
    pub previous_decade: String,
    pub next_decade: String,
    pub decade_select: String,
}

impl Default for PanelLocale {
    fn default() -> Self {
        PanelLocale {
            previous_decade: "Last decade".to_string(),
            next_decade: "Next decade".to_string(),
            decade_select: "Choose a decade".to_string(),
        }
    }
}

/// Construction options. `on_select` is required before any year can be chosen.
#[derive(Default)]
pub struct YearPanelProps {
    pub value: Option<NaiveDate>,
    pub default_value: Option<NaiveDate>,
    pub locale: PanelLocale,
    pub render_footer: Option<FooterRenderer>,
    pub on_decade_panel_show: Option<DecadePanelHandler>,
    pub on_select: Option<SelectHandler>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelState {
    pub value: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecadeHeader {
    pub range: DecadeRange,
    pub label: String,
    pub previous_title: String,
    pub next_title: String,
    pub decade_select_title: String,
}

/// A grid cell together with what clicking it does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedCell {
    pub cell: YearCell,
    pub action: Action,
}

/// Everything the presentation layer needs to draw the panel once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelView {
    pub header: DecadeHeader,
    pub rows: [[RenderedCell; COLS]; ROWS],
    pub footer: Option<String>,
}

pub struct YearPanel {
    state: Option<PanelState>,
    locale: PanelLocale,
    render_footer: Option<FooterRenderer>,
    on_decade_panel_show: Option<DecadePanelHandler>,
    on_select: Option<SelectHandler>,
}

impl YearPanel {
    pub fn new(props: YearPanelProps) -> Self {
        let state = props
            .value
            .or(props.default_value)
            .map(|value| PanelState { value });
        YearPanel {
            state,
            locale: props.locale,
            render_footer: props.render_footer,
            on_decade_panel_show: props.on_decade_panel_show,
            on_select: props.on_select,
        }
    }

    pub fn state(&self) -> Result<PanelState, PanelError> {
        self.state.ok_or(PanelError::MissingValue)
    }

    pub fn value(&self) -> Result<NaiveDate, PanelError> {
        Ok(self.state()?.value)
    }

    pub fn decade_range(&self) -> Result<DecadeRange, PanelError> {
        Ok(DecadeRange::containing(self.value()?.year()))
    }

    fn go_decade(&mut self, direction: i32) -> Result<(), PanelError> {
        let current = self.value()?;
        let value = add_years(current, 10 * direction)?;
        debug!(from = %current, to = %value, "decade navigation");
        self.state = Some(PanelState { value });
        Ok(())
    }

    pub fn previous_decade(&mut self) -> Result<(), PanelError> {
        self.go_decade(-1)
    }

    pub fn next_decade(&mut self) -> Result<(), PanelError> {
        self.go_decade(1)
    }

    /// Replaces the year of the held value, keeping its month, then notifies
    /// `on_select`. The new state is stored before the handler runs, so it is in
    /// place even when the handler is missing.
    pub fn choose_year(&mut self, year: i32) -> Result<(), PanelError> {
        let current = self.value()?;
        let value = with_month(with_year(current, year)?, current.month())?;
        self.state = Some(PanelState { value });
        debug!(%value, "year chosen");
        let on_select = self.on_select.as_mut().ok_or(PanelError::MissingOnSelect)?;
        on_select(value);
        Ok(())
    }

    pub fn apply(&mut self, action: Action) -> Result<(), PanelError> {
        match action {
            Action::PreviousDecade => self.previous_decade(),
            Action::NextDecade => self.next_decade(),
            Action::SelectYear(year) => self.choose_year(year),
        }
    }

    /// Activates the decade-select header control. Without a handler this does
    /// nothing.
    pub fn show_decade_panel(&mut self) {
        if let Some(handler) = self.on_decade_panel_show.as_mut() {
            handler();
        }
    }

    pub fn view(&self) -> Result<PanelView, PanelError> {
        let range = self.decade_range()?;
        let grid = compute_grid(self.value()?);
        let rows = grid.map(|row| {
            row.map(|cell| {
                let action = dispatch_for(&cell, &range);
                RenderedCell { cell, action }
            })
        });
        let header = DecadeHeader {
            range,
            label: range.to_string(),
            previous_title: self.locale.previous_decade.clone(),
            next_title: self.locale.next_decade.clone(),
            decade_select_title: self.locale.decade_select.clone(),
        };
        let footer = self
            .render_footer
            .as_ref()
            .and_then(|render| render(FOOTER_MODE));
        Ok(PanelView {
            header,
            rows,
            footer,
        })
    }
}
