use crate::data::settings::DATE_FORMAT;
use crate::panel::decade::{COLS, ROWS};
use crate::panel::year_panel::{
    DecadePanelHandler, DecadeHeader, FooterRenderer, RenderedCell, SelectHandler,
};
use crate::panel::{Action, PanelLocale, YearCell, YearPanel, YearPanelProps, FOOTER_MODE};
use anyhow::Result;
use chrono::NaiveDate;
use crossterm::event::{
    self, Event as CEvent, KeyCode, KeyModifiers, MouseButton, MouseEventKind,
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};
use std::cell::Cell;
use std::io::Stdout;
use std::rc::Rc;
use std::time::Duration as StdDuration;
use tracing::{info, warn};

const CELL_WIDTH: u16 = 8;
const NAV_WIDTH: u16 = 3;
const PANEL_WIDTH: u16 = CELL_WIDTH * COLS as u16 + 2;

/// Something on screen that reacts to a left click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HitTarget {
    PreviousDecade,
    NextDecade,
    DecadeSelect,
    Cell(Action),
}

pub struct App {
    panel: YearPanel,
    /// Written by the panel's `on_select` handler.
    chosen: Rc<Cell<Option<NaiveDate>>>,
    /// Raised by the panel's `on_decade_panel_show` handler, consumed after each action.
    decade_requested: Rc<Cell<bool>>,
    /// Result of the last action (message, color). Cleared on next input.
    status: Option<(String, Color)>,
    /// Areas drawn by the last render, checked in order on click.
    hit_areas: Vec<(Rect, HitTarget)>,
}

impl App {
    pub fn new(
        value: Option<NaiveDate>,
        default_value: NaiveDate,
        locale: PanelLocale,
        show_footer: bool,
    ) -> Self {
        let chosen = Rc::new(Cell::new(None));
        let decade_requested = Rc::new(Cell::new(false));

        let on_select: SelectHandler = {
            let chosen = Rc::clone(&chosen);
            Box::new(move |date: NaiveDate| chosen.set(Some(date)))
        };
        let on_decade_panel_show: DecadePanelHandler = {
            let flag = Rc::clone(&decade_requested);
            Box::new(move || flag.set(true))
        };
        let render_footer: Option<FooterRenderer> = if show_footer {
            let chosen = Rc::clone(&chosen);
            Some(Box::new(move |mode: &str| {
                (mode == FOOTER_MODE).then(|| footer_text(chosen.get()))
            }))
        } else {
            None
        };

        let panel = YearPanel::new(YearPanelProps {
            value,
            default_value: Some(default_value),
            locale,
            render_footer,
            on_decade_panel_show: Some(on_decade_panel_show),
            on_select: Some(on_select),
        });

        App {
            panel,
            chosen,
            decade_requested,
            status: None,
            hit_areas: Vec::new(),
        }
    }

    /// The last year chosen in this session, if any.
    pub fn chosen(&self) -> Option<NaiveDate> {
        self.chosen.get()
    }

    /// Returns true when the app should exit.
    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> bool {
        self.status = None;
        match code {
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => return true,
            KeyCode::Char('q') | KeyCode::Esc => return true,
            KeyCode::Char('p') => self.perform(HitTarget::PreviousDecade),
            KeyCode::Char('n') => self.perform(HitTarget::NextDecade),
            KeyCode::Char('d') => self.perform(HitTarget::DecadeSelect),
            _ => {}
        }
        false
    }

    pub fn handle_click(&mut self, column: u16, row: u16) {
        self.status = None;
        let target = self
            .hit_areas
            .iter()
            .find(|(rect, _)| rect.contains(Position::new(column, row)))
            .map(|(_, target)| *target);
        if let Some(target) = target {
            self.perform(target);
        }
    }

    fn perform(&mut self, target: HitTarget) {
        let result = match target {
            HitTarget::PreviousDecade => self.panel.previous_decade(),
            HitTarget::NextDecade => self.panel.next_decade(),
            HitTarget::DecadeSelect => {
                self.panel.show_decade_panel();
                Ok(())
            }
            HitTarget::Cell(action) => self.panel.apply(action),
        };

        if let Err(e) = result {
            warn!(error = %e, ?target, "year panel action failed");
            self.status = Some((e.to_string(), Color::Red));
            return;
        }

        if self.decade_requested.replace(false) {
            info!("decade panel requested");
            self.status = Some((
                "Decade picker is not available here".to_string(),
                Color::Yellow,
            ));
        } else if let HitTarget::Cell(Action::SelectYear(_)) = target {
            if let Some(date) = self.chosen.get() {
                self.status = Some((
                    format!("Chose {}", date.format(DATE_FORMAT)),
                    Color::Green,
                ));
            }
        }
    }

    pub fn render(&mut self, f: &mut Frame) {
        self.hit_areas.clear();
        let area = f.area();

        let view = match self.panel.view() {
            Ok(view) => view,
            Err(e) => {
                let p = Paragraph::new(format!("Configuration Error: {e}"));
                f.render_widget(p, area);
                return;
            }
        };

        let panel_area = Rect {
            width: area.width.min(PANEL_WIDTH),
            ..area
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", view.header.decade_select_title));
        let inner = block.inner(panel_area);
        f.render_widget(block, panel_area);

        let footer_height = if view.footer.is_some() { 1 } else { 0 };
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),           // decade header
                Constraint::Length(1),           // gap
                Constraint::Length(ROWS as u16), // year grid
                Constraint::Length(footer_height),
                Constraint::Length(1), // status / hints
                Constraint::Min(0),
            ])
            .split(inner);

        self.render_header(f, chunks[0], &view.header);
        self.render_grid(f, chunks[2], &view.rows);
        if let Some(footer) = &view.footer {
            let p = Paragraph::new(footer.as_str()).style(Style::default().fg(Color::DarkGray));
            f.render_widget(p, chunks[3]);
        }
        self.render_status(f, chunks[4], &view.header);
    }

    fn render_header(&mut self, f: &mut Frame, area: Rect, header: &DecadeHeader) {
        let parts = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(NAV_WIDTH),
                Constraint::Min(0),
                Constraint::Length(NAV_WIDTH),
            ])
            .split(area);

        let button = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
        f.render_widget(Paragraph::new(" «").style(button), parts[0]);
        f.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled(
                    header.label.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw(" ▾"),
            ]))
            .alignment(Alignment::Center),
            parts[1],
        );
        f.render_widget(Paragraph::new("» ").style(button), parts[2]);

        self.hit_areas.push((parts[0], HitTarget::PreviousDecade));
        self.hit_areas.push((parts[1], HitTarget::DecadeSelect));
        self.hit_areas.push((parts[2], HitTarget::NextDecade));
    }

    fn render_grid(&mut self, f: &mut Frame, area: Rect, rows: &[[RenderedCell; COLS]; ROWS]) {
        let row_rects = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1); ROWS])
            .split(area);

        for (row, row_rect) in rows.iter().zip(row_rects.iter()) {
            let cell_rects = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Length(CELL_WIDTH); COLS])
                .split(*row_rect);
            for (rendered, rect) in row.iter().zip(cell_rects.iter()) {
                let p = Paragraph::new(rendered.cell.label.as_str())
                    .alignment(Alignment::Center)
                    .style(year_cell_style(&rendered.cell));
                f.render_widget(p, *rect);
                self.hit_areas.push((*rect, HitTarget::Cell(rendered.action)));
            }
        }
    }

    fn render_status(&self, f: &mut Frame, area: Rect, header: &DecadeHeader) {
        let line = match &self.status {
            Some((msg, color)) => Line::from(Span::styled(msg.clone(), Style::default().fg(*color))),
            None => Line::from(Span::styled(
                format!(
                    "p {} · n {} · d {} · q quit",
                    header.previous_title, header.next_title, header.decade_select_title
                ),
                Style::default().add_modifier(Modifier::DIM),
            )),
        };
        f.render_widget(Paragraph::new(line), area);
    }
}

// ── App event loop ────────────────────────────────────────────────────────────

pub fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| app.render(f))?;
        if event::poll(StdDuration::from_millis(16))? {
            match event::read()? {
                CEvent::Key(key) => {
                    if app.handle_key(key.code, key.modifiers) {
                        break;
                    }
                }
                CEvent::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                    app.handle_click(mouse.column, mouse.row);
                }
                _ => {}
            }
        }
    }
    Ok(())
}

// ── Cell helpers ──────────────────────────────────────────────────────────────

/// Selected year inverted, boundary years dimmed, the rest plain.
pub(crate) fn year_cell_style(cell: &YearCell) -> Style {
    if cell.is_selected {
        Style::default()
            .fg(Color::Black)
            .bg(Color::White)
            .add_modifier(Modifier::BOLD)
    } else if cell.is_past_decade || cell.is_future_decade {
        Style::default().add_modifier(Modifier::DIM)
    } else {
        Style::default()
    }
}

pub(crate) fn footer_text(chosen: Option<NaiveDate>) -> String {
    match chosen {
        Some(date) => format!("Selected: {}", date.format(DATE_FORMAT)),
        None => "No year chosen yet".to_string(),
    }
}
