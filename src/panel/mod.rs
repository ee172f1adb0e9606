pub mod date;
pub mod decade;
pub mod error;
pub mod year_panel;

pub use decade::{Action, YearCell};
pub use error::PanelError;
pub use year_panel::{PanelLocale, PanelView, YearPanel, YearPanelProps, FOOTER_MODE};
