pub mod locale;
pub mod persistence;
pub mod settings;

pub use persistence::Persistable;
pub use settings::{parse_date, PanelSettings};
