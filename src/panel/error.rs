/// Failures raised by the year panel's grid, navigation and selection operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PanelError {
    /// Neither `value` nor `default_value` was supplied at construction.
    #[error("year panel has no value: supply `value` or `default_value`")]
    MissingValue,

    /// A year was chosen but no `on_select` handler is registered.
    #[error("year panel has no `on_select` handler")]
    MissingOnSelect,

    #[error("year {0} is outside the supported date range")]
    YearOutOfRange(i32),
}
