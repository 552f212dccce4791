#![warn(clippy::uninlined_format_args)]

pub mod currency;
pub mod labels;
pub mod report_presenter;

pub use currency::{DEFAULT_CURRENCY, format_currency, format_signed_currency};
pub use report_presenter::ReportPresenter;
