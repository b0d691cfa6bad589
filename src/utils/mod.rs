pub mod clock;
pub mod error;
pub mod format;
pub mod interactive;
pub mod logging;
pub mod output;
pub mod time_format;

pub use error::{AppError, AppResult, report_error};
pub use output::{OutputStyle, print_info, print_success};
