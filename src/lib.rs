//! reflowcell: rewrap text to a maximum line width while keeping each line's
//! indentation, for text headed into fixed-width document table cells.
//!
//! - [`reflow`] / [`Reflower`]: the wrapping engine, with an optional HTML
//!   cleanup pre-pass.
//! - [`HtmlToText`]: the pluggable HTML-to-plain-text step; [`ScraperText`]
//!   is the default.
//! - [`max_chars_per_line`]: how many characters fit in a cell of a given
//!   width at a given font size.

pub mod cleanup;
pub mod column;
pub mod error;
pub mod reflow;

pub use cleanup::{HtmlToText, ScraperText};
pub use column::{max_chars_per_line, max_width_for_cell, Units, DEFAULT_SCALING};
pub use error::{Error, Result};
pub use reflow::{indent_width, reflow, reflow_with, Reflower};
