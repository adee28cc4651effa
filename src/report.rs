//! Report output shared by every exercise.
//!
//! Reports go to the console and to a file at the same time through a
//! [`Tee`]. Student tables are appended to one cumulative file by a
//! [`Reporter`]; exercise reports start their file afresh.

pub mod sink;
pub mod table;

pub use sink::{open_report, Mode, Tee};
pub use table::{render, Reporter};
