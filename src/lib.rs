//! Introductory Programming Exercises
//!
//! Six small report generators plus a flat-file student directory with an
//! interactive search menu.

pub mod domain;
pub use domain::{Config, Query, Student, ValidationError};

/// Flat-file persistence of student records.
pub mod storage;
pub use storage::{AddError, Directory};

pub mod console;
pub use console::{Console, ConsoleError, StdConsole};

pub mod exercises;
pub mod report;
pub use report::{Reporter, Tee};

pub mod session;
pub use session::{MenuChoice, Session};
