//! Terminal front end: the interactive menu and output formatting. Part of
//! the binary, not the library API.

pub mod menu;
pub mod print;
