//! Console front end: board rendering, prompts, and the menu loop.
//!
//! Nothing in here touches a process-wide handle. Every prompt reads from
//! the input and writes to the output its [`Console`] was built with.

mod app;
mod prompt;
mod render;

pub use app::App;
pub use prompt::{Console, MenuChoice, in_range};
pub use render::{BoardStyle, render_board};
