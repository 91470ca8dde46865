pub mod colors;
pub mod console;
pub mod logging;
pub mod print;
