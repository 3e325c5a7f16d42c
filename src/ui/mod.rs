pub mod ci;
pub mod console;
pub mod error;
pub mod output;
pub mod primitives;
pub mod terminal;
pub mod theme;
