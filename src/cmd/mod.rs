/// Top-level value decode command.
pub mod decode;
/// Stream summary command.
pub mod info;
/// Human-readable value tree rendering.
pub mod print;
/// Shared CLI helpers.
pub mod util;
