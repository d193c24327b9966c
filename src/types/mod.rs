//! Data model produced by the parser.
//!
//! A report is a `Vec<Host>`; each host owns its ports and each port owns the
//! output of the scripts that ran against it.

mod host;
mod port;
mod scripts;

pub use host::Host;
pub use port::{Port, OPEN_STATE};
pub use scripts::ScriptMap;
