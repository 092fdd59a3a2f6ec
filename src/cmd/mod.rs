/// Single accessor decode command.
pub mod accessor;
/// Container and document summary command.
pub mod info;
/// Full JSON report command.
pub mod report;
pub(crate) mod util;
