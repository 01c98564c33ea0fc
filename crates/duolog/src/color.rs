//! Colorization helpers on top of the process-wide color switch.

use std::io;

use is_terminal::IsTerminal;

/// Enables colors only when both output streams are terminals.
///
/// Returns the decision. Call once at startup after parsing flags; a
/// redirected stream keeps colors off so piped output stays free of
/// escape bytes.
pub fn enable_colors_for_terminal() -> bool {
    let interactive = io::stdout().is_terminal() && io::stderr().is_terminal();
    duolog_core::set_use_colors(interactive);
    interactive
}
