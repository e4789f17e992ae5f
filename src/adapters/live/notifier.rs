//! Terminal notifier standing in for a modal alert.

use std::io::{self, BufRead, Write};

use crate::ports::notifier::Notifier;
use crate::ports::PortError;

/// Prompt written to stderr while waiting for acknowledgement.
pub const ACKNOWLEDGE_PROMPT: &str = "[press Enter to continue]";

/// Writes each message to stdout on its own line.
///
/// With acknowledgement enabled the call blocks until a line is read from
/// stdin, the way a modal alert blocks until dismissed.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalNotifier {
    acknowledge: bool,
}

impl TerminalNotifier {
    /// Creates a notifier; `acknowledge` makes each message wait for Enter.
    #[must_use]
    pub fn new(acknowledge: bool) -> Self {
        Self { acknowledge }
    }
}

impl Notifier for TerminalNotifier {
    fn notify(&self, message: &str) -> Result<(), PortError> {
        show(
            message,
            self.acknowledge,
            &mut io::stdout().lock(),
            &mut io::stderr().lock(),
            &mut io::stdin().lock(),
        )?;
        Ok(())
    }
}

/// Writes `message` to `out`; when `acknowledge` is set, prompts on `prompt`
/// and blocks until a line (or end of input) is read from `input`.
fn show(
    message: &str,
    acknowledge: bool,
    out: &mut impl Write,
    prompt: &mut impl Write,
    input: &mut impl BufRead,
) -> io::Result<()> {
    writeln!(out, "{message}")?;
    out.flush()?;

    if acknowledge {
        write!(prompt, "{ACKNOWLEDGE_PROMPT}")?;
        prompt.flush()?;
        let mut line = String::new();
        input.read_line(&mut line)?;
    }
    Ok(())
}
