//! Terminal stand-ins for the editor's anchor dialog and message boxes

use std::io::{self, BufRead, Write};

use super::{AnchorCandidate, AnchorPicker, Notification, Notifier};
use crate::align::FootprintRef;

/// Numbered anchor prompt read from a line-based input.
///
/// An empty line or end of input cancels; anything that is not a listed
/// number, including a line that is not valid UTF-8, asks again. Other read
/// or write failures are returned to the caller.
pub struct TerminalPicker<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> TerminalPicker<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn prompt(&mut self, candidates: &[AnchorCandidate]) -> io::Result<Option<usize>> {
        writeln!(
            self.output,
            "Select the anchor footprint (other selected footprints will align to it):"
        )?;
        for (i, candidate) in candidates.iter().enumerate() {
            writeln!(self.output, "  {}) {}", i + 1, candidate.display_name)?;
        }

        loop {
            write!(
                self.output,
                "Anchor [1-{}, empty to cancel]: ",
                candidates.len()
            )?;
            self.output.flush()?;

            let mut line = String::new();
            match self.input.read_line(&mut line) {
                Ok(0) => return Ok(None),
                Ok(_) => {}
                // The offending bytes are consumed, so the next line is a fresh answer
                Err(e) if e.kind() == io::ErrorKind::InvalidData => {
                    writeln!(self.output, "answer is not valid text")?;
                    continue;
                }
                Err(e) => return Err(e),
            }
            let answer = line.trim();
            if answer.is_empty() {
                return Ok(None);
            }
            match answer.parse::<usize>() {
                Ok(n) if (1..=candidates.len()).contains(&n) => return Ok(Some(n - 1)),
                _ => writeln!(self.output, "'{}' is not one of the listed numbers", answer)?,
            }
        }
    }
}

impl TerminalPicker<io::StdinLock<'static>, io::Stderr> {
    /// Prompt on stderr and read the answer from stdin
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stderr())
    }
}

impl<R: BufRead, W: Write> AnchorPicker for TerminalPicker<R, W> {
    fn choose_anchor(
        &mut self,
        candidates: &[AnchorCandidate],
    ) -> io::Result<Option<FootprintRef>> {
        let choice = self.prompt(candidates)?;
        Ok(choice.map(|i| candidates[i].footprint.clone()))
    }
}

/// Prints notifications as `severity: message` lines.
///
/// This is the only channel for user-facing text; the log carries diagnostics.
pub struct TerminalNotifier<W> {
    output: W,
}

impl<W: Write> TerminalNotifier<W> {
    pub fn new(output: W) -> Self {
        Self { output }
    }
}

impl TerminalNotifier<io::Stderr> {
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl<W: Write> Notifier for TerminalNotifier<W> {
    fn notify(&mut self, notification: Notification) {
        if let Err(e) = writeln!(
            self.output,
            "{}: {}",
            notification.severity, notification.message
        ) {
            log::warn!("could not print notification: {}", e);
        }
    }
}
