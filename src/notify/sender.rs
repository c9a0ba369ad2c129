//! Hand-off to the external messaging channel.

use std::io::Write;

use crate::error::{Result, StampcardError};

/// A message ready for the external channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Digits-only international phone number
    pub destination: String,
    /// UTF-8 message text
    pub message: String,
    /// Deep link that opens the channel with the message filled in
    pub link: String,
}

/// The outbound messaging collaborator.
pub trait MessageSender {
    fn send(&mut self, notification: &Notification) -> Result<()>;
}

/// Sender that writes each deep link on its own line.
///
/// The operator opens the link to deliver the message.
pub struct LinkWriter<W: Write> {
    out: W,
}

impl<W: Write> LinkWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> MessageSender for LinkWriter<W> {
    fn send(&mut self, notification: &Notification) -> Result<()> {
        writeln!(self.out, "{}", notification.link)
            .and_then(|_| self.out.flush())
            .map_err(|e| StampcardError::Delivery(e.to_string()))?;
        log::debug!("Handed off message for {}", notification.destination);
        Ok(())
    }
}
