mod events;
mod share;

pub use events::LoggingWizardEventSink;
pub use share::TerminalShareTarget;
