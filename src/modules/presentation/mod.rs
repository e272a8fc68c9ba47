pub mod console_sink;
pub mod format;
pub mod recording_sink;
pub mod sink;

pub use console_sink::ConsoleSink;
pub use recording_sink::{RecordedMarker, RecordingSink, SinkCall};
pub use sink::{MarkerPopup, MessageKind, PresentationSink, StatusMessage};
