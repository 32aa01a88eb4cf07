pub mod event;
pub mod sink;

pub use event::{NumericEvent, PassContext, Phase};
pub use sink::{DiagnosticSink, LogSink, RecordingSink};
