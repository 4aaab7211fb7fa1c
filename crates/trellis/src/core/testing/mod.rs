/// Harness for driving an [`App`](crate::App) in tests.
pub mod harness;
/// A renderer that records draw calls.
pub mod render;
/// A scripted event source.
pub mod source;

pub use harness::Harness;
pub use render::{DrawOp, RecordBuf, RecordingRenderer};
pub use source::ScriptedSource;
