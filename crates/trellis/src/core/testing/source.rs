use std::collections::VecDeque;

use crate::{backend::EventSource, event::Event};

/// An event source that plays back a fixed script, one batch of events per
/// frame. Once the script runs out it reports the window closing, so an app
/// driven by [`App::run`](crate::App::run) stops on its own.
#[derive(Debug, Default)]
pub struct ScriptedSource {
    /// Batches still to deliver.
    frames: VecDeque<Vec<Event>>,
    /// Frames presented so far.
    presented: usize,
}

impl ScriptedSource {
    /// An empty script.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a batch of events, delivered together in one poll.
    pub fn frame(mut self, events: impl IntoIterator<Item = Event>) -> Self {
        self.frames.push_back(events.into_iter().collect());
        self
    }

    /// Append a batch of events to a live source.
    pub fn push_frame(&mut self, events: impl IntoIterator<Item = Event>) {
        self.frames.push_back(events.into_iter().collect());
    }

    /// Batches not yet delivered.
    pub fn remaining(&self) -> usize {
        self.frames.len()
    }

    /// Number of frames presented.
    pub fn presented(&self) -> usize {
        self.presented
    }
}

impl EventSource for ScriptedSource {
    fn poll(&mut self) -> Vec<Event> {
        self.frames
            .pop_front()
            .unwrap_or_else(|| vec![Event::WindowClosed])
    }

    fn present(&mut self) {
        self.presented += 1;
    }
}
