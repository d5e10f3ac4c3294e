//! Actor-facing output channel: chat messages, animations, and facing.
//!
//! Game logic never talks to a network session directly. It emits through
//! the [`Presentation`] trait, which the server front end implements over
//! its client protocol. Two implementations live here:
//! [`RecordingPresentation`] buffers events for assertions in tests, and
//! [`TracePresentation`] writes them to the structured log for headless
//! runs.

use castline_types::{AnimationId, PlayerId, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Output channel for everything an actor sees happen to themselves.
pub trait Presentation {
    /// Send a chat-box message.
    fn send_message(&mut self, text: &str);
    /// Start playing an animation on the actor.
    fn play_animation(&mut self, animation: AnimationId);
    /// Stop whatever animation the actor is playing.
    fn stop_animation(&mut self);
    /// Turn the actor to face a map position.
    fn turn_toward(&mut self, target: Position);
}

/// One emitted presentation event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PresentationEvent {
    /// A chat-box message.
    Message(String),
    /// An animation started.
    Animation(AnimationId),
    /// The current animation stopped.
    AnimationStopped,
    /// The actor turned toward a position.
    FacedToward(Position),
}

/// Presentation that buffers every event in emission order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingPresentation {
    /// Every event emitted so far, oldest first.
    pub events: Vec<PresentationEvent>,
}

impl RecordingPresentation {
    /// Create an empty recording.
    pub const fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// The text of every message emitted so far, oldest first.
    pub fn messages(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|event| match event {
                PresentationEvent::Message(text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Count of animation-start events emitted so far.
    pub fn animations_started(&self) -> usize {
        self.events
            .iter()
            .filter(|event| matches!(event, PresentationEvent::Animation(_)))
            .count()
    }
}

impl Presentation for RecordingPresentation {
    fn send_message(&mut self, text: &str) {
        self.events.push(PresentationEvent::Message(text.to_owned()));
    }

    fn play_animation(&mut self, animation: AnimationId) {
        self.events.push(PresentationEvent::Animation(animation));
    }

    fn stop_animation(&mut self) {
        self.events.push(PresentationEvent::AnimationStopped);
    }

    fn turn_toward(&mut self, target: Position) {
        self.events.push(PresentationEvent::FacedToward(target));
    }
}

/// Presentation that writes events to the structured log.
#[derive(Debug, Clone, Copy)]
pub struct TracePresentation {
    actor: PlayerId,
}

impl TracePresentation {
    /// Create a trace presentation for one actor.
    pub const fn new(actor: PlayerId) -> Self {
        Self { actor }
    }
}

impl Presentation for TracePresentation {
    fn send_message(&mut self, text: &str) {
        info!(actor = %self.actor, message = text, "Chat message");
    }

    fn play_animation(&mut self, animation: AnimationId) {
        debug!(actor = %self.actor, animation = %animation, "Animation started");
    }

    fn stop_animation(&mut self) {
        debug!(actor = %self.actor, "Animation stopped");
    }

    fn turn_toward(&mut self, target: Position) {
        debug!(actor = %self.actor, target = %target, "Faced toward");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_preserves_emission_order() {
        let mut presentation = RecordingPresentation::new();
        presentation.turn_toward(Position::new(1, 2));
        presentation.send_message("You cast out your net...");
        presentation.play_animation(AnimationId::new(620));
        presentation.stop_animation();
        assert_eq!(
            presentation.events,
            vec![
                PresentationEvent::FacedToward(Position::new(1, 2)),
                PresentationEvent::Message(String::from("You cast out your net...")),
                PresentationEvent::Animation(AnimationId::new(620)),
                PresentationEvent::AnimationStopped,
            ]
        );
    }

    #[test]
    fn messages_filters_out_other_events() {
        let mut presentation = RecordingPresentation::new();
        presentation.play_animation(AnimationId::new(618));
        presentation.send_message("You catch a shrimp.");
        presentation.send_message("You catch some bass.");
        assert_eq!(
            presentation.messages(),
            vec!["You catch a shrimp.", "You catch some bass."]
        );
        assert_eq!(presentation.animations_started(), 1);
    }
}
