// SPDX-License-Identifier: MPL-2.0
//! Iced subscription for player notifications.
//!
//! Decoder backends report status changes and progress ticks from their own
//! threads, but UI-facing state is only mutated on the Iced update loop. The
//! bridge is an explicit hand-off, not a lock: the subscription owns a Tokio
//! channel, hands the cloneable sender out in
//! [`SubscriptionEvent::Connected`], and drains the receiver into messages on
//! the UI side.
//!
//! Teardown contract: ending the subscription (a new session id, or the host
//! dropping it) drops the receiver. Every registered sender then fails
//! cheaply and the destroyed sink is never invoked.

use super::PlayerEvent;
use iced::futures::SinkExt;
use iced::stream;
use tokio::sync::mpsc;

/// Buffered capacity of the subscription's output stream.
const EVENT_CHANNEL_CAPACITY: usize = 100;

/// Subscription ID for one playback session.
///
/// Each loaded media item gets a fresh id so the subscription is recreated,
/// detaching the previous session's channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlaybackSessionId(pub u64);

/// Handle for pushing player notifications from any thread.
#[derive(Debug, Clone)]
pub struct PlayerEventSender {
    tx: mpsc::UnboundedSender<PlayerEvent>,
}

impl PlayerEventSender {
    /// Forwards one notification to the UI loop.
    ///
    /// # Errors
    ///
    /// Fails when the subscription has been torn down; the backend should
    /// stop notifying.
    pub fn send(&self, event: PlayerEvent) -> Result<(), String> {
        self.tx
            .send(event)
            .map_err(|_| "playback subscription detached".to_string())
    }
}

/// Messages emitted by the playback subscription.
#[derive(Debug, Clone)]
pub enum SubscriptionEvent {
    /// Subscription started; hand this sender to the player backend.
    Connected(PlayerEventSender),

    /// A player notification, marshalled onto the UI loop.
    Player(PlayerEvent),
}

/// Creates the notification subscription for one playback session.
///
/// The first message is [`SubscriptionEvent::Connected`] carrying the sender
/// the backend registers its callbacks with; every notification pushed
/// through it arrives as [`SubscriptionEvent::Player`] on the update loop.
pub fn playback_events(session_id: u64) -> iced::Subscription<SubscriptionEvent> {
    iced::Subscription::run_with(
        PlaybackSessionId(session_id),
        |_id| {
            stream::channel(EVENT_CHANNEL_CAPACITY, move |mut output: iced::futures::channel::mpsc::Sender<SubscriptionEvent>| async move {
                let (tx, mut rx) = mpsc::unbounded_channel();

                let _ = output
                    .send(SubscriptionEvent::Connected(PlayerEventSender { tx }))
                    .await;

                while let Some(event) = rx.recv().await {
                    if output.send(SubscriptionEvent::Player(event)).await.is_err() {
                        break;
                    }
                }
            })
        },
    )
}
