//! Inter-task channels.
//!
//! Uses `embassy-sync` bounded channels to connect the three tasks.  Each
//! channel has exactly one producer end and one consumer end; the ends are
//! handed to the tasks at startup and never shared afterwards.
//!
//! ```text
//! ┌───────────────┐  ModeEvent (5)  ┌──────────────┐  DisplayCommand (1)  ┌──────────────┐
//! │ Input Monitor │───────────────▶│  Controller  │─────────────────────▶│   Display    │
//! └───────────────┘                 └──────────────┘                      └──────────────┘
//! ```
//!
//! Tasks are plain threads, so every wait is driven by
//! `futures_lite::future::block_on`.  Bounded waits race the receive
//! against an `async-io-mini` reactor timer.

use core::time::Duration;
use std::sync::Arc;

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use futures_lite::future;
// Time driver behind `async_io_mini::Timer` (std driver on host, esp-idf-svc on device).
use embassy_time as _;

use crate::app::commands::DisplayCommand;
use crate::app::events::ModeEvent;
use crate::app::ports::{CommandRx, CommandTx, EventRx, EventTx};
use crate::config::{DISPLAY_CHANNEL_DEPTH, EVENT_CHANNEL_DEPTH};

pub type DisplayChannel = Channel<CriticalSectionRawMutex, DisplayCommand, DISPLAY_CHANNEL_DEPTH>;
pub type EventChannel = Channel<CriticalSectionRawMutex, ModeEvent, EVENT_CHANNEL_DEPTH>;

/// Both channels, created once at startup.
pub struct SignalChannels {
    display: Arc<DisplayChannel>,
    events: Arc<EventChannel>,
}

/// The four channel ends, one per role.
pub struct ChannelEnds {
    pub event_tx: EventSender,
    pub event_rx: EventReceiver,
    pub display_tx: DisplaySender,
    pub display_rx: DisplayReceiver,
}

impl Default for SignalChannels {
    fn default() -> Self {
        Self::new()
    }
}

impl SignalChannels {
    pub fn new() -> Self {
        Self {
            display: Arc::new(Channel::new()),
            events: Arc::new(Channel::new()),
        }
    }

    /// Hand out the producer and consumer ends.
    pub fn split(self) -> ChannelEnds {
        ChannelEnds {
            event_tx: EventSender(Arc::clone(&self.events)),
            event_rx: EventReceiver(self.events),
            display_tx: DisplaySender(Arc::clone(&self.display)),
            display_rx: DisplayReceiver(self.display),
        }
    }
}

// ── Display channel ends ─────────────────────────────────────

pub struct DisplaySender(Arc<DisplayChannel>);

impl CommandTx for DisplaySender {
    fn send(&mut self, command: DisplayCommand) {
        future::block_on(self.0.send(command));
    }

    fn try_send(&mut self, command: DisplayCommand) -> bool {
        self.0.try_send(command).is_ok()
    }
}

pub struct DisplayReceiver(Arc<DisplayChannel>);

impl CommandRx for DisplayReceiver {
    fn recv(&mut self) -> DisplayCommand {
        future::block_on(self.0.receive())
    }

    fn recv_timeout(&mut self, timeout_ms: u32) -> Option<DisplayCommand> {
        let channel = &self.0;
        future::block_on(future::or(
            async { Some(channel.receive().await) },
            async {
                async_io_mini::Timer::after(Duration::from_millis(u64::from(timeout_ms))).await;
                None
            },
        ))
    }
}

// ── Event channel ends ───────────────────────────────────────

pub struct EventSender(Arc<EventChannel>);

impl EventTx for EventSender {
    fn send(&mut self, event: ModeEvent) {
        future::block_on(self.0.send(event));
    }
}

pub struct EventReceiver(Arc<EventChannel>);

impl EventRx for EventReceiver {
    fn try_recv(&mut self) -> Option<ModeEvent> {
        self.0.try_receive().ok()
    }
}

// ── Tests ────────────────────────────────────────────────────
