//! Adapters — concrete implementations of the port traits.
//!
//! | Adapter    | Implements                     | Connects to               |
//! |------------|--------------------------------|---------------------------|
//! | `channels` | CommandTx, CommandRx           | embassy-sync channel (1)  |
//! |            | EventTx, EventRx               | embassy-sync channel (5)  |
//! | `log_sink` | EventSink                      | Serial log output         |
//! | `time`     | Clock                          | ESP32 system timer        |

pub mod channels;
pub mod log_sink;
pub mod time;
