//! Event logging for stream auditing and replay diagnostics.
//!
//! This module defines the Event enum which captures every stream
//! lifecycle change made by the `StreamManager`. Events enable:
//! - Debugging desyncs (which stream was replaced or snapped, and when)
//! - Auditing restores against a recorded trace
//! - Analysis of generation output (map size, fallback rooms)
//!
//! Individual draws are never logged; only stream lifecycle changes.
//!
//! # Example
//!
//! ```rust
//! use spire_seed_core::models::Event;
//! use spire_seed_core::streams::StreamName;
//!
//! let event = Event::CounterSnapped {
//!     floor: 17,
//!     stream: StreamName::Card,
//!     from: 120,
//!     to: 250,
//! };
//!
//! assert_eq!(event.floor(), 17);
//! assert_eq!(event.event_type(), "CounterSnapped");
//! ```

use crate::streams::StreamName;
use serde::Serialize;

/// Stream lifecycle event.
///
/// All events carry the floor they happened on for temporal ordering.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum Event {
    /// Stream replaced by a fresh one at counter 0
    StreamReseeded {
        floor: u32,
        stream: StreamName,
        seed: i64,
    },

    /// Counter advanced to an act-transition checkpoint
    CounterSnapped {
        floor: u32,
        stream: StreamName,
        from: u32,
        to: u32,
    },

    /// New act entered
    ActEntered { floor: u32, act: u8, map_seed: i64 },

    /// Manager rebuilt from a snapshot or checkpoint by counter replay
    Restored {
        floor: u32,
        act: u8,
        replayed_draws: u64,
    },

    /// Act map generated from the map stream
    MapGenerated {
        floor: u32,
        act: u8,
        nodes: usize,
        edges: usize,
        fallback_rooms: usize,
        surplus_rooms: usize,
    },
}

impl Event {
    /// Floor the event happened on
    pub fn floor(&self) -> u32 {
        match self {
            Event::StreamReseeded { floor, .. } => *floor,
            Event::CounterSnapped { floor, .. } => *floor,
            Event::ActEntered { floor, .. } => *floor,
            Event::Restored { floor, .. } => *floor,
            Event::MapGenerated { floor, .. } => *floor,
        }
    }

    /// Short name of the event type
    pub fn event_type(&self) -> &'static str {
        match self {
            Event::StreamReseeded { .. } => "StreamReseeded",
            Event::CounterSnapped { .. } => "CounterSnapped",
            Event::ActEntered { .. } => "ActEntered",
            Event::Restored { .. } => "Restored",
            Event::MapGenerated { .. } => "MapGenerated",
        }
    }

    /// Stream the event concerns, if it concerns exactly one
    pub fn stream(&self) -> Option<StreamName> {
        match self {
            Event::StreamReseeded { stream, .. } => Some(*stream),
            Event::CounterSnapped { stream, .. } => Some(*stream),
            Event::ActEntered { .. } | Event::MapGenerated { .. } => Some(StreamName::Map),
            Event::Restored { .. } => None,
        }
    }
}

/// Event log for storing and querying stream events.
///
/// This is a simple wrapper around Vec<Event> with convenience methods.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct EventLog {
    events: Vec<Event>,
}

impl EventLog {
    /// Create a new empty event log
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Add an event to the log
    pub fn log(&mut self, event: Event) {
        self.events.push(event);
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Events logged after the first `len`; empty if `len` is past the end
    pub fn events_since(&self, len: usize) -> &[Event] {
        self.events.get(len..).unwrap_or(&[])
    }

    /// Get events logged on a specific floor
    pub fn events_on_floor(&self, floor: u32) -> Vec<&Event> {
        self.events.iter().filter(|e| e.floor() == floor).collect()
    }

    /// Get events of a specific type
    pub fn events_of_type(&self, event_type: &str) -> Vec<&Event> {
        self.events
            .iter()
            .filter(|e| e.event_type() == event_type)
            .collect()
    }

    /// Get events for a specific stream
    pub fn events_for_stream(&self, stream: StreamName) -> Vec<&Event> {
        self.events
            .iter()
            .filter(|e| e.stream() == Some(stream))
            .collect()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}
