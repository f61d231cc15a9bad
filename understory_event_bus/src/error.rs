// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use thiserror::Error;

/// Reasons a subscription can be rejected.
///
/// A rejected subscription leaves the bus exactly as it was.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error)]
pub enum SubscribeError {
    /// The event name was empty.
    #[error("event name is empty")]
    EmptyName,
    /// The handler had already been dropped by its owner.
    #[error("event handler has already been dropped")]
    HandlerDropped,
    /// The bus already holds `capacity` subscriptions.
    #[error("event bus is full ({capacity} subscriptions)")]
    CapacityExhausted {
        /// Capacity the bus was created with.
        capacity: usize,
    },
}
