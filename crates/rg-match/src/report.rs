//! Matcher output types.

use std::fmt;

use rg_core::{ReceiverId, SenderId};
use rg_inventory::{Quantity, Receiver, Sender};

/// One resolved transfer.  `quantity` is always positive.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Match {
    pub sender:   SenderId,
    pub receiver: ReceiverId,
    pub resource: String,
    pub quantity: Quantity,
}

/// Non-fatal conditions raised during matching.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MatchNotice {
    /// No sender had any `resource` left for this receiver; `unmet` units of
    /// its need remain.
    UnsatisfiableDemand {
        receiver: ReceiverId,
        resource: String,
        unmet:    Quantity,
    },

    /// The sender ran out before the receiver's need was covered.  The
    /// receiver goes back in the queue with `remaining`.
    PartialFulfillment {
        sender:    SenderId,
        receiver:  ReceiverId,
        resource:  String,
        supplied:  Quantity,
        remaining: Quantity,
    },
}

impl MatchNotice {
    /// Display adapter that prints roster names in place of ids.  An id with
    /// no entry in the given slice falls back to its own `Display`.
    pub fn named<'a>(&'a self, senders: &'a [Sender], receivers: &'a [Receiver]) -> NamedNotice<'a> {
        NamedNotice { notice: self, senders, receivers }
    }

    fn write_with(
        &self,
        f: &mut fmt::Formatter<'_>,
        sender: impl Fn(SenderId) -> String,
        receiver: impl Fn(ReceiverId) -> String,
    ) -> fmt::Result {
        match self {
            MatchNotice::UnsatisfiableDemand { receiver: r, resource, unmet } => {
                write!(f, "{} cannot get {unmet} {resource}", receiver(*r))
            }
            MatchNotice::PartialFulfillment { sender: s, receiver: r, resource, supplied, remaining } => {
                write!(
                    f,
                    "{} supplied only {supplied} {resource} to {}; {remaining} still needed",
                    sender(*s),
                    receiver(*r)
                )
            }
        }
    }
}

impl fmt::Display for MatchNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_with(f, |s| s.to_string(), |r| r.to_string())
    }
}

/// See [`MatchNotice::named`].
pub struct NamedNotice<'a> {
    notice:    &'a MatchNotice,
    senders:   &'a [Sender],
    receivers: &'a [Receiver],
}

impl fmt::Display for NamedNotice<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.notice.write_with(
            f,
            |s| self.senders.get(s.index()).map_or_else(|| s.to_string(), |x| x.name.clone()),
            |r| self.receivers.get(r.index()).map_or_else(|| r.to_string(), |x| x.name.clone()),
        )
    }
}

/// Everything one matching pass produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchReport {
    /// Transfers in decision order: resources ascending by name, and within a
    /// resource in the order receivers were served.
    pub matches: Vec<Match>,
    /// Notices in the order they were raised.
    pub notices: Vec<MatchNotice>,
}

impl MatchReport {
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Units of `resource` moved by all matches.
    pub fn transferred(&self, resource: &str) -> Quantity {
        self.matches
            .iter()
            .filter(|m| m.resource == resource)
            .map(|m| m.quantity)
            .sum()
    }

    /// Units of `resource` delivered to `receiver`.
    pub fn received(&self, receiver: ReceiverId, resource: &str) -> Quantity {
        self.matches
            .iter()
            .filter(|m| m.receiver == receiver && m.resource == resource)
            .map(|m| m.quantity)
            .sum()
    }

    /// All `UnsatisfiableDemand` notices.
    pub fn unsatisfiable(&self) -> impl Iterator<Item = &MatchNotice> {
        self.notices
            .iter()
            .filter(|n| matches!(n, MatchNotice::UnsatisfiableDemand { .. }))
    }

    /// All `PartialFulfillment` notices.
    pub fn partials(&self) -> impl Iterator<Item = &MatchNotice> {
        self.notices
            .iter()
            .filter(|n| matches!(n, MatchNotice::PartialFulfillment { .. }))
    }
}
