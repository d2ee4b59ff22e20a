//! The greedy matching pass.

use std::cmp::Reverse;
use std::collections::{BTreeSet, BinaryHeap};

use rg_core::{ReceiverId, SenderId};
use rg_inventory::{Quantity, Receiver, Sender};
use tracing::{debug, info, warn};

use crate::{Match, MatchNotice, MatchReport};

/// Match sender stock to receiver needs, mutating both rosters in place.
///
/// Resources are processed in ascending name order.  For each one:
///
/// 1. Max-heaps of senders holding it and receivers needing it, keyed by
///    quantity.  Equal quantities pop in roster order (lower index first).
/// 2. Pop the neediest receiver.  With no stock left anywhere, report
///    [`MatchNotice::UnsatisfiableDemand`] and move on.
/// 3. Pop the best-stocked sender.  If it covers the need, transfer the full
///    need, drop the receiver's entry, and re-queue the sender if anything is
///    left.
/// 4. Otherwise transfer everything the sender has, zero it (not re-queued),
///    report [`MatchNotice::PartialFulfillment`], and re-queue the receiver
///    with its remaining need.
///
/// Ids in the returned matches are indices into `senders` / `receivers`.
pub fn match_resources(senders: &mut [Sender], receivers: &mut [Receiver]) -> MatchReport {
    let mut report = MatchReport::default();

    let resources: BTreeSet<String> = receivers
        .iter()
        .flat_map(|r| r.needs.iter())
        .filter(|&(_, &q)| q > 0)
        .map(|(name, _)| name.clone())
        .collect();

    for resource in &resources {
        match_one(resource, senders, receivers, &mut report);
    }

    info!(
        resources = resources.len(),
        matches = report.matches.len(),
        unsatisfiable = report.unsatisfiable().count(),
        partial = report.partials().count(),
        "matching complete"
    );
    report
}

fn match_one(resource: &str, senders: &mut [Sender], receivers: &mut [Receiver], report: &mut MatchReport) {
    // (quantity, Reverse(id)): largest quantity first, then lowest id.
    let mut supply: BinaryHeap<(Quantity, Reverse<SenderId>)> = senders
        .iter()
        .enumerate()
        .filter_map(|(i, s)| {
            let q = s.quantity(resource);
            (q > 0).then_some((q, Reverse(SenderId(i as u32))))
        })
        .collect();

    let mut demand: BinaryHeap<(Quantity, Reverse<ReceiverId>)> = receivers
        .iter()
        .enumerate()
        .filter_map(|(i, r)| {
            let q = r.need(resource);
            (q > 0).then_some((q, Reverse(ReceiverId(i as u32))))
        })
        .collect();

    debug!(resource, senders = supply.len(), receivers = demand.len(), "matching resource");

    while let Some((need, Reverse(rid))) = demand.pop() {
        let receiver = &mut receivers[rid.index()];

        let Some((available, Reverse(sid))) = supply.pop() else {
            warn!(receiver = %receiver.name, resource, unmet = need, "demand cannot be met");
            report.notices.push(MatchNotice::UnsatisfiableDemand {
                receiver: rid,
                resource: resource.to_owned(),
                unmet:    need,
            });
            continue;
        };
        let sender = &mut senders[sid.index()];

        if available >= need {
            report.matches.push(Match {
                sender:   sid,
                receiver: rid,
                resource: resource.to_owned(),
                quantity: need,
            });
            let left = available - need;
            sender.resources.insert(resource.to_owned(), left);
            receiver.needs.remove(resource);
            if left > 0 {
                supply.push((left, Reverse(sid)));
            }
        } else {
            report.matches.push(Match {
                sender:   sid,
                receiver: rid,
                resource: resource.to_owned(),
                quantity: available,
            });
            let remaining = need - available;
            sender.resources.insert(resource.to_owned(), 0);
            receiver.needs.insert(resource.to_owned(), remaining);

            info!(
                sender = %sender.name,
                receiver = %receiver.name,
                resource,
                supplied = available,
                remaining,
                "partial fulfilment"
            );
            report.notices.push(MatchNotice::PartialFulfillment {
                sender:    sid,
                receiver:  rid,
                resource:  resource.to_owned(),
                supplied:  available,
                remaining,
            });
            demand.push((remaining, Reverse(rid)));
        }
    }
}
