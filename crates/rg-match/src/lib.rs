//! `rg-match` — greedy allocation of sender stock to receiver needs.
//!
//! Each resource type is matched independently: the receiver with the
//! largest outstanding need is served by the sender with the largest stock,
//! repeatedly, until every receiver is either satisfied or reported as
//! unsatisfiable.  The result is a [`MatchReport`]: the transfers in the order
//! they were decided plus the shortfall notices raised along the way.
//!
//! This is a greedy pairing, not an optimal assignment: it ignores transport
//! distance and makes no fairness guarantee.
//!
//! | Module      | Contents                                      |
//! |-------------|-----------------------------------------------|
//! | [`matcher`] | `match_resources`                             |
//! | [`report`]  | `Match`, `MatchNotice`, `MatchReport`         |

pub mod matcher;
pub mod report;


pub use matcher::match_resources;
pub use report::{Match, MatchNotice, MatchReport, NamedNotice};
