//! Eager reductions.
//!
//! Every function here consumes its source and returns a value: an
//! extreme, a verdict, a bucketed map, or a selected item. Absence is an
//! `Option`, constraint violations and failed lookups are a
//! [`Result`](crate::error::Error), and nothing is pulled beyond what the
//! answer needs: the boolean reductions short-circuit and [`one`] pulls
//! at most two items.
//!
//! # Overview
//!
//! - extrema: [`argmin`], [`argmax`] (+ `_by_key`), [`minmax`],
//!   [`minmax_by_key`]
//! - verdicts: [`all_distinct`], [`all_equal`], [`all_monotone`],
//!   [`all_isinstance`], [`any_isinstance`]
//! - classification: [`groupedby`], [`groupedby_map`], [`partition`],
//!   [`count_items`], [`count_items_by`], [`count_items_eq`]
//! - arithmetic: [`dotproduct`]
//! - selection: [`one`], [`Nth`]

mod extrema;
mod grouping;
mod numeric;
mod predicates;
mod select;

pub use extrema::{argmax, argmax_by_key, argmin, argmin_by_key, minmax, minmax_by_key};
pub use grouping::{
    count_items, count_items_by, count_items_eq, groupedby, groupedby_map, partition,
};
pub use numeric::dotproduct;
pub use predicates::{all_distinct, all_equal, all_isinstance, all_monotone, any_isinstance};
pub use select::{Found, Nth, one};
