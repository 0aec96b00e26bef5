//! Lazy iterator adaptors.
//!
//! Every adaptor here is a struct wrapping its source(s) and implementing
//! [`Iterator`]; nothing is pulled from upstream until the adaptor itself
//! is advanced. Constructors take any [`IntoIterator`], validate their
//! numeric parameters eagerly (returning [`Error`](crate::error::Error)
//! where a parameter can be out of range), and size hints propagate
//! upstream bounds with saturating and checked arithmetic.
//!
//! # Overview
//!
//! - reshaping: [`grouper`], [`successive`], [`split`], [`split_by`],
//!   [`deepflatten`]
//! - interleaving: [`merge`], [`merge_by_key`], [`roundrobin`],
//!   [`intersperse`]
//! - filtering: [`unique_everseen`], [`duplicates`], [`unique_justseen`],
//!   [`starfilter`], [`clamp`]
//! - element-wise: [`accumulate`], [`replicate`], [`sideeffects`]
//! - sources: [`tabulate`], [`applyfunc`], [`iter_except`]
//!
//! Adaptors whose private state is worth carrying across process
//! boundaries (resumable pipelines) expose state accessor pairs such as
//! [`Intersperse::state`] and [`Intersperse::set_state`]; the setters
//! validate and leave the instance unchanged on error.

mod accumulate;
mod clamp;
mod deepflatten;
mod grouper;
mod intersperse;
mod merge;
mod replicate;
mod roundrobin;
mod sideeffects;
mod sources;
mod split;
mod starfilter;
mod successive;
mod unique;

pub use accumulate::{Accumulate, accumulate, accumulate_with};
pub use clamp::{Clamp, clamp};
pub use deepflatten::{DEFAULT_RECURSION_LIMIT, DeepFlatten, Nested, deepflatten};
pub use grouper::{Grouper, grouper};
pub use intersperse::{Intersperse, intersperse};
pub use merge::{ItemIdxKey, Merge, merge, merge_by_key};
pub use replicate::{Replicate, replicate};
pub use roundrobin::{RoundRobin, roundrobin};
pub use sideeffects::{SideEffects, sideeffects, sideeffects_every};
pub use sources::{ApplyFunc, IterExcept, Tabulate, applyfunc, iter_except, tabulate};
pub use split::{Keep, Split, split, split_by};
pub use starfilter::{StarFilter, starfilter};
pub use successive::{Successive, successive};
pub use unique::{
    Duplicates, UniqueEverseen, UniqueJustseen, duplicates, duplicates_by, unique_everseen,
    unique_everseen_by, unique_justseen, unique_justseen_by,
};
