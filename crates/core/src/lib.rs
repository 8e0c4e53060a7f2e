//! Functional core for the RoomMe household calendar.
//!
//! Everything in this crate is pure and synchronous: month-grid generation,
//! event binning, query filtering, and request validation are all plain
//! transformations over their arguments, with no I/O, no clock reads, and no
//! shared state. The surrounding shell (data fetching, rendering) lives in
//! the `roomme` binary crate.

pub mod calendar;
