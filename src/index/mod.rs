//! Certificate index and domain resolution.
//!
//! The index is the ordered concatenation of every source's records:
//! configured source order first, then document order. Resolution is a
//! linear scan and the first record listing the domain wins, so a domain
//! present in two sources always resolves to the earlier-configured one.

pub mod structs;

pub mod impls;
