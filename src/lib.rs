//! Core geometric primitives for the lumo renderer.
//!
//! Everything in this crate is a pure function of its inputs: ray/box and
//! ray/sphere intersection, point-to-box distance, static and motion-blurred
//! sphere/box overlap, cosine-weighted hemisphere sampling and the emblem
//! point classifier. One logical invocation per ray; no shared mutable state.

pub mod emblem;
pub mod geometry;
pub mod lumo;
pub mod rng;
pub mod sampling;
