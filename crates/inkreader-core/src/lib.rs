//! Navigation core for the image-page e-reader.
//!
//! Holds the book/page catalog, the cursors over it, the goto entry buffer
//! and the touch-driven UI state machine. Display, touch and filesystem access
//! are reached through the collaborator traits in [`catalog`], [`input`] and
//! [`render`].

#![cfg_attr(not(test), no_std)]
#![forbid(unsafe_code)]

pub mod app;
pub mod catalog;
pub mod config;
pub mod cursor;
pub mod goto_buffer;
pub mod input;
pub mod layout;
pub mod natural;
pub mod render;
pub mod text_policy;
