//! # Notekeep Architecture
//!
//! Notekeep is a **UI-agnostic note collection manager**. It owns an ordered list of short
//! notes, persists the whole list to a key-value backend after every change, and answers the
//! queries a display needs (search, pinned-first ordering, archive hiding).
//!
//! It has no rendering of its own. A front-end (web view, TUI, desktop widget) calls into
//! [`api::NotesApi`] in response to user actions and draws what the queries return.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Fires the re-render signal after mutations               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure business logic, one module per operation            │
//! │  - Returns structured `CmdResult`s, never prints            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - NoteStore: the ordered collection, load + save           │
//! │  - StorageBackend trait: FsBackend, MemBackend (testing)    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Positions and Ids
//!
//! Notes live in **storage order** (insertion order). Display order is different: pinned
//! notes float to the top and archived notes are hidden. Mutations therefore never take a
//! display row number. They take a [`index::NoteSelector`], either a storage position or the
//! note's session [`model::NoteId`], and every view hands back [`index::DisplayNote`]s that
//! carry both.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`store`]: The note collection and its storage backends
//! - [`model`]: Core data types (`Note`, `NoteId`, `NoteDraft`)
//! - [`index`]: Selectors and display entries
//! - [`config`]: Choice sets, defaults and the storage key
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod index;
pub mod model;
pub mod store;
