//! # bbdb Architecture
//!
//! bbdb stores named records ("domains") in a local SQLite file and exposes
//! add, list and delete over command-line arguments or line-oriented stdin.
//! Like most of our tools it is a small library with a thin CLI client.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Mode selection, stdin loop, console rendering            │
//! │  - The ONLY place that knows about stdout/stderr            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs) + Tokenizer (tokenize.rs)               │
//! │  - Owns the connection and the handler registry             │
//! │  - Resolves the handler, validates the action               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One function per operation, returns CmdResult            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Handlers (modules/) over Storage (store/)                  │
//! │  - Module trait, Registry, Domains                          │
//! │  - SQLite open/ping and error classification                │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Input Grammar
//!
//! Every command, whether it came from argv or stdin, is one line of the form
//! `action type [argument]`. Argument mode joins argv into such a line so both
//! paths share [`tokenize::tokenize`].
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: add / all / delete / init
//! - [`modules`]: Handler contract, registry and the `domains` handler
//! - [`store`]: SQLite connection helpers
//! - [`tokenize`]: Line tokenizer
//! - [`model`]: `Command` and `Action`
//! - [`config`]: Configuration file
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod modules;
pub mod store;
pub mod tokenize;
