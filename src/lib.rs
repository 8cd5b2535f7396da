//! # Loomdex
//!
//! Autocomplete lookup service for a textile quality/color catalog.
//!
//! Loomdex resolves partial text queries against quality master records
//! (short codes plus free-text aliases) and their color variants,
//! returning bounded suggestion lists over a small HTTP surface built
//! for cross-origin autocomplete widgets.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────┐   ┌─────────────────┐   ┌──────────┐
//! │   HTTP   │──▶│ Lookup Services │──▶│  SQLite   │
//! │ boundary │   │ colors/qualities│   │  catalog  │
//! └──────────┘   └─────────────────┘   └──────────┘
//!                        │
//!                        ▼
//!                ┌───────────────┐
//!                │ Normalization │
//!                │  & matching   │
//!                └───────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```bash
//! loomdex init                      # create database
//! loomdex import catalog.json       # load master data
//! loomdex search qualities "cott"
//! loomdex serve                     # start HTTP server
//! ```
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | TOML configuration parsing |
//! | [`models`] | Catalog record types |
//! | [`matching`] | Case-insensitive substring and alias predicates |
//! | [`catalog`] | Read-only catalog trait, SQLite and in-memory backends |
//! | [`lookup`] | Color and quality lookup services |
//! | [`server`] | Autocomplete HTTP boundary |
//! | [`search`] | CLI search command |
//! | [`import`] | Catalog master-data import |
//! | [`db`] | Database connection |
//! | [`migrate`] | Schema migrations |

pub mod catalog;
pub mod config;
pub mod db;
pub mod import;
pub mod lookup;
pub mod matching;
pub mod migrate;
pub mod models;
pub mod search;
pub mod server;
