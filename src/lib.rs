//! money-manager - personal expense tracker
//!
//! This library records spending events, filters them by calendar period and
//! summarizes them by category. The heart of it is [`container::ExpensesContainer`],
//! a single-task state holder that turns user intents into storage calls and
//! publishes the resulting screen state.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `logging`: tracing subscriber setup
//! - `models`: Expense, category and period types
//! - `time`: Clock abstraction
//! - `storage`: Expense store contract with JSON and in-memory backends
//! - `services`: Use-cases, period filter and category summary
//! - `container`: Intent-driven state container
//! - `cli` / `display`: Command-line front end
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use money_manager::config::{ManagerPaths, Settings};
//! use money_manager::container::ExpensesContainer;
//! use money_manager::services::ExpenseUseCases;
//! use money_manager::storage::JsonExpenseStore;
//! use money_manager::time::SystemClock;
//!
//! let paths = ManagerPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let store = Arc::new(JsonExpenseStore::open(&paths, &settings.store_name));
//! let container = ExpensesContainer::new(
//!     ExpenseUseCases::new(store),
//!     Arc::new(SystemClock),
//!     settings.default_period,
//! );
//! ```

pub mod cli;
pub mod config;
pub mod container;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod services;
pub mod storage;
pub mod time;

pub use error::{MoneyManagerError, MoneyManagerResult};
