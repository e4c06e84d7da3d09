//! Chatolution - a terminal dashboard for editing site content
//!
//! This library provides the section editor behind the Chatolution dashboard:
//! a registry of named site sections, one rich-text document per section with
//! optional image previews and content cards, toolbar formatting commands and
//! the transient UI state around them. It also carries the storefront pieces
//! the site depends on (sign-in and a cart with checkout).
//!
//! # Modules
//!
//! * [`auth`] - Credential and OAuth sign-in flows over an identity provider
//! * [`cart`] - Shopping cart and checkout
//! * [`config`] - Application configuration management
//! * [`editor`] - Section editor state model
//! * [`ui`] - Terminal user interface components

/// Sign-in and registration flows
pub mod auth;

/// Shopping cart, price formatting and checkout
pub mod cart;

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Section editor: tabs, documents, formatting commands and UI state
pub mod editor;

/// Logging utilities for debugging and error tracking
pub mod logger;

/// Terminal user interface components and rendering
pub mod ui;

pub use editor::{DashboardEditor, SectionEditor};
