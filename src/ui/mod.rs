//! UI components and layouts.
//!
//! This module provides Leptos SSR components for rendering the portal,
//! following ShadCN-UI design principles.
//!
//! # Structure
//!
//! - [`document`]: HTML document wrapper
//! - [`layout`]: Auth and protected layout shells
//! - [`pages`]: Page content (login, report an issue, ...)
//! - [`components`]: Reusable ShadCN-style UI components

pub mod components;
pub mod document;
pub mod layout;
pub mod pages;
