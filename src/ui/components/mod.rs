//! ShadCN-style reusable UI components.
//!
//! This module provides a set of composable, accessible UI components
//! inspired by shadcn/ui, rendered via Leptos SSR.
//!
//! # Components
//!
//! - [`Button`], [`ButtonLink`]: Clickable button with variants, and a link styled as one
//! - [`Card`], [`CardHeader`], [`CardContent`]: Card container
//! - [`Input`], [`Textarea`], [`Checkbox`]: Form controls
//! - [`Label`]: Form field label
//! - [`Separator`]: Visual separator line
//! - [`Icon`]: SVG icons for symbolic [`crate::navigation::IconId`]s

mod button;
mod card;
mod icons;
mod input;
mod label;
mod separator;

pub use button::{Button, ButtonLink, ButtonSize, ButtonVariant};
pub use card::{Card, CardContent, CardHeader};
pub use icons::Icon;
pub use input::{Checkbox, Input, Textarea};
pub use label::Label;
pub use separator::Separator;
