//! Reusable Yew components for the profile page.

pub(crate) mod action_menu;
pub(crate) mod modal;
pub(crate) mod notice;
