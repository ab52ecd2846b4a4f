// SPDX-License-Identifier: MPL-2.0
//! `iced_hud` provides transient notification overlays for Iced
//! applications: queued HUD banners and broadcast toasts, drawn above every
//! other layer without blocking interaction with the content underneath.

#![doc(html_root_url = "https://docs.rs/iced_hud/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod ui;
