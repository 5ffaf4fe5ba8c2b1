// SPDX-License-Identifier: MPL-2.0
//! `cat_gallery` is a desktop gallery for browsing cat breeds, built with the
//! Iced GUI framework.
//!
//! It talks to a remote cat image service over HTTP: pick a breed to see a
//! handful of its pictures with breed details, heart the ones you like, and
//! browse your favourites. Localized with Fluent.

#![doc(html_root_url = "https://docs.rs/cat_gallery/0.1.0")]

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod gallery;
pub mod i18n;
pub mod ui;
