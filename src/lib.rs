//! Konstudio content engine.
//! Loads news and gallery JSON, turns records into view trees and mounts
//! them into containers, re-rendering from the cached collection whenever
//! the category filter changes.

pub mod config;
pub mod designs;
pub mod loader;
pub mod models;
pub mod render;
pub mod view;


pub use loader::{load, LoadError, Source};
pub use models::{Collection, Filter, Record};
pub use render::{render, Page, Presenter, Section};
pub use view::{Container, ViewNode};
