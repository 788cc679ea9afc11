//! Concrete presenters for each render target.
//! `news` is the full listing, `gallery` the artwork grids, `featured`
//! the condensed homepage card.

pub mod featured;
pub mod gallery;
pub mod news;

use crate::models::Fragment;

/// First `limit` items, or all of them when `limit` is `None`.
pub(crate) fn limited(items: &[Fragment], limit: Option<usize>) -> &[Fragment] {
    match limit {
        Some(n) if n < items.len() => &items[..n],
        _ => items,
    }
}
