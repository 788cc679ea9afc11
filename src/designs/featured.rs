//! Condensed homepage card for the latest news entry.

use chrono::Month;
use log::error;

use crate::config::Config;
use crate::loader::Source;
use crate::models::{Collection, Fragment, MediaKind, Record};
use crate::render::Presenter;
use crate::view::{Container, ViewNode};

use super::{limited, news};

pub const CONTAINER_ID: &str = "featured-news";

#[derive(Debug, Clone)]
pub struct FeaturedCard {
    pub feature_limit: Option<usize>,
    pub year: i32,
}

impl Default for FeaturedCard {
    fn default() -> Self {
        let c = Config::default();
        FeaturedCard {
            feature_limit: c.featured_feature_limit,
            year: c.featured_year,
        }
    }
}

impl FeaturedCard {
    pub fn from_config(config: &Config) -> Self {
        FeaturedCard {
            feature_limit: config.featured_feature_limit,
            year: config.featured_year,
        }
    }
}

/// "JAN" -> "January". Anything chrono can't read passes through.
pub fn full_month(abbr: &str) -> String {
    abbr.trim()
        .parse::<Month>()
        .map(|m| m.name().to_string())
        .unwrap_or_else(|_| abbr.to_string())
}

fn strip_strong(s: &str) -> String {
    s.replace("<strong>", "").replace("</strong>", "")
}

impl Presenter for FeaturedCard {
    fn build_node(&self, record: &Record) -> ViewNode {
        let mut info = ViewNode::element("div").class("featured-info");

        if let Some(tag) = &record.tag {
            info = info.child(
                ViewNode::element("span")
                    .class("featured-tag")
                    .child(ViewNode::fragment(tag)),
            );
        }
        info = info.child(ViewNode::element("h3").child(ViewNode::fragment(&record.title)));

        if let Some(date) = &record.date {
            info = info.child(
                ViewNode::with_text(
                    "p",
                    format!("{} {}, {}", full_month(&date.month), date.day, self.year),
                )
                .class("featured-date"),
            );
        }

        let mut body = ViewNode::element("p");
        for (i, para) in record.content.iter().enumerate() {
            if i > 0 {
                body = body.child(ViewNode::raw("<br>"));
            }
            body = body.child(ViewNode::fragment(para));
        }
        info = info.child(body);

        if let Some(features) = &record.features {
            info = info.child(
                ViewNode::element("ul").class("featured-features").children(
                    limited(&features.items, self.feature_limit)
                        .iter()
                        .map(|f| {
                            let stripped = Fragment {
                                value: strip_strong(&f.value),
                                raw_markup: f.raw_markup,
                            };
                            ViewNode::element("li").child(ViewNode::fragment(&stripped))
                        }),
                ),
            );
        }

        let mut card = ViewNode::element("div").class("featured-card");
        if let Some(media) = record.media.as_ref().filter(|m| m.kind == MediaKind::Image) {
            card = card.child(
                ViewNode::element("div").class("featured-image").child(
                    ViewNode::element("img")
                        .attr("src", media.value.clone())
                        .attr("alt", record.title.value.clone()),
                ),
            );
        }
        card.child(info)
    }
}

/// Mount the first record of `collection`. An empty collection mounts nothing.
pub fn mount(collection: &Collection, container: &mut Container, card: &FeaturedCard) {
    let nodes = collection
        .first()
        .map(|r| vec![card.build_node(r)])
        .unwrap_or_default();
    container.mount(nodes);
}

/// Load the news source and fill the featured container. On failure the
/// container keeps whatever it already had.
pub fn load(source: &Source, config: &Config, container: &mut Container) {
    match news::load_collection(source, config) {
        Ok(collection) => {
            if !collection.is_empty() {
                mount(&collection, container, &FeaturedCard::from_config(config));
            }
        }
        Err(e) => error!("Error loading featured news: {}", e),
    }
}

pub fn container() -> Container {
    Container::new(CONTAINER_ID, "featured-news")
}
