use crate::config::Config;
use crate::loader::{self, LoadError, Source};
use crate::models::{news, Collection, Record};
use crate::render::{Page, Presenter, Section};
use crate::view::{Container, ViewNode};

use super::limited;

pub const GRID_ID: &str = "news-grid";

/// Full news listing card.
#[derive(Debug, Clone, Default)]
pub struct NewsCard {
    pub feature_limit: Option<usize>,
}

impl Presenter for NewsCard {
    fn build_node(&self, record: &Record) -> ViewNode {
        let mut item = ViewNode::element("div").class("news-item");
        if let Some(cat) = record.category() {
            item = item.attr("data-category", cat);
        }

        if let Some(date) = &record.date {
            item = item.child(
                ViewNode::element("div")
                    .class("news-date")
                    .child(ViewNode::with_text("span", date.day.clone()).class("news-day"))
                    .child(ViewNode::with_text("span", date.month.clone()).class("news-month")),
            );
        }

        let mut content = ViewNode::element("div")
            .class("news-content")
            .child(ViewNode::element("h3").child(ViewNode::fragment(&record.title)));

        if let Some(tag) = &record.tag {
            content = content.child(
                ViewNode::element("span")
                    .class("news-tag")
                    .child(ViewNode::fragment(tag)),
            );
        }

        content = content.children(
            record
                .content
                .iter()
                .map(|p| ViewNode::element("p").child(ViewNode::fragment(p))),
        );

        if let Some(features) = &record.features {
            if let Some(title) = &features.title {
                content = content.child(
                    ViewNode::element("p")
                        .child(ViewNode::element("strong").child(ViewNode::fragment(title))),
                );
            }
            // present-but-empty still gets its <ul>
            content = content.child(
                ViewNode::element("ul").children(
                    limited(&features.items, self.feature_limit)
                        .iter()
                        .map(|f| ViewNode::element("li").child(ViewNode::fragment(f))),
                ),
            );
        }

        if let Some(footer) = &record.footer {
            content = content.child(ViewNode::element("p").child(ViewNode::fragment(footer)));
        }

        item.child(content)
    }
}

fn container() -> Container {
    Container::new(GRID_ID, "news-grid")
}

/// Page for an already-extracted collection, or the fallback on failure.
pub fn page(result: Result<Collection, LoadError>, config: &Config) -> Page {
    match result {
        Ok(collection) => Page::new(vec![Section::new(
            collection,
            container(),
            Box::new(NewsCard {
                feature_limit: config.news_feature_limit,
            }),
        )]),
        Err(e) => Page::failed(vec![container()], &e, &config.news_fallback),
    }
}

pub fn load_collection(source: &Source, config: &Config) -> Result<Collection, LoadError> {
    let doc = loader::load(source, config.fetch_timeout)?;
    news::collection(&doc)
}

/// Fetch once and build the news page.
pub fn load(source: &Source, config: &Config) -> Page {
    page(load_collection(source, config), config)
}
