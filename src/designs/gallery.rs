use crate::config::Config;
use crate::loader::{self, LoadError, Source};
use crate::models::{gallery, Collection, MediaKind, Record};
use crate::render::{Page, Presenter, Section};
use crate::view::{Container, ViewNode};

pub const OFFICIAL_ID: &str = "official-gallery";
pub const FANART_ID: &str = "fanart-gallery";

/// Artwork card. Fan art cards get an extra class.
#[derive(Debug, Clone, Default)]
pub struct ArtCard {
    pub fan_art: bool,
}

impl Presenter for ArtCard {
    fn build_node(&self, record: &Record) -> ViewNode {
        let class = if self.fan_art {
            "gallery-item fanart-item"
        } else {
            "gallery-item"
        };
        let mut item = ViewNode::element("div").class(class);
        if let Some(cat) = record.category() {
            item = item.attr("data-category", cat);
        }

        let mut image = ViewNode::element("div").class("gallery-image");
        if let Some(media) = &record.media {
            image = match media.kind {
                MediaKind::Emoji => image.child(ViewNode::text(media.value.clone())),
                MediaKind::Image => image.child(
                    ViewNode::element("img")
                        .class("gallery-Art")
                        .attr("src", media.value.clone())
                        .attr("alt", record.title.value.clone()),
                ),
            };
        }

        let label = if record.downloadable {
            "Download HD"
        } else {
            "View Full"
        };
        let overlay = ViewNode::element("div")
            .class("gallery-overlay")
            .child(ViewNode::with_text("button", label).class("gallery-download"));

        let info = ViewNode::element("div")
            .class("gallery-info")
            .child(ViewNode::element("h3").child(ViewNode::fragment(&record.title)))
            .children(
                record
                    .content
                    .iter()
                    .map(|d| ViewNode::element("p").child(ViewNode::fragment(d))),
            );

        item.child(image).child(overlay).child(info)
    }
}

fn containers() -> (Container, Container) {
    (
        Container::new(OFFICIAL_ID, "gallery-grid"),
        Container::new(FANART_ID, "gallery-grid"),
    )
}

/// Both grids share one filter, as on the gallery page.
pub fn page(result: Result<(Collection, Collection), LoadError>, config: &Config) -> Page {
    let (official_grid, fan_grid) = containers();
    match result {
        Ok((official, fan)) => Page::new(vec![
            Section::new(official, official_grid, Box::new(ArtCard { fan_art: false })),
            Section::new(fan, fan_grid, Box::new(ArtCard { fan_art: true })),
        ]),
        Err(e) => Page::failed(vec![official_grid, fan_grid], &e, &config.gallery_fallback),
    }
}

pub fn load_collections(
    source: &Source,
    config: &Config,
) -> Result<(Collection, Collection), LoadError> {
    let doc = loader::load(source, config.fetch_timeout)?;
    gallery::collections(&doc)
}

pub fn load(source: &Source, config: &Config) -> Page {
    page(load_collections(source, config), config)
}
