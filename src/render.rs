use log::{debug, error, warn};

use crate::loader::LoadError;
use crate::models::filter::ALL;
use crate::models::{Collection, Filter, Record};
use crate::view::{Container, ViewNode};

/// Maps one record to its view node. Implementations must be pure:
/// the same record always yields the same tree.
pub trait Presenter {
    fn build_node(&self, record: &Record) -> ViewNode;
}

/// Clear `container` and mount one node per record matching `predicate`,
/// in collection order. Never fetches; calling it twice with the same
/// arguments leaves the container in the same state.
pub fn render<P>(
    collection: &Collection,
    predicate: P,
    container: &mut Container,
    presenter: &dyn Presenter,
) where
    P: Fn(&Record) -> bool,
{
    let nodes: Vec<ViewNode> = collection
        .iter()
        .filter(|r| predicate(r))
        .map(|r| presenter.build_node(r))
        .collect();
    debug!(
        "Rendering {} of {} records into #{}",
        nodes.len(),
        collection.len(),
        container.id
    );
    container.mount(nodes);
}

// ── Filter controls ───────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterControl {
    pub value: String,
    pub label: String,
    pub active: bool,
}

/// Mutually exclusive selector controls, one per filter value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterControls {
    controls: Vec<FilterControl>,
}

impl FilterControls {
    /// `all` first, then every category in first-seen order across `collections`.
    pub fn from_collections(collections: &[&Collection]) -> Self {
        let mut values: Vec<&str> = vec![ALL];
        for col in collections {
            for cat in col.categories() {
                if !values.contains(&cat) {
                    values.push(cat);
                }
            }
        }
        let controls = values
            .into_iter()
            .map(|v| FilterControl {
                value: v.to_string(),
                label: label_for(v),
                active: v == ALL,
            })
            .collect();
        FilterControls { controls }
    }

    pub fn contains(&self, value: &str) -> bool {
        self.controls.iter().any(|c| c.value == value)
    }

    /// Mark the control for `value` active and every other one inactive.
    /// Returns false (and changes nothing) if no control carries `value`.
    pub fn select(&mut self, value: &str) -> bool {
        if !self.contains(value) {
            return false;
        }
        for c in &mut self.controls {
            c.active = c.value == value;
        }
        true
    }

    pub fn active(&self) -> Option<&str> {
        self.controls
            .iter()
            .find(|c| c.active)
            .map(|c| c.value.as_str())
    }

    pub fn values(&self) -> Vec<&str> {
        self.controls.iter().map(|c| c.value.as_str()).collect()
    }

    pub fn controls(&self) -> &[FilterControl] {
        &self.controls
    }

    pub fn to_node(&self) -> ViewNode {
        ViewNode::element("nav")
            .class("filter-tabs")
            .children(self.controls.iter().map(|c| {
                let class = if c.active {
                    "filter-tab active"
                } else {
                    "filter-tab"
                };
                ViewNode::with_text("button", c.label.clone())
                    .class(class)
                    .attr("data-filter", c.value.clone())
            }))
    }
}

fn label_for(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

// ── Sections and pages ────────────────────────────────

/// One collection bound to the container it renders into.
/// Sections of a failed page carry no presenter and never render.
pub struct Section {
    pub collection: Collection,
    pub container: Container,
    presenter: Option<Box<dyn Presenter>>,
}

impl Section {
    pub fn new(
        collection: Collection,
        container: Container,
        presenter: Box<dyn Presenter>,
    ) -> Self {
        Section {
            collection,
            container,
            presenter: Some(presenter),
        }
    }

    fn placeholder(container: Container) -> Self {
        Section {
            collection: Collection::default(),
            container,
            presenter: None,
        }
    }

    pub fn render(&mut self, filter: &Filter) {
        if let Some(presenter) = &self.presenter {
            render(
                &self.collection,
                filter.predicate(),
                &mut self.container,
                presenter.as_ref(),
            );
        }
    }
}

/// Owns the cached collections and the active filter for one page.
/// Filter changes re-render from the cache only.
pub struct Page {
    sections: Vec<Section>,
    filter: Filter,
    controls: FilterControls,
    failure: Option<String>,
}

impl Page {
    /// Build a page and render every section with the `all` filter.
    pub fn new(sections: Vec<Section>) -> Self {
        let controls = {
            let cols: Vec<&Collection> = sections.iter().map(|s| &s.collection).collect();
            FilterControls::from_collections(&cols)
        };
        let mut page = Page {
            sections,
            filter: Filter::All,
            controls,
            failure: None,
        };
        page.render();
        page
    }

    /// A page whose data never arrived: every container shows `fallback`.
    pub fn failed(containers: Vec<Container>, err: &LoadError, fallback: &str) -> Self {
        error!("Error loading content: {}", err);
        let mut sections: Vec<Section> = containers
            .into_iter()
            .map(Section::placeholder)
            .collect();
        for s in &mut sections {
            s.container.show_fallback(fallback);
        }
        Page {
            sections,
            filter: Filter::All,
            controls: FilterControls::from_collections(&[]),
            failure: Some(err.to_string()),
        }
    }

    pub fn render(&mut self) {
        if self.failure.is_some() {
            return;
        }
        for s in &mut self.sections {
            s.render(&self.filter);
        }
    }

    /// Switch the active filter and re-render from the cached collections.
    pub fn set_filter(&mut self, value: &str) -> Result<(), String> {
        if let Some(reason) = &self.failure {
            return Err(format!("No content loaded ({})", reason));
        }
        let filter = Filter::parse(value);
        if !self.controls.select(filter.value()) {
            warn!("Ignoring unknown filter value: {}", value);
            return Err(format!("Unknown filter: {}", value));
        }
        self.filter = filter;
        self.render();
        Ok(())
    }

    pub fn filter(&self) -> &Filter {
        &self.filter
    }

    pub fn controls(&self) -> &FilterControls {
        &self.controls
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn container(&self, id: &str) -> Option<&Container> {
        self.sections
            .iter()
            .map(|s| &s.container)
            .find(|c| c.id == id)
    }

    pub fn is_failed(&self) -> bool {
        self.failure.is_some()
    }

    /// Filter controls followed by every container.
    pub fn to_html(&self) -> String {
        let mut html = String::new();
        if self.failure.is_none() {
            html.push_str(&self.controls.to_node().to_html());
            html.push('\n');
        }
        for s in &self.sections {
            html.push_str(&s.container.to_html());
            html.push('\n');
        }
        html
    }
}
