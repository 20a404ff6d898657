//! Filter and search visibility for a rendered catalog.
//!
//! A card is visible when it passes the active category filter and matches
//! the search text. A section is visible when it passes the filter and keeps
//! at least one visible card. Changing the search never changes the filter.

use serde::Serialize;

use crate::catalog::{Catalog, CatalogSection, CategoryId};
use crate::constants::ALL_FILTER_LABEL;
use crate::model::Item;

/// Active category filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Filter {
    #[default]
    All,
    Category(CategoryId),
}

impl Filter {
    /// Resolves a raw filter value against the catalog. Unknown ids select `All`.
    #[must_use]
    pub fn resolve(catalog: &Catalog, raw: Option<&str>) -> Self {
        match raw.and_then(|id| catalog.section(id)) {
            Some(section) => Self::Category(section.id.clone()),
            None => Self::All,
        }
    }

    #[must_use]
    pub fn allows(&self, id: &CategoryId) -> bool {
        match self {
            Self::All => true,
            Self::Category(active) => active == id,
        }
    }

    #[must_use]
    pub fn id(&self) -> Option<&CategoryId> {
        match self {
            Self::All => None,
            Self::Category(id) => Some(id),
        }
    }
}

/// Case-insensitive substring match on an item's name or description.
/// A blank query matches everything.
#[must_use]
pub fn matches_search(item: &Item, query: &str) -> bool {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    item.name.to_lowercase().contains(&needle) || item.desc.to_lowercase().contains(&needle)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterControl {
    pub label: String,
    /// `None` for the "All" control.
    pub id: Option<CategoryId>,
    pub active: bool,
}

#[derive(Debug, Serialize)]
pub struct CardView<'a> {
    pub item: &'a Item,
    pub category: &'a CategoryId,
    pub visible: bool,
}

#[derive(Debug, Serialize)]
pub struct SectionView<'a> {
    pub id: &'a CategoryId,
    pub name: &'a str,
    pub visible: bool,
    pub cards: Vec<CardView<'a>>,
}

impl SectionView<'_> {
    #[must_use]
    pub fn visible_cards(&self) -> usize {
        self.cards.iter().filter(|c| c.visible).count()
    }
}

/// Visibility of every control, section and card for one filter + search pair.
#[derive(Debug, Serialize)]
pub struct CatalogView<'a> {
    pub search: String,
    pub controls: Vec<FilterControl>,
    pub sections: Vec<SectionView<'a>>,
}

impl<'a> CatalogView<'a> {
    #[must_use]
    pub fn new(catalog: &'a Catalog, filter: &Filter, search: &str) -> Self {
        let mut controls = Vec::with_capacity(catalog.sections.len() + 1);
        controls.push(FilterControl {
            label: ALL_FILTER_LABEL.to_owned(),
            id: None,
            active: *filter == Filter::All,
        });
        controls.extend(catalog.sections.iter().map(|s| FilterControl {
            label: s.name.clone(),
            id: Some(s.id.clone()),
            active: filter.id() == Some(&s.id),
        }));

        let sections = catalog.sections.iter().map(|s| section_view(s, filter, search)).collect();

        Self { search: search.to_owned(), controls, sections }
    }

    #[must_use]
    pub fn active_control(&self) -> Option<&FilterControl> {
        self.controls.iter().find(|c| c.active)
    }

    #[must_use]
    pub fn visible_sections(&self) -> usize {
        self.sections.iter().filter(|s| s.visible).count()
    }
}

fn section_view<'a>(section: &'a CatalogSection, filter: &Filter, search: &str) -> SectionView<'a> {
    let allowed = filter.allows(&section.id);
    let cards: Vec<CardView<'a>> = section
        .items
        .iter()
        .map(|item| CardView {
            item,
            category: &section.id,
            visible: allowed && matches_search(item, search),
        })
        .collect();
    let visible = allowed && cards.iter().any(|c| c.visible);
    SectionView { id: &section.id, name: &section.name, visible, cards }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Category;

    fn catalog() -> Catalog {
        let item = |name: &str, path: &str, desc: &str| Item {
            name: name.to_owned(),
            path: path.to_owned(),
            desc: desc.to_owned(),
            inner_desc: None,
        };
        Catalog::merge(
            vec![
                Category {
                    name: "Weather".to_owned(),
                    items: vec![
                        item("Now", "/api/weather/now", "current conditions"),
                        item("Forecast", "/api/weather/forecast", "next days"),
                    ],
                },
                Category {
                    name: "Tools".to_owned(),
                    items: vec![item("Echo", "/api/echo?msg", "repeats a message")],
                },
            ],
            Vec::new(),
        )
    }

    #[test]
    fn all_filter_shows_everything() {
        let catalog = catalog();
        let view = CatalogView::new(&catalog, &Filter::All, "");
        assert_eq!(view.controls.len(), 3);
        assert_eq!(view.active_control().map(|c| c.label.as_str()), Some("All"));
        assert_eq!(view.visible_sections(), 2);
        assert!(view.sections.iter().all(|s| s.cards.iter().all(|c| c.visible)));
    }

    #[test]
    fn exactly_one_control_is_active() {
        let catalog = catalog();
        let id = catalog.sections[0].id.as_str().to_owned();
        let filter = Filter::resolve(&catalog, Some(&id));
        let view = CatalogView::new(&catalog, &filter, "");
        assert_eq!(view.controls.iter().filter(|c| c.active).count(), 1);
        assert_eq!(view.active_control().and_then(|c| c.id.clone()), filter.id().cloned());
    }

    #[test]
    fn category_filter_hides_other_sections() {
        let catalog = catalog();
        let tools = catalog.sections.iter().find(|s| s.name == "Tools").unwrap();
        let filter = Filter::resolve(&catalog, Some(tools.id.as_str()));
        let view = CatalogView::new(&catalog, &filter, "");
        assert_eq!(view.visible_sections(), 1);
        let weather = view.sections.iter().find(|s| s.name == "Weather").unwrap();
        assert!(!weather.visible);
        assert_eq!(weather.visible_cards(), 0);
    }

    #[test]
    fn unknown_filter_resolves_to_all() {
        let catalog = catalog();
        assert_eq!(Filter::resolve(&catalog, Some("nope-9")), Filter::All);
        assert_eq!(Filter::resolve(&catalog, None), Filter::All);
    }

    #[test]
    fn search_matches_name_or_description() {
        let catalog = catalog();
        let view = CatalogView::new(&catalog, &Filter::All, "CONDITIONS");
        let weather = view.sections.iter().find(|s| s.name == "Weather").unwrap();
        assert_eq!(weather.visible_cards(), 1);
        let tools = view.sections.iter().find(|s| s.name == "Tools").unwrap();
        assert!(!tools.visible);
    }

    #[test]
    fn search_respects_active_filter() {
        let catalog = catalog();
        let weather_id = catalog.sections.iter().find(|s| s.name == "Weather").unwrap().id.clone();
        let filter = Filter::Category(weather_id);
        let view = CatalogView::new(&catalog, &filter, "echo");
        assert_eq!(view.visible_sections(), 0);
        assert!(view.active_control().is_some_and(|c| c.label == "Weather"));
    }

    #[test]
    fn blank_search_matches_everything() {
        let item = Item {
            name: "Now".to_owned(),
            path: "/now".to_owned(),
            desc: String::new(),
            inner_desc: None,
        };
        assert!(matches_search(&item, "   "));
        assert!(matches_search(&item, "no"));
        assert!(!matches_search(&item, "later"));
    }
}
