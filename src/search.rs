use crate::catalog::{Catalog, ServiceRecord};

/// Catalog indices currently shown, in catalog order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilteredView {
    pub indices: Vec<usize>,
    pub results_mode: bool,
}

impl FilteredView {
    pub fn full(catalog: &Catalog) -> Self {
        Self {
            indices: (0..catalog.len()).collect(),
            results_mode: false,
        }
    }

    pub fn services<'a>(&'a self, catalog: &'a Catalog) -> impl Iterator<Item = &'a ServiceRecord> {
        self.indices.iter().filter_map(|&index| catalog.get(index))
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty_state(&self) -> bool {
        self.results_mode && self.indices.is_empty()
    }
}

pub fn search(catalog: &Catalog, query: &str) -> FilteredView {
    if query.trim().is_empty() {
        return FilteredView::full(catalog);
    }

    let needle = query.to_lowercase();
    let indices = catalog
        .records()
        .iter()
        .enumerate()
        .filter(|(_, record)| record_matches(record, &needle))
        .map(|(index, _)| index)
        .collect();

    FilteredView {
        indices,
        results_mode: true,
    }
}

fn record_matches(record: &ServiceRecord, needle: &str) -> bool {
    record
        .keywords
        .iter()
        .any(|keyword| keyword.to_lowercase().contains(needle))
        || record.title.to_lowercase().contains(needle)
        || record.description.to_lowercase().contains(needle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Icon;

    fn record(id: &str, title: &str, description: &str, keywords: &[&str]) -> ServiceRecord {
        ServiceRecord {
            id: id.to_owned(),
            title: title.to_owned(),
            description: description.to_owned(),
            keywords: keywords.iter().map(|keyword| (*keyword).to_owned()).collect(),
            price: None,
            duration: None,
            icon: Icon::Globe,
        }
    }

    fn two_services() -> Catalog {
        Catalog::new(vec![
            record("site", "Site web", "", &["site", "web"]),
            record("app", "App mobile", "", &["mobile", "app"]),
        ])
    }

    fn titles(view: &FilteredView, catalog: &Catalog) -> Vec<String> {
        view.services(catalog).map(|service| service.title.clone()).collect()
    }

    #[test]
    fn matching_query_enters_results_mode() {
        let catalog = two_services();
        let view = search(&catalog, "web");
        assert_eq!(titles(&view, &catalog), vec!["Site web"]);
        assert!(view.results_mode);
        assert!(!view.is_empty_state());
    }

    #[test]
    fn unmatched_query_is_empty_state() {
        let catalog = two_services();
        let view = search(&catalog, "xyz");
        assert!(view.indices.is_empty());
        assert!(view.results_mode);
        assert!(view.is_empty_state());
    }

    #[test]
    fn empty_query_returns_everything() {
        let catalog = two_services();
        for query in ["", "   ", "\t\n"] {
            let view = search(&catalog, query);
            assert_eq!(view, FilteredView::full(&catalog));
            assert!(!view.results_mode);
        }
    }

    #[test]
    fn empty_catalog_with_empty_query_is_not_empty_state() {
        let catalog = Catalog::default();
        let view = search(&catalog, "");
        assert!(view.indices.is_empty());
        assert!(!view.is_empty_state());
    }

    #[test]
    fn matching_ignores_case() {
        let catalog = two_services();
        assert_eq!(titles(&search(&catalog, "MOBILE"), &catalog), vec!["App mobile"]);
        assert_eq!(titles(&search(&catalog, "Site WEB"), &catalog), vec!["Site web"]);
    }

    #[test]
    fn matches_description_and_keywords() {
        let catalog = Catalog::new(vec![
            record("a", "Alpha", "Refonte de boutique", &[]),
            record("b", "Beta", "", &["Référencement"]),
            record("c", "Gamma", "", &[]),
        ]);
        assert_eq!(titles(&search(&catalog, "boutique"), &catalog), vec!["Alpha"]);
        assert_eq!(titles(&search(&catalog, "référ"), &catalog), vec!["Beta"]);
        assert_eq!(titles(&search(&catalog, "RÉFÉR"), &catalog), vec!["Beta"]);
    }

    #[test]
    fn surrounding_whitespace_is_part_of_the_needle() {
        let catalog = two_services();
        assert_eq!(titles(&search(&catalog, " web"), &catalog), vec!["Site web"]);
        assert!(search(&catalog, "web ").is_empty_state());
    }

    #[test]
    fn special_characters_are_plain_text() {
        let catalog = Catalog::new(vec![record("ui", "Design UI/UX", "", &["c++", "(.*)"])]);
        assert_eq!(search(&catalog, "ui/ux").len(), 1);
        assert_eq!(search(&catalog, "c++").len(), 1);
        assert_eq!(search(&catalog, "(.*)").len(), 1);
        assert!(search(&catalog, ".*x").is_empty_state());
    }

    #[test]
    fn results_follow_catalog_order() {
        let catalog = Catalog::new(vec![
            record("c", "Site C", "", &[]),
            record("x", "Other", "", &[]),
            record("a", "Site A", "", &[]),
            record("b", "Site B", "", &[]),
        ]);
        let view = search(&catalog, "site");
        assert_eq!(view.indices, vec![0, 2, 3]);
    }

    #[test]
    fn partition_is_exact_on_embedded_catalog() {
        let catalog = crate::catalog::load_catalog(&crate::catalog::CatalogSource::Embedded).unwrap();
        for query in ["site", "web", "mobile", "é", "mois", "zzz", "a", "SEO"] {
            let view = search(&catalog, query);
            assert!(view.len() <= catalog.len());
            let needle = query.to_lowercase();
            for (index, service) in catalog.records().iter().enumerate() {
                let expected = service.title.to_lowercase().contains(&needle)
                    || service.description.to_lowercase().contains(&needle)
                    || service
                        .keywords
                        .iter()
                        .any(|keyword| keyword.to_lowercase().contains(&needle));
                assert_eq!(view.indices.contains(&index), expected, "{query} vs {}", service.id);
            }
            assert!(view.indices.windows(2).all(|pair| pair[0] < pair[1]));
        }
    }
}
