use crate::models::LocationRecord;

/// Compiled-in county catalog, sorted by county name
///
/// The backend's `GET /meta/locations` serves the same shape; this is the
/// offline default.
const COUNTY_TOWNS: &[(&str, &[&str])] = &[
    ("Carlow", &["Carlow Town", "Tullow"]),
    ("Clare", &["Ennis", "Shannon"]),
    ("Cork", &["Cork City", "Bishopstown", "Ballincollig", "Carrigaline"]),
    ("Donegal", &["Letterkenny", "Donegal Town"]),
    ("Dublin", &["Dublin City", "Swords", "Tallaght", "Blanchardstown", "Dún Laoghaire"]),
    ("Galway", &["Galway City", "Knocknacarra", "Salthill", "Oranmore"]),
    ("Kerry", &["Tralee", "Killarney"]),
    ("Kildare", &["Naas", "Maynooth", "Newbridge", "Celbridge"]),
    ("Kilkenny", &["Kilkenny City", "Callan"]),
    ("Limerick", &["Limerick City", "Castletroy", "Dooradoyle"]),
    ("Louth", &["Drogheda", "Dundalk"]),
    ("Meath", &["Navan", "Ashbourne", "Trim"]),
    ("Waterford", &["Waterford City", "Ballybeg", "Tramore"]),
    ("Westmeath", &["Athlone", "Mullingar"]),
];

/// Read-only county → towns lookup
///
/// County names are unique; the canonical county list offered to users is
/// the keys in lexicographic order.
#[derive(Debug, Clone)]
pub struct LocationCatalog {
    entries: Vec<(String, Vec<String>)>,
}

impl LocationCatalog {
    /// Catalog from the compiled-in table
    pub fn builtin() -> Self {
        Self {
            entries: COUNTY_TOWNS
                .iter()
                .map(|(county, towns)| {
                    (
                        county.to_string(),
                        towns.iter().map(|town| town.to_string()).collect(),
                    )
                })
                .collect(),
        }
    }

    /// Catalog from `GET /meta/locations` records
    ///
    /// Duplicate county names keep the first occurrence; the result is
    /// sorted so `counties` stays canonical regardless of wire order.
    pub fn from_records(records: Vec<LocationRecord>) -> Self {
        let mut entries: Vec<(String, Vec<String>)> = Vec::with_capacity(records.len());
        for record in records {
            if entries.iter().any(|(county, _)| *county == record.county) {
                continue;
            }
            entries.push((record.county, record.towns));
        }
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        Self { entries }
    }

    /// County names in lexicographic order
    pub fn counties(&self) -> Vec<&str> {
        self.entries.iter().map(|(county, _)| county.as_str()).collect()
    }

    /// Towns for a county, in catalog order; empty for an unknown county
    pub fn towns(&self, county: &str) -> &[String] {
        self.entries
            .iter()
            .find(|(name, _)| name == county)
            .map(|(_, towns)| towns.as_slice())
            .unwrap_or(&[])
    }
}

impl Default for LocationCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

/// County + town picker state
///
/// The town is only meaningful together with its county, so changing or
/// clearing the county always clears the town in the same call. There is
/// no window where a town from the previous county is still selected.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LocationSelection {
    county: Option<String>,
    town: Option<String>,
}

impl LocationSelection {
    pub fn county(&self) -> Option<&str> {
        self.county.as_deref()
    }

    pub fn town(&self) -> Option<&str> {
        self.town.as_deref()
    }

    /// Select a county (or clear with `None`), resetting the town
    pub fn set_county(&mut self, county: Option<String>) {
        self.county = county;
        self.town = None;
    }

    /// Select a town; ignored while no county is selected
    ///
    /// Mirrors the disabled town selector in the UI.
    pub fn set_town(&mut self, town: Option<String>) {
        if self.county.is_some() {
            self.town = town;
        }
    }

    /// Towns currently offered by the town selector
    pub fn available_towns<'a>(&self, catalog: &'a LocationCatalog) -> &'a [String] {
        match &self.county {
            Some(county) => catalog.towns(county),
            None => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counties_are_sorted_and_unique() {
        let catalog = LocationCatalog::builtin();
        let counties = catalog.counties();
        let mut sorted = counties.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(counties, sorted);
    }

    #[test]
    fn towns_of_unknown_county_are_empty() {
        let catalog = LocationCatalog::builtin();
        assert!(catalog.towns("Atlantis").is_empty());
    }

    #[test]
    fn changing_county_resets_the_town() {
        let catalog = LocationCatalog::builtin();
        let mut selection = LocationSelection::default();

        selection.set_county(Some("Dublin".to_string()));
        selection.set_town(Some("Dublin City".to_string()));
        assert_eq!(selection.town(), Some("Dublin City"));

        selection.set_county(Some("Cork".to_string()));
        assert_eq!(selection.town(), None);
        assert!(selection
            .available_towns(&catalog)
            .iter()
            .any(|town| town == "Cork City"));
        assert!(!selection
            .available_towns(&catalog)
            .iter()
            .any(|town| town == "Dublin City"));
    }

    #[test]
    fn clearing_county_resets_the_town_and_disables_towns() {
        let catalog = LocationCatalog::builtin();
        let mut selection = LocationSelection::default();

        selection.set_county(Some("Galway".to_string()));
        selection.set_town(Some("Salthill".to_string()));
        selection.set_county(None);

        assert_eq!(selection.town(), None);
        assert!(selection.available_towns(&catalog).is_empty());
    }

    #[test]
    fn town_selection_is_ignored_without_a_county() {
        let mut selection = LocationSelection::default();
        selection.set_town(Some("Swords".to_string()));
        assert_eq!(selection.town(), None);
    }

    #[test]
    fn from_records_sorts_and_keeps_first_duplicate() {
        let catalog = LocationCatalog::from_records(vec![
            LocationRecord {
                county: "Wicklow".to_string(),
                towns: vec!["Bray".to_string()],
            },
            LocationRecord {
                county: "Dublin".to_string(),
                towns: vec!["Swords".to_string()],
            },
            LocationRecord {
                county: "Wicklow".to_string(),
                towns: vec!["Arklow".to_string()],
            },
        ]);
        assert_eq!(catalog.counties(), vec!["Dublin", "Wicklow"]);
        assert_eq!(catalog.towns("Wicklow").to_vec(), vec!["Bray".to_string()]);
    }
}
