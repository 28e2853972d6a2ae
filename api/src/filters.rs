//! Filter categories and the active selection used to narrow donation lists.

use serde::Deserialize;
use serde::Serialize;
use strum::IntoEnumIterator;

use crate::donation::Donation;

/// One of the fixed filter groups shown in the filter panel.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::EnumIs,
    strum::IntoStaticStr,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum FilterCategory {
    OrganType,
    Status,
    BloodType,
    AgeRange,
    Location,
}

impl FilterCategory {
    /// Human readable heading for the category.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::OrganType => "Organ Type",
            Self::Status => "Status",
            Self::BloodType => "Blood Type",
            Self::AgeRange => "Age Range",
            Self::Location => "Location",
        }
    }

    /// The selectable tags for the category, in display order.
    pub fn options(&self) -> &'static [&'static str] {
        match self {
            Self::OrganType => &["Kidney", "Liver", "Heart", "Lung", "Pancreas", "Cornea"],
            Self::Status => &["Available", "Pending", "Matched", "Completed"],
            Self::BloodType => &["A+", "A-", "B+", "B-", "AB+", "AB-", "O+", "O-"],
            Self::AgeRange => &["18-25", "20-30", "25-35", "30-40", "40-50", "50+"],
            Self::Location => &[
                "Kyrenia (Girne)",
                "Nicosia",
                "Famagusta",
                "Limassol",
                "Paphos",
            ],
        }
    }
}

/// The selected tags for every filter category.
///
/// Owned by the container that lists donations. Each category behaves as a
/// set that keeps insertion order: a tag appears at most once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveFilters {
    pub organ_type: Vec<String>,
    pub status: Vec<String>,
    pub blood_type: Vec<String>,
    pub age_range: Vec<String>,
    pub location: Vec<String>,
}

impl ActiveFilters {
    pub fn get(&self, category: FilterCategory) -> &[String] {
        match category {
            FilterCategory::OrganType => &self.organ_type,
            FilterCategory::Status => &self.status,
            FilterCategory::BloodType => &self.blood_type,
            FilterCategory::AgeRange => &self.age_range,
            FilterCategory::Location => &self.location,
        }
    }

    fn get_mut(&mut self, category: FilterCategory) -> &mut Vec<String> {
        match category {
            FilterCategory::OrganType => &mut self.organ_type,
            FilterCategory::Status => &mut self.status,
            FilterCategory::BloodType => &mut self.blood_type,
            FilterCategory::AgeRange => &mut self.age_range,
            FilterCategory::Location => &mut self.location,
        }
    }

    pub fn is_selected(&self, category: FilterCategory, tag: &str) -> bool {
        self.get(category).iter().any(|t| t == tag)
    }

    /// Computes the full replacement set for `category` after toggling `tag`.
    ///
    /// A selected tag is removed, an unselected one is appended. `self` is
    /// left untouched; the owner applies the result with [`Self::set`].
    pub fn toggled(&self, category: FilterCategory, tag: &str) -> Vec<String> {
        let current = self.get(category);
        if current.iter().any(|t| t == tag) {
            current.iter().filter(|t| *t != tag).cloned().collect()
        } else {
            current
                .iter()
                .cloned()
                .chain(std::iter::once(tag.to_string()))
                .collect()
        }
    }

    /// Replaces the tags for one category. Duplicates are dropped, keeping
    /// the first occurrence.
    pub fn set(&mut self, category: FilterCategory, values: Vec<String>) {
        let mut unique: Vec<String> = Vec::with_capacity(values.len());
        for value in values {
            if !unique.contains(&value) {
                unique.push(value);
            }
        }
        *self.get_mut(category) = unique;
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// True when at least one category has a selected tag.
    pub fn has_active(&self) -> bool {
        FilterCategory::iter().any(|c| !self.get(c).is_empty())
    }

    /// Checks a donation against every category. Empty categories match
    /// everything; categories combine with AND, tags within one with OR.
    ///
    /// Donations carry no donor age, so the age range category is not
    /// consulted here.
    pub fn matches(&self, donation: &Donation) -> bool {
        let organ_ok = self.organ_type.is_empty()
            || self
                .organ_type
                .iter()
                .any(|t| t.eq_ignore_ascii_case(&donation.organ_name));

        let status_ok = self.status.is_empty()
            || self.status.iter().any(|t| {
                if t.eq_ignore_ascii_case("Available") {
                    donation.is_available
                } else {
                    !donation.is_available
                }
            });

        let blood_ok =
            self.blood_type.is_empty() || self.blood_type.iter().any(|t| *t == donation.blood_type);

        let location_ok = self.location.is_empty()
            || self
                .location
                .iter()
                .any(|t| location_matches(t, &donation.city));

        organ_ok && status_ok && blood_ok && location_ok
    }

    /// Returns the donations that satisfy the filters, preserving order.
    pub fn apply<'a>(&self, donations: &'a [Donation]) -> Vec<&'a Donation> {
        donations.iter().filter(|d| self.matches(d)).collect()
    }
}

// "Kyrenia (Girne)" matches a city of either "Kyrenia (Girne)" or "Kyrenia".
fn location_matches(tag: &str, city: &str) -> bool {
    let city = city.trim();
    if tag.eq_ignore_ascii_case(city) {
        return true;
    }
    match tag.split_once(" (") {
        Some((lead, _)) => lead.trim().eq_ignore_ascii_case(city),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::donation::DonationId;
    use chrono::TimeZone;
    use chrono::Utc;

    fn donation(organ: &str, blood: &str, city: &str, available: bool) -> Donation {
        Donation {
            id: DonationId(1),
            organ_name: organ.to_string(),
            blood_type: blood.to_string(),
            city: city.to_string(),
            is_available: available,
            created_at: Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap(),
        }
    }

    #[test]
    fn toggle_adds_then_removes_within_one_category() {
        let mut filters = ActiveFilters::default();
        filters.set(FilterCategory::BloodType, vec!["O-".to_string()]);
        let before = filters.clone();

        let added = filters.toggled(FilterCategory::OrganType, "Kidney");
        assert_eq!(added, vec!["Kidney".to_string()]);
        // toggled never mutates the owner's copy
        assert_eq!(filters, before);

        filters.set(FilterCategory::OrganType, added);
        assert_eq!(filters.blood_type, before.blood_type);
        assert_eq!(filters.status, before.status);
        assert_eq!(filters.age_range, before.age_range);
        assert_eq!(filters.location, before.location);

        let removed = filters.toggled(FilterCategory::OrganType, "Kidney");
        filters.set(FilterCategory::OrganType, removed);
        assert_eq!(filters, before);
    }

    #[test]
    fn toggle_keeps_insertion_order() {
        let mut filters = ActiveFilters::default();
        for tag in ["Heart", "Lung", "Liver"] {
            let next = filters.toggled(FilterCategory::OrganType, tag);
            filters.set(FilterCategory::OrganType, next);
        }
        let next = filters.toggled(FilterCategory::OrganType, "Lung");
        assert_eq!(next, vec!["Heart".to_string(), "Liver".to_string()]);
    }

    #[test]
    fn set_drops_duplicates() {
        let mut filters = ActiveFilters::default();
        filters.set(
            FilterCategory::Status,
            vec!["Pending".into(), "Matched".into(), "Pending".into()],
        );
        assert_eq!(filters.status, vec!["Pending".to_string(), "Matched".to_string()]);
    }

    #[test]
    fn has_active_tracks_any_non_empty_category() {
        let mut filters = ActiveFilters::default();
        assert!(!filters.has_active());
        for category in FilterCategory::iter() {
            filters.set(category, vec![category.options()[0].to_string()]);
            assert!(filters.has_active());
            filters.clear();
            assert!(!filters.has_active());
        }
    }

    #[test]
    fn clear_empties_every_category() {
        let mut filters = ActiveFilters::default();
        for category in FilterCategory::iter() {
            let all = category.options().iter().map(|s| s.to_string()).collect();
            filters.set(category, all);
        }
        filters.clear();
        for category in FilterCategory::iter() {
            assert!(filters.get(category).is_empty());
        }
    }

    #[test]
    fn every_category_has_its_vocabulary() {
        let names: Vec<&'static str> = FilterCategory::iter().map(|c| c.into()).collect();
        assert_eq!(
            names,
            vec!["organType", "status", "bloodType", "ageRange", "location"]
        );
        assert_eq!(FilterCategory::OrganType.options().len(), 6);
        assert_eq!(FilterCategory::BloodType.options().len(), 8);
        assert_eq!(FilterCategory::Location.display_name(), "Location");
    }

    #[test]
    fn matches_combines_categories() {
        let kidney = donation("Kidney", "A+", "Nicosia", true);
        let liver = donation("liver", "O-", "Kyrenia", false);

        let mut filters = ActiveFilters::default();
        assert!(filters.matches(&kidney) && filters.matches(&liver));

        filters.set(FilterCategory::OrganType, vec!["Kidney".into(), "Liver".into()]);
        assert!(filters.matches(&kidney) && filters.matches(&liver));

        filters.set(FilterCategory::Status, vec!["Available".into()]);
        assert!(filters.matches(&kidney));
        assert!(!filters.matches(&liver));

        filters.set(FilterCategory::Status, vec!["Matched".into()]);
        assert!(!filters.matches(&kidney));
        assert!(filters.matches(&liver));

        filters.clear();
        filters.set(FilterCategory::Location, vec!["Kyrenia (Girne)".into()]);
        assert!(filters.matches(&liver));
        assert!(!filters.matches(&kidney));

        filters.set(FilterCategory::BloodType, vec!["A+".into()]);
        assert!(!filters.matches(&liver));

        // age ranges do not narrow a donation list
        filters.clear();
        filters.set(FilterCategory::AgeRange, vec!["18-25".into()]);
        assert_eq!(filters.apply(&[kidney.clone(), liver.clone()]).len(), 2);
    }
}
