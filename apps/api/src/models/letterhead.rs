use serde::{Deserialize, Serialize};

use crate::models::present;

pub const DEFAULT_COMPANY_NAME: &str = "TRIOSTACK TECHNOLOGIES PRIVATE LIMITED";
pub const DEFAULT_REGISTRATION_LABEL: &str = "CIN";
pub const DEFAULT_REGISTRATION_ID: &str = "U62012UP2025PTC226106";
pub const DEFAULT_PHONE: &str = "+91 9211941924";
pub const DEFAULT_WEBSITE: &str = "www.triostack.in";
pub const DEFAULT_EMAIL: &str = "info@triostack.in";
pub const DEFAULT_ADDRESS: &str = "IIMT LBF, Plot No. 19, 20, near IIMT Group of Colleges, \
    Knowledge Park III, Greater Noida, Uttar Pradesh 201310";

/// Fixed header block printed at the top of every generated document.
///
/// Optional fields that are absent or blank are left out of the rendered block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Letterhead {
    pub company_name: String,
    #[serde(default = "default_registration_label")]
    pub registration_label: String,
    #[serde(default)]
    pub registration_id: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
}

/// A `label: value` pair rendered with a bold label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabeledField<'a> {
    pub label: &'a str,
    pub value: &'a str,
}

fn default_registration_label() -> String {
    DEFAULT_REGISTRATION_LABEL.to_string()
}

impl Default for Letterhead {
    fn default() -> Self {
        Self {
            company_name: DEFAULT_COMPANY_NAME.to_string(),
            registration_label: default_registration_label(),
            registration_id: Some(DEFAULT_REGISTRATION_ID.to_string()),
            phone: Some(DEFAULT_PHONE.to_string()),
            website: Some(DEFAULT_WEBSITE.to_string()),
            email: Some(DEFAULT_EMAIL.to_string()),
            address: Some(DEFAULT_ADDRESS.to_string()),
        }
    }
}

impl Letterhead {
    /// Registration id, phone and website, in that order, skipping absent ones.
    pub fn primary_details(&self) -> Vec<LabeledField<'_>> {
        [
            (self.registration_label.trim(), present(&self.registration_id)),
            ("Phone", present(&self.phone)),
            ("Website", present(&self.website)),
        ]
        .into_iter()
        .filter_map(|(label, value)| value.map(|value| LabeledField { label, value }))
        .collect()
    }

    /// Company name, or `None` when it is blank.
    pub fn company_name(&self) -> Option<&str> {
        Some(self.company_name.trim()).filter(|name| !name.is_empty())
    }

    pub fn email(&self) -> Option<&str> {
        present(&self.email)
    }

    pub fn address(&self) -> Option<&str> {
        present(&self.address)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_letterhead_has_all_primary_details() {
        let letterhead = Letterhead::default();
        let labels: Vec<&str> = letterhead
            .primary_details()
            .iter()
            .map(|f| f.label)
            .collect();
        assert_eq!(labels, vec!["CIN", "Phone", "Website"]);
    }

    #[test]
    fn test_blank_fields_are_skipped() {
        let letterhead = Letterhead {
            phone: Some("   ".to_string()),
            website: None,
            email: Some(String::new()),
            ..Letterhead::default()
        };
        let details = letterhead.primary_details();
        assert_eq!(details.len(), 1);
        assert_eq!(details[0].value, DEFAULT_REGISTRATION_ID);
        assert!(letterhead.email().is_none());
    }

    #[test]
    fn test_deserializes_camel_case_with_defaults() {
        let json = r#"{"companyName": "Acme Ltd", "registrationId": "REG-1"}"#;
        let letterhead: Letterhead = serde_json::from_str(json).unwrap();
        assert_eq!(letterhead.company_name, "Acme Ltd");
        assert_eq!(letterhead.registration_label, "CIN");
        assert_eq!(letterhead.primary_details().len(), 1);
        assert!(letterhead.address().is_none());
    }

    #[test]
    fn test_blank_company_name_is_absent() {
        let letterhead = Letterhead {
            company_name: "  ".to_string(),
            ..Letterhead::default()
        };
        assert_eq!(letterhead.company_name(), None);
        assert_eq!(
            Letterhead::default().company_name(),
            Some(DEFAULT_COMPANY_NAME)
        );
    }
}
