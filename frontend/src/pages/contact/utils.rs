use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::OnceLock;

pub const NAME_REQUIRED: &str = "Name is required";
pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Please enter a valid email";
pub const COMPANY_REQUIRED: &str = "Company is required";
pub const LICENSE_TYPE_REQUIRED: &str = "Please select a license type";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LeadField {
    Name,
    Email,
    Company,
    LicenseType,
    Message,
}

impl LeadField {
    pub const ALL: [LeadField; 5] = [
        LeadField::Name,
        LeadField::Email,
        LeadField::Company,
        LeadField::LicenseType,
        LeadField::Message,
    ];

    /// Form control name, also used as the element id.
    pub fn as_str(&self) -> &'static str {
        match self {
            LeadField::Name => "name",
            LeadField::Email => "email",
            LeadField::Company => "company",
            LeadField::LicenseType => "licenseType",
            LeadField::Message => "message",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LicenseType {
    Microsoft,
    Adobe,
    Oracle,
    VMware,
    Other,
}

impl LicenseType {
    pub const ALL: [LicenseType; 5] = [
        LicenseType::Microsoft,
        LicenseType::Adobe,
        LicenseType::Oracle,
        LicenseType::VMware,
        LicenseType::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LicenseType::Microsoft => "Microsoft",
            LicenseType::Adobe => "Adobe",
            LicenseType::Oracle => "Oracle",
            LicenseType::VMware => "VMware",
            LicenseType::Other => "Other",
        }
    }

    /// `None` for the empty "Select license type" option and anything unknown.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == value)
    }
}

impl fmt::Display for LicenseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub name: String,
    pub email: String,
    pub company: String,
    pub license_type: Option<LicenseType>,
    pub message: String,
}

impl FormFields {
    pub fn value(&self, field: LeadField) -> String {
        match field {
            LeadField::Name => self.name.clone(),
            LeadField::Email => self.email.clone(),
            LeadField::Company => self.company.clone(),
            LeadField::LicenseType => self
                .license_type
                .map(|kind| kind.as_str().to_string())
                .unwrap_or_default(),
            LeadField::Message => self.message.clone(),
        }
    }

    pub fn set(&mut self, field: LeadField, value: String) {
        match field {
            LeadField::Name => self.name = value,
            LeadField::Email => self.email = value,
            LeadField::Company => self.company = value,
            LeadField::LicenseType => self.license_type = LicenseType::parse(&value),
            LeadField::Message => self.message = value,
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Present only for fields that failed their last check.
pub type ValidationErrors = BTreeMap<LeadField, String>;

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^\S+@\S+\.\S+$").expect("email pattern compiles"))
}

/// Coarse `text@text.text` shape check, applied to the raw value.
pub fn is_valid_email(value: &str) -> bool {
    email_pattern().is_match(value)
}

pub fn validate_fields(fields: &FormFields) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    if fields.name.trim().is_empty() {
        errors.insert(LeadField::Name, NAME_REQUIRED.into());
    }
    if fields.email.trim().is_empty() {
        errors.insert(LeadField::Email, EMAIL_REQUIRED.into());
    } else if !is_valid_email(&fields.email) {
        errors.insert(LeadField::Email, EMAIL_INVALID.into());
    }
    if fields.company.trim().is_empty() {
        errors.insert(LeadField::Company, COMPANY_REQUIRED.into());
    }
    if fields.license_type.is_none() {
        errors.insert(LeadField::LicenseType, LICENSE_TYPE_REQUIRED.into());
    }

    errors
}
