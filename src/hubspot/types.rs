use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// CRM object type owning its own property namespace.
///
/// The four standard types get their own variants; anything else the platform
/// supports (custom objects, `line_item`, ...) is carried verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ObjectType {
    Contact,
    Company,
    Deal,
    Ticket,
    Other(String),
}

impl ObjectType {
    /// The object types synced when configuration doesn't say otherwise.
    pub fn defaults() -> Vec<ObjectType> {
        vec![
            ObjectType::Contact,
            ObjectType::Company,
            ObjectType::Deal,
            ObjectType::Ticket,
        ]
    }

    pub fn as_str(&self) -> &str {
        match self {
            ObjectType::Contact => "contact",
            ObjectType::Company => "company",
            ObjectType::Deal => "deal",
            ObjectType::Ticket => "ticket",
            ObjectType::Other(name) => name,
        }
    }
}

impl fmt::Display for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for ObjectType {
    fn from(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "contact" | "contacts" => ObjectType::Contact,
            "company" | "companies" => ObjectType::Company,
            "deal" | "deals" => ObjectType::Deal,
            "ticket" | "tickets" => ObjectType::Ticket,
            _ => ObjectType::Other(value.trim().to_string()),
        }
    }
}

impl From<String> for ObjectType {
    fn from(value: String) -> Self {
        ObjectType::from(value.as_str())
    }
}

impl From<ObjectType> for String {
    fn from(value: ObjectType) -> Self {
        value.as_str().to_string()
    }
}

impl FromStr for ObjectType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ObjectType::from(s))
    }
}

/// A named container that properties reference for UI grouping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyGroup {
    pub name: String,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub display_order: i32,
    #[serde(default)]
    pub archived: bool,
}

/// One choice of an enumerated property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyOption {
    pub label: String,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub display_order: i32,
    #[serde(default)]
    pub hidden: bool,
}

/// Custom field definition as returned by the properties API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub name: String,
    #[serde(default)]
    pub label: String,
    #[serde(rename = "type")]
    pub property_type: String,
    pub field_type: String,
    #[serde(default)]
    pub group_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub options: Vec<PropertyOption>,
    #[serde(default)]
    pub display_order: i32,
    #[serde(default)]
    pub has_unique_value: bool,
    #[serde(default)]
    pub hidden: bool,
    #[serde(default)]
    pub form_field: bool,
    #[serde(default)]
    pub calculated: bool,
    #[serde(default)]
    pub external_options: bool,
    #[serde(default)]
    pub hubspot_defined: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub referenced_object_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_currency_symbol: Option<bool>,
}

/// Body of `POST /crm/v3/properties/{objectType}/groups`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyGroupCreate {
    pub name: String,
    pub label: String,
    pub display_order: i32,
    pub archived: bool,
}

impl From<&PropertyGroup> for PropertyGroupCreate {
    fn from(group: &PropertyGroup) -> Self {
        Self {
            name: group.name.clone(),
            label: group.label.clone(),
            display_order: group.display_order,
            archived: group.archived,
        }
    }
}

/// Body of `POST /crm/v3/properties/{objectType}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyCreate {
    pub name: String,
    pub label: String,
    #[serde(rename = "type")]
    pub property_type: String,
    pub field_type: String,
    pub group_name: String,
    pub description: String,
    pub options: Vec<PropertyOption>,
    pub display_order: i32,
    pub has_unique_value: bool,
    pub hidden: bool,
    pub form_field: bool,
    pub calculated: bool,
    pub external_options: bool,
    pub hubspot_defined: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub referenced_object_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_currency_symbol: Option<bool>,
}

impl From<&Property> for PropertyCreate {
    fn from(property: &Property) -> Self {
        Self {
            name: property.name.clone(),
            label: property.label.clone(),
            property_type: property.property_type.clone(),
            field_type: property.field_type.clone(),
            group_name: property.group_name.clone(),
            description: property.description.clone(),
            options: property.options.clone(),
            display_order: property.display_order,
            has_unique_value: property.has_unique_value,
            hidden: property.hidden,
            form_field: property.form_field,
            calculated: property.calculated,
            external_options: property.external_options,
            hubspot_defined: property.hubspot_defined,
            referenced_object_type: property.referenced_object_type.clone(),
            show_currency_symbol: property.show_currency_symbol,
        }
    }
}

/// Envelope of the list endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct CollectionResponse<T> {
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
}

/// Response of the identity endpoint; only the portal id matters here.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountDetails {
    pub portal_id: u64,
}

/// Error body returned by the CRM API on non-2xx responses.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiErrorBody {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub category: Option<String>,
}
