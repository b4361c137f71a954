#![allow(dead_code)]

use async_trait::async_trait;
use portal_schema_sync::hubspot::{
    HubSpotError, HubSpotResult, ObjectType, Property, PropertyCreate, PropertyGroup,
    PropertyGroupCreate, SchemaApi,
};
use portal_schema_sync::Portal;
use std::collections::HashSet;
use std::sync::{Arc, Mutex};

/// In-memory portal schema that records every creation call.
#[derive(Default)]
pub struct FakeSchemaApi {
    groups: Vec<PropertyGroup>,
    properties: Vec<Property>,
    failing_creates: HashSet<String>,
    failing_lists: bool,
    calls: Mutex<Vec<String>>,
    created_properties: Mutex<Vec<PropertyCreate>>,
}

impl FakeSchemaApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_groups(mut self, names: &[&str]) -> Self {
        self.groups.extend(names.iter().map(|n| group(n)));
        self
    }

    pub fn with_group(mut self, group: PropertyGroup) -> Self {
        self.groups.push(group);
        self
    }

    pub fn with_properties(mut self, names: &[&str]) -> Self {
        self.properties.extend(names.iter().map(|n| property(n)));
        self
    }

    pub fn with_property(mut self, property: Property) -> Self {
        self.properties.push(property);
        self
    }

    /// Reject creation of the named group or property.
    pub fn failing_create(mut self, name: &str) -> Self {
        self.failing_creates.insert(name.to_string());
        self
    }

    /// Make every list call fail.
    pub fn failing_lists(mut self) -> Self {
        self.failing_lists = true;
        self
    }

    /// Creation calls in order, as `group:<name>` or `property:<name>`.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn created_properties(&self) -> Vec<PropertyCreate> {
        self.created_properties.lock().unwrap().clone()
    }

    fn check_create(&self, name: &str) -> HubSpotResult<()> {
        if self.failing_creates.contains(name) {
            return Err(HubSpotError::Api {
                status: 400,
                message: format!("invalid definition for {name}"),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl SchemaApi for FakeSchemaApi {
    async fn list_property_groups(
        &self,
        _object_type: &ObjectType,
    ) -> HubSpotResult<Vec<PropertyGroup>> {
        if self.failing_lists {
            return Err(HubSpotError::Api {
                status: 503,
                message: "service unavailable".to_string(),
            });
        }
        Ok(self.groups.clone())
    }

    async fn list_properties(&self, _object_type: &ObjectType) -> HubSpotResult<Vec<Property>> {
        if self.failing_lists {
            return Err(HubSpotError::Api {
                status: 503,
                message: "service unavailable".to_string(),
            });
        }
        Ok(self.properties.clone())
    }

    async fn create_property_group(
        &self,
        _object_type: &ObjectType,
        group: &PropertyGroupCreate,
    ) -> HubSpotResult<()> {
        self.calls.lock().unwrap().push(format!("group:{}", group.name));
        self.check_create(&group.name)
    }

    async fn create_property(
        &self,
        _object_type: &ObjectType,
        property: &PropertyCreate,
    ) -> HubSpotResult<()> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("property:{}", property.name));
        self.created_properties.lock().unwrap().push(property.clone());
        self.check_create(&property.name)
    }
}

/// A portal already bound to `api`.
pub fn prepared_portal(portal_id: u64, name: &str, api: Arc<FakeSchemaApi>) -> Portal {
    let mut portal = Portal::new(portal_id, name, "test-key");
    portal.bind_api(api).expect("Should bind api");
    portal
}

pub fn group(name: &str) -> PropertyGroup {
    PropertyGroup {
        name: name.to_string(),
        label: format!("{name} label"),
        display_order: -1,
        archived: false,
    }
}

pub fn property(name: &str) -> Property {
    Property {
        name: name.to_string(),
        label: format!("{name} label"),
        property_type: "string".to_string(),
        field_type: "text".to_string(),
        group_name: "custom_info".to_string(),
        description: String::new(),
        options: Vec::new(),
        display_order: -1,
        has_unique_value: false,
        hidden: false,
        form_field: true,
        calculated: false,
        external_options: false,
        hubspot_defined: false,
        referenced_object_type: None,
        show_currency_symbol: None,
    }
}

pub fn calculated_property(name: &str) -> Property {
    Property {
        property_type: "number".to_string(),
        field_type: "calculation_equation".to_string(),
        calculated: true,
        ..property(name)
    }
}
