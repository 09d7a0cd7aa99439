use crate::{attributes::Attributes, entities::status::ApprovalType};
use edgekit_core::{entity, types::Timestamp};

///
/// ApiProduct
///
/// A bundle of API resources offered to apps, with environment scoping and
/// an optional quota. `approval_type` decides whether new credentials are
/// granted immediately or await manual approval.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ApiProduct {
    name: Option<String>,
    display_name: Option<String>,
    description: Option<String>,
    approval_type: Option<ApprovalType>,
    api_resources: Vec<String>,
    environments: Vec<String>,
    proxies: Vec<String>,
    scopes: Vec<String>,
    quota: Option<String>,
    quota_interval: Option<String>,
    quota_time_unit: Option<String>,
    attributes: Attributes,
    created_at: Option<Timestamp>,
    last_modified_at: Option<Timestamp>,
}

entity! {
    ApiProduct {
        name: "api_product",
        fields: [
            name => name: Option<String>,
            displayName => display_name: Option<String>,
            description => description: Option<String>,
            approvalType => approval_type: Option<ApprovalType>,
            apiResources => api_resources: Vec<String>,
            environments => environments: Vec<String>,
            proxies => proxies: Vec<String>,
            scopes => scopes: Vec<String>,
            quota => quota: Option<String>,
            quotaInterval => quota_interval: Option<String>,
            quotaTimeUnit => quota_time_unit: Option<String>,
            attributes => attributes: Attributes,
            createdAt => created_at: Option<Timestamp>,
            lastModifiedAt => last_modified_at: Option<Timestamp>,
        ],
    }
}

impl ApiProduct {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    pub fn set_display_name(&mut self, name: impl Into<String>) {
        self.display_name = Some(name.into());
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = Some(description.into());
    }

    #[must_use]
    pub const fn approval_type(&self) -> Option<ApprovalType> {
        self.approval_type
    }

    pub const fn set_approval_type(&mut self, approval: ApprovalType) {
        self.approval_type = Some(approval);
    }

    #[must_use]
    pub fn api_resources(&self) -> &[String] {
        &self.api_resources
    }

    pub fn add_api_resource(&mut self, resource: impl Into<String>) {
        self.api_resources.push(resource.into());
    }

    #[must_use]
    pub fn environments(&self) -> &[String] {
        &self.environments
    }

    pub fn add_environment(&mut self, environment: impl Into<String>) {
        self.environments.push(environment.into());
    }

    #[must_use]
    pub fn proxies(&self) -> &[String] {
        &self.proxies
    }

    pub fn add_proxy(&mut self, proxy: impl Into<String>) {
        self.proxies.push(proxy.into());
    }

    #[must_use]
    pub fn scopes(&self) -> &[String] {
        &self.scopes
    }

    pub fn add_scope(&mut self, scope: impl Into<String>) {
        self.scopes.push(scope.into());
    }

    #[must_use]
    pub fn quota(&self) -> Option<(&str, &str, &str)> {
        Some((
            self.quota.as_deref()?,
            self.quota_interval.as_deref()?,
            self.quota_time_unit.as_deref()?,
        ))
    }

    /// Limit the product to `quota` calls every `interval` `time_unit`s.
    pub fn set_quota(
        &mut self,
        quota: impl Into<String>,
        interval: impl Into<String>,
        time_unit: impl Into<String>,
    ) {
        self.quota = Some(quota.into());
        self.quota_interval = Some(interval.into());
        self.quota_time_unit = Some(time_unit.into());
    }

    #[must_use]
    pub const fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    pub const fn attributes_mut(&mut self) -> &mut Attributes {
        &mut self.attributes
    }

    #[must_use]
    pub const fn created_at(&self) -> Option<Timestamp> {
        self.created_at
    }

    #[must_use]
    pub const fn last_modified_at(&self) -> Option<Timestamp> {
        self.last_modified_at
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use edgekit_core::{
        traits::Entity,
        value::{Value, ValueMap},
    };

    fn product_payload() -> ValueMap {
        let value = Value::from_json(serde_json::json!({
            "name": "weather",
            "displayName": "Weather API",
            "approvalType": "auto",
            "apiResources": ["/forecast", "/current"],
            "environments": ["test", "prod"],
            "proxies": ["weather-v1"],
            "quota": "10000",
            "quotaInterval": "1",
            "quotaTimeUnit": "day",
            "attributes": [
                { "name": "access", "value": "public" },
            ],
        }));

        match value {
            Value::Map(map) => map,
            other => panic!("expected a map payload, got {other}"),
        }
    }

    #[test]
    fn test_hydrates_from_a_service_payload() {
        let product = ApiProduct::from_values(product_payload()).unwrap();

        assert_eq!(product.id(), Some("weather".to_string()));
        assert_eq!(product.display_name(), Some("Weather API"));
        assert_eq!(product.approval_type(), Some(ApprovalType::Auto));
        assert_eq!(
            product.api_resources(),
            ["/forecast".to_string(), "/current".to_string()]
        );
        assert_eq!(product.quota(), Some(("10000", "1", "day")));
        assert_eq!(product.attributes().get("access"), Some("public"));
    }

    #[test]
    fn test_partial_quota_reads_as_unset() {
        let mut values = product_payload();
        values.take("quotaTimeUnit");

        let product = ApiProduct::from_values(values).unwrap();
        assert_eq!(product.quota(), None);
    }

    #[test]
    fn test_builder_round_trips_through_wire_names() {
        let mut product = ApiProduct::new("traffic");
        product.set_display_name("Traffic API");
        product.set_approval_type(ApprovalType::Manual);
        product.add_environment("prod");
        product.add_proxy("traffic-v1");
        product.set_quota("500", "1", "hour");

        let values = product.to_values();
        assert_eq!(values.get("name"), Some(&Value::from("traffic")));
        assert_eq!(values.get("approvalType"), Some(&Value::from("manual")));
        assert_eq!(values.get("quotaTimeUnit"), Some(&Value::from("hour")));

        let again = ApiProduct::from_values(values).unwrap();
        assert_eq!(again, product);
    }
}
