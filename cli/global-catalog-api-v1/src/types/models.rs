use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// The API sends `null` for some empty collections, which deserializes like
/// a missing field.
fn default_on_null<'de, D, T>(d: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Deserialize::deserialize(d).map(|x: Option<T>| x.unwrap_or_default())
}

///Overview
///
/// Overview is nested in the top level. The key value pair is
/// `[_language_]overview_ui`.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Overview {
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub long_description: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub featured_description: Option<String>,
}

///Image
///
/// Image annotation for this catalog entry. The image is a URL.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Image {
    #[serde(default)]
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub small_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub medium_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feature_image: Option<String>,
}

///Provider
///
/// Information related to the provider associated with a catalog entry.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Provider {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub support_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

///CfMetaData
///
/// Service-related metadata.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct CfMetaData {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub type_: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iam_compatible: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unique_api_key: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provisionable: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bindable: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub async_provisioning_supported: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub async_unprovisioning_supported: Option<bool>,
    #[serde(
        default,
        deserialize_with = "default_on_null",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub requires: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan_updateable: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_check_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub test_check_interval: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_key_supported: Option<bool>,
    #[serde(
        default,
        deserialize_with = "default_on_null",
        skip_serializing_if = "HashMap::is_empty"
    )]
    pub cf_guid: HashMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crn_mask: Option<String>,
    #[serde(
        default,
        deserialize_with = "default_on_null",
        skip_serializing_if = "serde_json::Map::is_empty"
    )]
    pub user_defined_service: serde_json::Map<String, serde_json::Value>,
    #[serde(
        default,
        deserialize_with = "default_on_null",
        skip_serializing_if = "serde_json::Map::is_empty"
    )]
    pub extension: serde_json::Map<String, serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paid_only: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_create_page_hybrid_enabled: Option<bool>,
}

///PlanMetaData
///
/// Plan-related metadata.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct PlanMetaData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bindable: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reservable: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_internal_users: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub async_provisioning_supported: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub async_unprovisioning_supported: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provision_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub test_check_interval: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub single_scope_instance: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_check_enabled: Option<bool>,
    #[serde(
        default,
        deserialize_with = "default_on_null",
        skip_serializing_if = "HashMap::is_empty"
    )]
    pub cf_guid: HashMap<String, String>,
}

///AliasMetaData
///
/// Alias-related metadata.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct AliasMetaData {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub type_: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan_id: Option<String>,
}

///SourceMetaData
///
/// Location of your applications source files.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct SourceMetaData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub type_: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

///TemplateMetaData
///
/// Template-related metadata.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct TemplateMetaData {
    #[serde(
        default,
        deserialize_with = "default_on_null",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub services: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_memory: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_cmd: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<SourceMetaData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub runtime_catalog_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cf_runtime_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub executable_file: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buildpack: Option<String>,
    #[serde(
        default,
        deserialize_with = "default_on_null",
        skip_serializing_if = "HashMap::is_empty"
    )]
    pub environment_variables: HashMap<String, String>,
}

///Bullets
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Bullets {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,
}

///UIMediaSourceMetaData
///
/// Location of your applications media source files.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct UIMediaSourceMetaData {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub type_: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

///UIMetaMedia
///
/// Media-related metadata.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct UIMetaMedia {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub type_: Option<String>,
    #[serde(rename = "URL", default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(
        default,
        deserialize_with = "default_on_null",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub source: Vec<UIMediaSourceMetaData>,
}

///Strings
///
/// Information related to a translated text message.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Strings {
    #[serde(
        default,
        deserialize_with = "default_on_null",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub bullets: Vec<Bullets>,
    #[serde(
        default,
        deserialize_with = "default_on_null",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub media: Vec<UIMetaMedia>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub not_creatable_msg: Option<String>,
    #[serde(
        rename = "not_creatable__robot_msg",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub not_creatable_robot_msg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deprecation_warning: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub popup_warning_message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instruction: Option<String>,
}

///Urls
///
/// Information related to the URL of a catalog entry.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Urls {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructions_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sdk_download_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub terms_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_create_page_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog_details_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deprecation_doc_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dashboard_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registration_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apidocsurl: Option<String>,
}

///UIMetaData
///
/// Information related to the UI presentation associated with a catalog
/// entry.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct UIMetaData {
    /// Language specific translation of translation properties, like label
    /// and description.
    #[serde(
        default,
        deserialize_with = "default_on_null",
        skip_serializing_if = "HashMap::is_empty"
    )]
    pub strings: HashMap<String, Strings>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub urls: Option<Urls>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub embeddable_dashboard: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub embeddable_dashboard_full_width: Option<bool>,
    #[serde(
        default,
        deserialize_with = "default_on_null",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub navigation_order: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub not_creatable: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_offering_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accessible_during_provision: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub side_by_side_index: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_of_service_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hidden: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hide_lite_metering: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub no_upgrade_next_step: Option<bool>,
}

///DrMetaData
///
/// SLA Disaster Recovery-related metadata.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct DrMetaData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dr: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

///SLAMetaData
///
/// Service Level Agreement related metadata.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct SLAMetaData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub terms: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tenancy: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provisioning: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub responsiveness: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dr: Option<DrMetaData>,
}

///Callbacks
///
/// Callback-related information associated with a catalog entry.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Callbacks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub controller_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub broker_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub broker_proxy_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dashboard_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dashboard_data_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dashboard_detail_tab_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dashboard_detail_tab_ext_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_monitor_api: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_monitor_app: Option<String>,
    #[serde(
        default,
        deserialize_with = "default_on_null",
        skip_serializing_if = "HashMap::is_empty"
    )]
    pub api_endpoint: HashMap<String, String>,
}

///Price
///
/// Pricing-related information.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Price {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity_tier: Option<i64>,
    #[serde(rename = "Price", default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

///Amount
///
/// Country-specific pricing information.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Amount {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(
        default,
        deserialize_with = "default_on_null",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub prices: Vec<Price>,
}

///StartingPrice
///
/// Plan-specific starting price information.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct StartingPrice {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deployment_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(
        default,
        deserialize_with = "default_on_null",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub amount: Vec<Amount>,
}

///PricingSet
///
/// Pricing-related information.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct PricingSet {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub type_: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub starting_price: Option<StartingPrice>,
}

///Broker
///
/// The broker associated with a catalog entry.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Broker {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guid: Option<String>,
}

///DeploymentBase
///
/// Deployment-related metadata.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct DeploymentBase {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_crn: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_crn: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mccp_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub broker: Option<Broker>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supports_rc_migration: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_network: Option<String>,
}

/// The deployment metadata returned with a catalog entry has the same shape
/// as the one sent on create and update.
pub type CatalogEntryMetadataDeployment = DeploymentBase;

///ObjectMetadataSet
///
/// Model used to describe metadata object that can be set.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct ObjectMetadataSet {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rc_compatible: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service: Option<CfMetaData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan: Option<PlanMetaData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<AliasMetaData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<TemplateMetaData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ui: Option<UIMetaData>,
    #[serde(
        default,
        deserialize_with = "default_on_null",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub compliance: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sla: Option<SLAMetaData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub callbacks: Option<Callbacks>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(
        default,
        deserialize_with = "default_on_null",
        skip_serializing_if = "serde_json::Map::is_empty"
    )]
    pub other: serde_json::Map<String, serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pricing: Option<PricingSet>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deployment: Option<DeploymentBase>,
}

///CatalogEntryMetadataPricing
///
/// Pricing-related information as returned with a catalog entry.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct CatalogEntryMetadataPricing {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub type_: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub starting_price: Option<StartingPrice>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deployment_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deployment_location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deployment_region: Option<String>,
    #[serde(
        default,
        deserialize_with = "default_on_null",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub metrics: Vec<Metrics>,
}

///CatalogEntryMetadata
///
/// Model used to describe metadata object returned.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct CatalogEntryMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rc_compatible: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service: Option<CfMetaData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan: Option<PlanMetaData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<AliasMetaData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<TemplateMetaData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ui: Option<UIMetaData>,
    #[serde(
        default,
        deserialize_with = "default_on_null",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub compliance: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sla: Option<SLAMetaData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub callbacks: Option<Callbacks>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(
        default,
        deserialize_with = "default_on_null",
        skip_serializing_if = "serde_json::Map::is_empty"
    )]
    pub other: serde_json::Map<String, serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pricing: Option<CatalogEntryMetadataPricing>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deployment: Option<CatalogEntryMetadataDeployment>,
}

///CatalogEntry
///
/// An entry in the global catalog.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct CatalogEntry {
    /// Programmatic name for this catalog entry, which must be formatted
    /// like a CRN segment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// The type of catalog entry which determines which metadata is
    /// applicable, see [`CatalogEntryKind`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Overview is nested in the top level.
    /// The key value pair is `[_language_]overview_ui`.
    #[serde(
        default,
        deserialize_with = "default_on_null",
        skip_serializing_if = "HashMap::is_empty"
    )]
    pub overview_ui: HashMap<String, Overview>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images: Option<Image>,
    /// The ID of the parent catalog entry if it exists.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    /// Boolean value that determines the global visibility for the catalog
    /// entry, and its children.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
    #[serde(
        default,
        deserialize_with = "default_on_null",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub tags: Vec<String>,
    /// Boolean value that determines whether the catalog entry is a group.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<Provider>,
    /// Boolean value that describes whether the service is active.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    /// URL to get details about this object.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<CatalogEntryMetadata>,
    /// Catalog entry's unique ID. It's the same across all catalog
    /// instances.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog_crn: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children_url: Option<String>,
    #[serde(
        default,
        deserialize_with = "default_on_null",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub geo_tags: Vec<String>,
    #[serde(
        default,
        deserialize_with = "default_on_null",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub pricing_tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<DateTime<Utc>>,
}

///CatalogEntryPrototype
///
/// The body sent to create or update a catalog entry.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct CatalogEntryPrototype {
    pub name: String,
    pub kind: String,
    pub overview_ui: HashMap<String, Overview>,
    pub images: Image,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    pub disabled: bool,
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<bool>,
    pub provider: Provider,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    /// URL of the entry being updated, as returned by a previous read.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<ObjectMetadataSet>,
    /// Catalog entry's unique ID. Required on create.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

/// Well known values of [`CatalogEntry::kind`].
///
/// The API accepts any string, so these are plain constants rather than an
/// enum.
pub struct CatalogEntryKind;

impl CatalogEntryKind {
    pub const SERVICE: &'static str = "service";
    pub const TEMPLATE: &'static str = "template";
    pub const DASHBOARD: &'static str = "dashboard";
    pub const PLAN: &'static str = "plan";
    pub const DEPLOYMENT: &'static str = "deployment";
    pub const ALIAS: &'static str = "alias";
}

///EntrySearchResult
///
/// A paginated search result containing catalog entries.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct EntrySearchResult {
    #[serde(default)]
    pub offset: i64,
    #[serde(default)]
    pub limit: i64,
    #[serde(default)]
    pub count: i64,
    #[serde(default)]
    pub resource_count: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prev: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
    #[serde(default, deserialize_with = "default_on_null")]
    pub resources: Vec<CatalogEntry>,
}

///VisibilityDetailAccounts
///
/// Allowlist of accounts.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct VisibilityDetailAccounts {
    /// (_accountid_) is the GUID of the account and the value is the scope
    /// of who set it.
    #[serde(rename = "_accountid", default, skip_serializing_if = "Option::is_none")]
    pub accountid: Option<String>,
}

///VisibilityDetail
///
/// Visibility details related to a catalog entry.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct VisibilityDetail {
    #[serde(default)]
    pub accounts: VisibilityDetailAccounts,
}

///Visibility
///
/// Information related to the visibility of a catalog entry.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Visibility {
    /// This field is derived from the restrictions of the entry and
    /// its parents, e.g. `public`, `ibm_only` or `private`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restrictions: Option<String>,
    /// The owner of the object, typically an account GUID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    /// Allows the object to be extended.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extendable: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include: Option<VisibilityDetail>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude: Option<VisibilityDetail>,
    /// Determines whether the owning account has full control over the
    /// visibility of the entry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approved: Option<bool>,
}

///VisibilityUpdate
///
/// The body sent to update the visibility of a catalog entry.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct VisibilityUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restrictions: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extendable: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include: Option<VisibilityDetail>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude: Option<VisibilityDetail>,
}

///Metrics
///
/// Plan-specific cost metrics information.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Metrics {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub part_ref: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metric_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tier_model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub charge_unit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub charge_unit_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub charge_unit_quantity: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub charge_unit_display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage_cap_qty: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_cap: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effective_from: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effective_until: Option<DateTime<Utc>>,
    #[serde(
        default,
        deserialize_with = "default_on_null",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub amounts: Vec<Amount>,
}

///PricingGet
///
/// Pricing-related information for a plan.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct PricingGet {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deployment_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deployment_location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deployment_region: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub type_: Option<String>,
    #[serde(
        default,
        deserialize_with = "default_on_null",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub metrics: Vec<Metrics>,
}

///PricingSearchResult
///
/// A paginated search result containing pricing information.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct PricingSearchResult {
    #[serde(default)]
    pub offset: i64,
    #[serde(default)]
    pub limit: i64,
    #[serde(default)]
    pub count: i64,
    #[serde(default)]
    pub resource_count: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prev: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
    #[serde(default, deserialize_with = "default_on_null")]
    pub resources: Vec<PricingGet>,
}

///Message
///
/// An audit log entry which describes a change made to a catalog entry.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Message {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effective: Option<Visibility>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub who_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub who_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub who_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gid: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub type_: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(
        default,
        deserialize_with = "default_on_null",
        skip_serializing_if = "serde_json::Map::is_empty"
    )]
    pub data: serde_json::Map<String, serde_json::Value>,
}

///AuditSearchResult
///
/// A paginated search result containing audit logs.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct AuditSearchResult {
    #[serde(default)]
    pub offset: i64,
    #[serde(default)]
    pub limit: i64,
    #[serde(default)]
    pub count: i64,
    #[serde(default)]
    pub resource_count: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prev: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
    #[serde(default, deserialize_with = "default_on_null")]
    pub resources: Vec<Message>,
}

///Artifact
///
/// Artifact Details.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Artifact {
    /// The name of the artifact.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// The timestamp of the last update to the artifact.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<DateTime<Utc>>,
    /// The url for the artifact.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// The etag of the artifact.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,
    /// The content length of the artifact.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<i64>,
}

///Artifacts
///
/// Artifacts List.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Artifacts {
    /// The total number of artifacts.
    #[serde(default)]
    pub count: i64,
    #[serde(default, deserialize_with = "default_on_null")]
    pub resources: Vec<Artifact>,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    /// A handful of fields use wire names that don't follow snake case.
    #[test]
    fn irregular_wire_names() {
        let strings: Strings = serde_json::from_value(json!({
            "not_creatable__robot_msg": "robots welcome",
            "media": [{ "URL": "https://example.com/a.png", "type": "image" }]
        }))
        .unwrap();
        assert_eq!(
            strings.not_creatable_robot_msg.as_deref(),
            Some("robots welcome")
        );
        assert_eq!(
            strings.media[0].url.as_deref(),
            Some("https://example.com/a.png")
        );

        let price: Price = serde_json::from_value(json!({"quantity_tier": 1, "Price": 72.5})).unwrap();
        assert_eq!(price.price, Some(72.5));

        let accounts = VisibilityDetailAccounts {
            accountid: Some("abc".to_string()),
        };
        assert_eq!(
            serde_json::to_value(&accounts).unwrap(),
            json!({ "_accountid": "abc" })
        );
    }

    #[test]
    fn catalog_entry_from_api_response() {
        let entry: CatalogEntry = serde_json::from_value(json!({
            "id": "cloudant",
            "name": "cloudantnosqldb",
            "kind": "service",
            "overview_ui": {
                "en": {
                    "display_name": "Cloudant",
                    "long_description": "A fully managed document store",
                    "description": "NoSQL DB"
                }
            },
            "images": { "image": "https://example.com/icon.svg" },
            "tags": ["databases", "ibm_created"],
            "provider": { "email": "support@example.com", "name": "IBM" },
            "metadata": {
                "rc_compatible": true,
                "ui": { "end_of_service_time": "2019-01-01T12:00:00.000Z" },
                "pricing": { "type": "paid", "metrics": [{ "metric_id": "part-1" }] },
                "other": { "anyKey": "anyValue" }
            },
            "created": "2019-01-01T12:00:00.000Z",
            "some_future_field": 42
        }))
        .unwrap();

        assert_eq!(entry.id.as_deref(), Some("cloudant"));
        assert_eq!(entry.kind.as_deref(), Some(CatalogEntryKind::SERVICE));
        assert_eq!(entry.overview_ui["en"].display_name, "Cloudant");
        assert_eq!(entry.tags, vec!["databases", "ibm_created"]);

        let metadata = entry.metadata.unwrap();
        assert_eq!(metadata.rc_compatible, Some(true));
        assert_eq!(metadata.pricing.unwrap().metrics[0].metric_id.as_deref(), Some("part-1"));
        assert_eq!(metadata.other["anyKey"], json!("anyValue"));
        assert!(metadata.ui.unwrap().end_of_service_time.is_some());
        assert!(entry.created.is_some());
    }

    /// Unset optional fields are not sent to the API.
    #[test]
    fn prototype_omits_unset_fields() {
        let prototype = CatalogEntryPrototype {
            name: "my-service".to_string(),
            kind: CatalogEntryKind::SERVICE.to_string(),
            images: Image {
                image: "https://example.com/icon.svg".to_string(),
                ..Default::default()
            },
            provider: Provider {
                email: "me@example.com".to_string(),
                name: "me".to_string(),
                ..Default::default()
            },
            id: Some("my-service-id".to_string()),
            ..Default::default()
        };

        assert_eq!(
            serde_json::to_value(&prototype).unwrap(),
            json!({
                "name": "my-service",
                "kind": "service",
                "overview_ui": {},
                "images": { "image": "https://example.com/icon.svg" },
                "disabled": false,
                "tags": [],
                "provider": { "email": "me@example.com", "name": "me" },
                "id": "my-service-id"
            })
        );
    }

    /// Entries written by other tools may lack fields the API requires on
    /// create; reading them must still succeed.
    #[test]
    fn partial_entries_deserialize() {
        let entry: CatalogEntry = serde_json::from_value(json!({
            "id": "a",
            "overview_ui": { "en": { "display_name": "X", "description": "d" } },
            "images": { "small_image": "https://example.com/small.svg" },
            "tags": null,
            "geo_tags": null
        }))
        .unwrap();
        assert_eq!(entry.overview_ui["en"].display_name, "X");
        assert_eq!(entry.overview_ui["en"].long_description, "");
        assert_eq!(entry.images.unwrap().image, "");
        assert!(entry.tags.is_empty());
        assert!(entry.geo_tags.is_empty());

        let result: EntrySearchResult = serde_json::from_value(json!({
            "count": 1,
            "resources": [{ "id": "b", "provider": { "name": "IBM" } }]
        }))
        .unwrap();
        let provider = result.resources[0].provider.clone().unwrap();
        assert_eq!(provider.name, "IBM");
        assert_eq!(provider.email, "");

        let result: EntrySearchResult =
            serde_json::from_value(json!({ "count": 0, "resources": null })).unwrap();
        assert!(result.resources.is_empty());

        let detail: VisibilityDetail = serde_json::from_value(json!({})).unwrap();
        assert_eq!(detail, VisibilityDetail::default());
    }
}
