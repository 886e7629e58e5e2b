use super::ChannelTrust;
use serde_json::{Map, Value};

/// Returns the subset of a contact's custom attributes permitted on the
/// given channel.
///
/// Pure function over the process-wide sensitivity registry: dashboard-bound
/// payloads lose restricted fields, widget- and webhook-bound payloads pass
/// through unchanged. Attribute values are cloned; the input map is not
/// modified.
///
/// # Arguments
/// * `channel` - Trust level of the payload's destination, declared by the
///   call site
/// * `attributes` - The contact's full custom-attribute map
///
/// # Examples
/// ```
/// use helpdesk_status::classification::ChannelTrust;
/// use helpdesk_status::classification::contacts::custom_attributes_for;
/// use serde_json::{Map, json};
///
/// let mut attributes = Map::new();
/// attributes.insert("auth_token".to_string(), json!("s3cret"));
/// attributes.insert("plan".to_string(), json!("enterprise"));
///
/// let dashboard = custom_attributes_for(ChannelTrust::Dashboard, &attributes);
/// assert!(!dashboard.contains_key("auth_token"));
/// assert!(dashboard.contains_key("plan"));
/// ```
pub fn custom_attributes_for(
    channel: ChannelTrust,
    attributes: &Map<String, Value>,
) -> Map<String, Value> {
    attributes
        .iter()
        .filter(|(name, _)| channel.includes_field(name))
        .map(|(name, value)| (name.clone(), value.clone()))
        .collect()
}
