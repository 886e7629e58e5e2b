use std::collections::HashMap;
use std::sync::LazyLock;

/// # Contact Payload Filtering
///
/// Applies the sensitivity registry to a contact's custom-attribute map
/// for a declared output channel. Consumed by serialization call sites
/// before building dashboard, widget, or webhook payloads.
pub mod contacts;

/// Sensitivity classification of a contact field.
///
/// Only `Restricted` exists today; the enum is non-exhaustive so further
/// tiers (e.g. internal, public) can be added without breaking consumers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum SensitivityTier {
    /// Hidden from dashboard serialization; only widget-facing APIs and
    /// webhooks may carry the raw value.
    Restricted,
}

// Custom attributes that must be hidden from dashboard APIs. Loaded once
// at process start and never mutated by request handling. Fields absent
// from this map are unclassified and pass every channel (default-open).
static SENSITIVE_FIELDS: LazyLock<HashMap<&'static str, SensitivityTier>> =
    LazyLock::new(|| HashMap::from([("auth_token", SensitivityTier::Restricted)]));

/// Looks up the sensitivity tier of a field by exact name match.
///
/// Returns `None` for any field never added to the registry.
pub fn tier_of(field_name: &str) -> Option<SensitivityTier> {
    SENSITIVE_FIELDS.get(field_name).copied()
}

/// # Restricted Field Check
///
/// Returns `true` if the named field must be excluded from dashboard/API
/// serialization. Unknown field names return `false`.
///
/// Call sites must consult this check rather than hardcoding field names,
/// so the registry can grow without touching serializers.
///
/// ## Example
/// ```
/// use helpdesk_status::classification::is_restricted;
///
/// assert!(is_restricted("auth_token"));
/// assert!(!is_restricted("email"));
/// ```
pub fn is_restricted(field_name: &str) -> bool {
    matches!(tier_of(field_name), Some(SensitivityTier::Restricted))
}

/// # Channel Trust Level
///
/// Named trust boundary of an outbound serialization channel. Every
/// serialization call site declares its channel explicitly; nothing is
/// inferred from context.
///
/// - `Dashboard`: general dashboard/API responses; restricted fields are
///   excluded here
/// - `Widget`: widget-facing APIs, trusted with raw
///   authentication-adjacent data
/// - `Webhook`: webhook payloads, same trust as widget channels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelTrust {
    Dashboard,
    Widget,
    Webhook,
}

impl ChannelTrust {
    /// Whether a field of the given tier may appear on this channel.
    pub fn permits(self, tier: SensitivityTier) -> bool {
        match self {
            ChannelTrust::Widget | ChannelTrust::Webhook => true,
            ChannelTrust::Dashboard => tier != SensitivityTier::Restricted,
        }
    }

    /// Whether the named field may appear on this channel.
    ///
    /// Unclassified fields pass every channel (default-open).
    pub fn includes_field(self, field_name: &str) -> bool {
        match tier_of(field_name) {
            Some(tier) => self.permits(tier),
            None => true,
        }
    }
}
