/// Prefix applied to tags synthesized from entity labels.
pub const ENTITY_LABEL_PREFIX: &str = "entity";

/// Prefix of the tag that carries the entity name.
pub const ENTITY_NAME_TAG_PREFIX: &str = "sensu_entity_name_";

/// Renders a key/value pair as a single tag.
///
/// Produces `<prefix>_<key>_<value>`, or `<key>_<value>` when `prefix` is empty.
///
/// Nothing is escaped. Underscores inside the key or value are indistinguishable from the separator, so tags built
/// this way are for display and search only and cannot be split back into their parts.
pub fn build_tag(key: &str, value: &str, prefix: &str) -> String {
    if prefix.is_empty() {
        format!("{}_{}", key, value)
    } else {
        format!("{}_{}_{}", prefix, key, value)
    }
}

/// Renders the tag identifying the entity a metric came from.
pub fn entity_name_tag(entity_name: &str) -> String {
    format!("{}{}", ENTITY_NAME_TAG_PREFIX, entity_name)
}
