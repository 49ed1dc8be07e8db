use serde::{Deserialize, Deserializer};

/// Deserializes a field that producers may send as `null`, falling back to the type's default.
///
/// Sensu Go encodes empty slices and maps without `omitempty`, so an absent collection arrives as `null` rather than
/// being left out.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
