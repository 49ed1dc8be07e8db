use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{ObjectMeta, StringMap};

macro_rules! opaque_resource {
    ($(#[$attr:meta])* $ty:ident) => {
        $(#[$attr])*
        #[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
        pub struct $ty {
            #[serde(default)]
            metadata: ObjectMeta,

            #[serde(flatten)]
            extra: Map<String, Value>,
        }

        impl $ty {
            /// Creates a new resource from its metadata.
            pub fn new(metadata: ObjectMeta) -> Self {
                Self {
                    metadata,
                    extra: Map::new(),
                }
            }

            /// Returns the resource metadata.
            pub fn metadata(&self) -> &ObjectMeta {
                &self.metadata
            }

            /// Returns the resource name.
            pub fn name(&self) -> &str {
                self.metadata.name()
            }

            /// Returns the namespace the resource belongs to.
            pub fn namespace(&self) -> &str {
                self.metadata.namespace()
            }

            /// Returns the labels of the resource.
            pub fn labels(&self) -> &StringMap {
                self.metadata.labels()
            }

            /// Returns the annotations of the resource.
            pub fn annotations(&self) -> &StringMap {
                self.metadata.annotations()
            }

            /// Returns a field that is not modeled explicitly, such as `entity_class` or `status`.
            pub fn field(&self, key: &str) -> Option<&Value> {
                self.extra.get(key)
            }

            /// Sets a field that is not modeled explicitly.
            ///
            /// This variant is specifically for use in builder-style APIs.
            pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
                self.extra.insert(key.into(), value.into());
                self
            }
        }
    };
}

opaque_resource!(
    /// The monitored source (host, service, proxy) that an event describes.
    ///
    /// Only the metadata is modeled; every other field is carried through untouched so that re-serializing an entity
    /// yields the document that was received.
    Entity
);

opaque_resource!(
    /// The check definition and result that produced an event.
    ///
    /// Only the metadata is modeled; every other field (`command`, `status`, `output`, and so on) is carried through
    /// untouched.
    Check
);
