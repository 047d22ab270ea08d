use serde::Serialize;

/// Value type of a schema attribute. Only strings are used by GPG keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeType {
    String,
}

/// One attribute of a resource or data source schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attribute {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub attr_type: AttributeType,
    pub required: bool,
    pub optional: bool,
    pub computed: bool,
    /// A change to this attribute destroys and recreates the object.
    pub force_new: bool,
    pub description: &'static str,
}

impl Attribute {
    pub const fn required_string(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            attr_type: AttributeType::String,
            required: true,
            optional: false,
            computed: false,
            force_new: false,
            description,
        }
    }

    pub const fn computed_string(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            attr_type: AttributeType::String,
            required: false,
            optional: false,
            computed: true,
            force_new: false,
            description,
        }
    }

    /// Optional in configuration, filled in by the provider when unset.
    pub const fn optional_computed_string(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            attr_type: AttributeType::String,
            required: false,
            optional: true,
            computed: true,
            force_new: false,
            description,
        }
    }

    pub const fn force_new(mut self) -> Self {
        self.force_new = true;
        self
    }
}

/// Schema of a resource or a data source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Schema {
    pub name: &'static str,
    pub attributes: Vec<Attribute>,
}

impl Schema {
    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|a| a.name == name)
    }

    pub fn is_force_new(&self, name: &str) -> bool {
        self.attribute(name).is_some_and(|a| a.force_new)
    }
}

/// Everything this provider exposes.
#[derive(Debug, Clone, Serialize)]
pub struct ProviderSchema {
    pub resources: Vec<Schema>,
    pub data_sources: Vec<Schema>,
}

pub const REGISTRY_GPG_KEY: &str = "tfe_registry_gpg_key";

/// Schema of the `tfe_registry_gpg_key` resource.
///
/// The namespace is part of the key's registry address, so changing it
/// forces a new key even though the API would accept it in an update.
pub fn registry_gpg_key_resource() -> Schema {
    Schema {
        name: REGISTRY_GPG_KEY,
        attributes: vec![
            Attribute::required_string(
                "provider_namespace",
                "Organization that owns the key.",
            )
            .force_new(),
            Attribute::required_string("ascii_armor", "ASCII-armored public key material.")
                .force_new(),
            Attribute::computed_string("key_id", "Key id computed by the registry."),
            Attribute::optional_computed_string("type", "Key type; always \"gpg-keys\"."),
        ],
    }
}

/// Schema of the `tfe_registry_gpg_key` data source.
pub fn registry_gpg_key_data_source() -> Schema {
    Schema {
        name: REGISTRY_GPG_KEY,
        attributes: vec![
            Attribute::required_string("provider_namespace", "Organization that owns the key."),
            Attribute::required_string("key_id", "Key id to look up."),
            Attribute::computed_string("ascii_armor", "ASCII-armored public key material."),
        ],
    }
}

pub fn provider_schema() -> ProviderSchema {
    ProviderSchema {
        resources: vec![registry_gpg_key_resource()],
        data_sources: vec![registry_gpg_key_data_source()],
    }
}
