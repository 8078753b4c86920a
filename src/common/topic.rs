use serde::{Deserialize, Serialize};

use crate::common::entity::Entity;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct SchemaEntry {
    pub name: String,
    pub encrypted: bool,
    pub indexed: bool,
    pub persistent: bool,
    pub optional: bool,
    #[serde(rename = "type")]
    pub field_type: String,
}

impl SchemaEntry {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

impl Default for SchemaEntry {
    fn default() -> Self {
        Self {
            name: "key1".to_string(),
            encrypted: false,
            indexed: true,
            persistent: true,
            optional: true,
            field_type: "STRING".to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct Topic {
    pub name: String,
    pub partitions: u32,
    pub replication_factor: u32,
    pub documentation: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serializer: Option<String>,
    pub business_time_field: String,
    pub rowkey_field: String,
    pub record_type_field: String,
    pub key_schema: Vec<SchemaEntry>,
    pub value_schema: Vec<SchemaEntry>,
}

impl Topic {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn samples() -> Vec<Topic> {
        vec![
            Topic {
                documentation: "raw log lines as read from the sources".to_string(),
                ..Topic::new("logisland_raw")
            },
            Topic {
                partitions: 4,
                documentation: "parsed records".to_string(),
                serializer: Some("com.hurence.logisland.serializer.KryoSerializer".to_string()),
                ..Topic::new("logisland_events")
            },
            Topic {
                documentation: "records rejected by a processor".to_string(),
                ..Topic::new("logisland_errors")
            },
        ]
    }
}

impl Default for Topic {
    fn default() -> Self {
        Self {
            name: String::new(),
            partitions: 1,
            replication_factor: 1,
            documentation: "description of the topic".to_string(),
            serializer: None,
            business_time_field: "record_time".to_string(),
            rowkey_field: "record_id".to_string(),
            record_type_field: "record_type".to_string(),
            key_schema: vec![SchemaEntry::new("key1"), SchemaEntry::new("key2")],
            value_schema: vec![SchemaEntry::new("value1"), SchemaEntry::new("value2")],
        }
    }
}

impl Entity for Topic {
    fn id(&self) -> String {
        self.name.clone()
    }

    fn search_text(&self) -> String {
        format!("{}{}", self.name, self.documentation)
    }

    fn collection_key() -> &'static str {
        "topics"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_topic_carries_defaults() {
        let topic = Topic::new("orders");
        assert_eq!(topic.name, "orders");
        assert_eq!(topic.partitions, 1);
        assert_eq!(topic.replication_factor, 1);
        assert_eq!(topic.key_schema.len(), 2);
        assert_eq!(topic.value_schema.len(), 2);
        assert_eq!(topic.key_schema[1].name, "key2");
        assert_eq!(topic.value_schema[0].name, "value1");
        assert!(topic.value_schema.iter().all(|e| e.field_type == "STRING" && e.indexed));
    }

    #[test]
    fn decodes_partial_backend_payload() {
        let json = r#"{
            "name": "logs",
            "partitions": 4,
            "serializer": "com.hurence.logisland.serializer.KryoSerializer",
            "keySchema": [{"name": "id", "type": "LONG", "encrypted": true}]
        }"#;
        let topic: Topic = serde_json::from_str(json).unwrap();
        assert_eq!(topic.partitions, 4);
        assert_eq!(topic.replication_factor, 1);
        assert_eq!(topic.rowkey_field, "record_id");
        assert_eq!(topic.key_schema.len(), 1);
        assert_eq!(topic.key_schema[0].field_type, "LONG");
        assert!(topic.key_schema[0].encrypted);
        assert!(topic.key_schema[0].persistent);
        assert_eq!(topic.value_schema.len(), 2);
    }

    #[test]
    fn encodes_camel_case_fields() {
        let value = serde_json::to_value(Topic::new("orders")).unwrap();
        assert_eq!(value["replicationFactor"], 1);
        assert_eq!(value["businessTimeField"], "record_time");
        assert_eq!(value["valueSchema"][0]["type"], "STRING");
        assert!(value.get("serializer").is_none());
    }
}
