/* src/loader/core/rust/src/data.rs */

use serde::{Deserialize, Serialize};

/// Payload served by the counter backend at `/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexData {
  pub application_name: String,
  pub counter: i64,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn decodes_camel_case_keys() {
    let data: IndexData =
      serde_json::from_value(serde_json::json!({ "applicationName": "demo", "counter": 7 }))
        .unwrap();
    assert_eq!(data, IndexData { application_name: "demo".into(), counter: 7 });
  }

  #[test]
  fn serializes_back_to_wire_keys() {
    let data = IndexData { application_name: "demo".into(), counter: -2 };
    let json = serde_json::to_value(&data).unwrap();
    assert_eq!(json, serde_json::json!({ "applicationName": "demo", "counter": -2 }));
  }
}
