//! Fixtures shared by the unit tests.

use serde_json::{json, Value};
use std::collections::HashMap;

use crate::Config;

pub const TOKEN_DEFAULT: &str = "token-default";
pub const TOKEN_980: &str = "token-980hrcnx";
pub const TOKEN_LTF: &str = "token-ltf8289j";

/// Configuration pointing both upstreams at local mock servers.
pub fn config_for(airtable_url: &str, line_url: &str, timeout_ms: u64) -> Config {
    let vars: HashMap<&str, String> = HashMap::from([
        ("AIRTABLE_API_KEY", "pat-test".to_string()),
        ("AIRTABLE_BASE_ID", "appTest".to_string()),
        ("AIRTABLE_TABLE_ID", "tblTest".to_string()),
        ("AIRTABLE_API_URL", airtable_url.to_string()),
        ("AIRTABLE_TIMEOUT_MS", timeout_ms.to_string()),
        ("LINE_API_URL", line_url.to_string()),
        ("LINE_CHANNEL_ACCESS_TOKEN", TOKEN_DEFAULT.to_string()),
        (
            "LINE_ACCOUNT_TOKENS",
            format!("980hrcnx={},ltf8289j={}", TOKEN_980, TOKEN_LTF),
        ),
    ]);

    Config::from_lookup(|key| vars.get(key).cloned()).unwrap()
}

/// Airtable list body with one reservation; `Value::Null` omits `lineAccount`.
pub fn reservation_body(line_account: Value) -> Value {
    let mut fields = json!({"userId_": "U4af4980629", "name": "王小明"});
    if !line_account.is_null() {
        fields["lineAccount"] = line_account;
    }

    json!({
        "records": [{
            "id": "recTest",
            "createdTime": "2024-01-01T00:00:00.000Z",
            "fields": fields
        }]
    })
}
