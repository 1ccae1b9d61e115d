//! Pools mode: dump the `/control/jobs/totals` payload verbatim.

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;
use serde_json::ser::{PrettyFormatter, Serializer};

/// Pretty-print the raw totals payload with a four-space indent. Object
/// keys come out sorted; `serde_json` maps iterate in key order.
pub fn render_totals(value: &Value) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = Serializer::with_formatter(&mut buf, formatter);
    value
        .serialize(&mut ser)
        .context("failed to serialize totals payload")?;
    String::from_utf8(buf).context("totals payload rendered as invalid UTF-8")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn renders_four_space_indent_with_sorted_keys() {
        let value = json!({"zeta": 1, "alpha": {"inner": true}});
        let text = render_totals(&value).unwrap();
        assert_eq!(
            text,
            "{\n    \"alpha\": {\n        \"inner\": true\n    },\n    \"zeta\": 1\n}"
        );
    }

    #[test]
    fn renders_scalars_unchanged() {
        assert_eq!(render_totals(&json!(42)).unwrap(), "42");
    }
}
