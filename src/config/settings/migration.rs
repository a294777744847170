// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use serde_json::Value;

/// Older files kept the diagnostic log path at the top level as `log_file`.
pub(super) fn migrate_on_load(value: Value) -> Value {
    let Value::Object(mut map) = value else {
        return value;
    };

    if let Some(log_file) = map.remove("log_file") {
        let logging = map
            .entry("logging")
            .or_insert_with(|| Value::Object(Default::default()));
        if let Value::Object(logging) = logging {
            logging.entry("diagnostic_log").or_insert(log_file);
        }
    }

    Value::Object(map)
}

/// Deep-merge two JSON values.
/// `base` is existing file content, `overlay` is serialized current struct.
/// Overlay values take priority.
pub(super) fn deep_merge(base: Value, overlay: Value) -> Value {
    match (base, overlay) {
        (Value::Object(mut base_map), Value::Object(overlay_map)) => {
            for (key, overlay_val) in overlay_map {
                let merged = if let Some(base_val) = base_map.remove(&key) {
                    deep_merge(base_val, overlay_val)
                } else {
                    overlay_val
                };
                base_map.insert(key, merged);
            }
            Value::Object(base_map)
        }
        (_base, overlay) => overlay,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_migrate_moves_top_level_log_file() {
        let migrated = migrate_on_load(json!({"log_file": "/tmp/temps.log"}));
        assert_eq!(migrated, json!({"logging": {"diagnostic_log": "/tmp/temps.log"}}));
    }

    #[test]
    fn test_migrate_keeps_existing_diagnostic_log() {
        let migrated = migrate_on_load(json!({
            "log_file": "/old.log",
            "logging": {"diagnostic_log": "/new.log"}
        }));
        assert_eq!(migrated, json!({"logging": {"diagnostic_log": "/new.log"}}));
    }

    #[test]
    fn test_migrate_leaves_non_objects() {
        assert_eq!(migrate_on_load(json!([1, 2])), json!([1, 2]));
    }

    #[test]
    fn test_deep_merge_overlay_wins() {
        let merged = deep_merge(
            json!({"chart": {"width": 90, "palette": "mono"}}),
            json!({"chart": {"width": 110}}),
        );
        assert_eq!(merged, json!({"chart": {"width": 110, "palette": "mono"}}));
    }
}
