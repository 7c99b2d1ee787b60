use serde_json::Value;

fn is_mode(value: Option<&Value>) -> bool {
    matches!(value.and_then(Value::as_str), Some("MANUAL") | Some("AUTO"))
}

fn is_number(value: Option<&Value>) -> bool {
    value.map(Value::is_number).unwrap_or(false)
}

fn is_boolean(value: Option<&Value>) -> bool {
    value.map(Value::is_boolean).unwrap_or(false)
}

/// Checks that a decoded device payload has the expected status shape.
///
/// Pure shape gate: field presence and typing only. Out-of-range readings
/// (a luminosity above 4095, a negative humidity) still pass; range
/// classification belongs to whoever renders the status.
pub fn validate_status(payload: &Value) -> bool {
    let Some(root) = payload.as_object() else {
        return false;
    };

    let Some(light) = root.get("light").and_then(Value::as_object) else {
        return false;
    };
    if !is_number(light.get("luminosity")) {
        return false;
    }
    if !is_mode(light.get("mode")) {
        return false;
    }
    if !is_boolean(light.get("isOn")) {
        return false;
    }
    if !is_number(light.get("threshold")) {
        return false;
    }

    let Some(fan) = root.get("fan").and_then(Value::as_object) else {
        return false;
    };
    if !is_number(fan.get("temperature")) {
        return false;
    }
    if !is_number(fan.get("humidity")) {
        return false;
    }
    if !is_mode(fan.get("mode")) {
        return false;
    }
    if !is_boolean(fan.get("isOn")) {
        return false;
    }
    if !is_number(fan.get("threshold")) {
        return false;
    }

    let Some(buzzer) = root.get("buzzer").and_then(Value::as_object) else {
        return false;
    };
    if !is_mode(buzzer.get("mode")) {
        return false;
    }
    if !is_boolean(buzzer.get("isOn")) {
        return false;
    }

    true
}

/// Human-readable reason for a rejected payload, used for error display.
///
/// This is a separate pass from [`validate_status`] and only distinguishes
/// the first missing top-level section; a payload whose sections are all
/// present but mistyped gets the generic fallback, so the reported culprit
/// can differ from the field that actually failed the gate.
pub fn validation_error(payload: &Value) -> String {
    if payload.is_null() {
        return "The response is empty".to_string();
    }

    let Some(root) = payload.as_object() else {
        return "The response is not a JSON object".to_string();
    };

    for section in ["light", "fan", "buzzer"] {
        if !root.contains_key(section) {
            return format!("Missing \"{section}\" section");
        }
    }

    "Invalid JSON structure. Check that the endpoint returns the expected format".to_string()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn valid_payload() -> Value {
        json!({
            "light": { "luminosity": 1000, "mode": "AUTO", "isOn": false, "threshold": 2500 },
            "fan": { "temperature": 24.5, "humidity": 60.0, "mode": "AUTO", "isOn": false, "threshold": 28.0 },
            "buzzer": { "mode": "AUTO", "isOn": false }
        })
    }

    #[test]
    fn test_accepts_valid_payload() {
        assert!(validate_status(&valid_payload()));
    }

    #[test]
    fn test_accepts_manual_mode() {
        let mut payload = valid_payload();
        payload["light"]["mode"] = json!("MANUAL");
        assert!(validate_status(&payload));
    }

    #[test]
    fn test_rejects_non_object_payloads() {
        assert!(!validate_status(&Value::Null));
        assert!(!validate_status(&json!(42)));
        assert!(!validate_status(&json!("status")));
        assert!(!validate_status(&json!([1, 2, 3])));
    }

    #[test]
    fn test_rejects_missing_sections() {
        for section in ["light", "fan", "buzzer"] {
            let mut payload = valid_payload();
            payload.as_object_mut().unwrap().remove(section);
            assert!(!validate_status(&payload), "missing {section} accepted");
        }
    }

    #[test]
    fn test_rejects_section_of_wrong_type() {
        let mut payload = valid_payload();
        payload["fan"] = json!("not an object");
        assert!(!validate_status(&payload));
    }

    #[test]
    fn test_rejects_unknown_mode() {
        for bad in [json!("auto"), json!("OFF"), json!(1), json!(null)] {
            let mut payload = valid_payload();
            payload["light"]["mode"] = bad;
            assert!(!validate_status(&payload));
        }
    }

    #[test]
    fn test_rejects_mistyped_fields() {
        let mut payload = valid_payload();
        payload["light"]["luminosity"] = json!("1000");
        assert!(!validate_status(&payload));

        let mut payload = valid_payload();
        payload["fan"]["isOn"] = json!("true");
        assert!(!validate_status(&payload));

        let mut payload = valid_payload();
        payload["fan"]["humidity"] = json!(null);
        assert!(!validate_status(&payload));
    }

    #[test]
    fn test_missing_field_rejected_wholesale() {
        let mut payload = valid_payload();
        payload["fan"].as_object_mut().unwrap().remove("threshold");
        assert!(!validate_status(&payload));
    }

    #[test]
    fn test_no_range_checks() {
        let mut payload = valid_payload();
        payload["light"]["luminosity"] = json!(999999);
        payload["fan"]["humidity"] = json!(-20.0);
        assert!(validate_status(&payload));
    }

    #[test]
    fn test_buzzer_needs_no_threshold() {
        // Extra fields on buzzer are also fine.
        let mut payload = valid_payload();
        payload["buzzer"]["threshold"] = json!(30.0);
        assert!(validate_status(&payload));
    }

    #[test]
    fn test_error_names_first_missing_section() {
        let mut payload = valid_payload();
        payload.as_object_mut().unwrap().remove("fan");
        assert_eq!(validation_error(&payload), "Missing \"fan\" section");

        payload.as_object_mut().unwrap().remove("light");
        assert_eq!(validation_error(&payload), "Missing \"light\" section");
    }

    #[test]
    fn test_error_for_empty_and_non_object() {
        assert_eq!(validation_error(&Value::Null), "The response is empty");
        assert_eq!(
            validation_error(&json!("nope")),
            "The response is not a JSON object"
        );
    }

    #[test]
    fn test_error_can_disagree_with_gate() {
        // All sections present but a field is mistyped: the gate rejects,
        // the diagnostic falls back to the generic message.
        let mut payload = valid_payload();
        payload["light"]["isOn"] = json!("yes");

        assert!(!validate_status(&payload));
        assert!(validation_error(&payload).starts_with("Invalid JSON structure"));
    }
}
