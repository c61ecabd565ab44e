use serde_json::Value;

use crate::complaint::Complaint;

/// Reads one candidate date field from a complaint.
pub type DateAccessor = fn(&Complaint) -> Option<&Value>;

fn archived_at(complaint: &Complaint) -> Option<&Value> {
    complaint.field("fechaArchivamiento")
}

fn archived_at_snake(complaint: &Complaint) -> Option<&Value> {
    complaint.field("fecha_archivamiento")
}

fn last_updated_at(complaint: &Complaint) -> Option<&Value> {
    complaint.field("fechaActualizacion")
}

fn updated_at(complaint: &Complaint) -> Option<&Value> {
    complaint.field("updatedAt")
}

fn created_at(complaint: &Complaint) -> Option<&Value> {
    complaint.field("createdAt")
}

/// Candidate archival-date fields in priority order. The first one holding a
/// truthy value wins.
pub const ARCHIVED_DATE_ACCESSORS: &[(&str, DateAccessor)] = &[
    ("fechaArchivamiento", archived_at),
    ("fecha_archivamiento", archived_at_snake),
    ("fechaActualizacion", last_updated_at),
    ("updatedAt", updated_at),
    ("createdAt", created_at),
];

/// The date value chosen to represent when a complaint was archived.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArchivedDate<'a> {
    /// Wire name of the field that supplied the value.
    pub field: &'static str,
    pub value: &'a Value,
}

/// Loose truthiness of a JSON value: null, `false`, `""`, `0` and NaN are
/// empty; everything else (including arrays and objects) counts as present.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Pick the archival date for a complaint by walking
/// [`ARCHIVED_DATE_ACCESSORS`] in order.
///
/// Returns `None` when there is no complaint or none of the fields hold a
/// truthy value. A zero timestamp or empty string is skipped in favour of
/// the next field.
pub fn resolve_archived_date(complaint: Option<&Complaint>) -> Option<ArchivedDate<'_>> {
    let complaint = complaint?;
    ARCHIVED_DATE_ACCESSORS
        .iter()
        .find_map(|&(field, accessor)| {
            accessor(complaint)
                .filter(|value| is_truthy(value))
                .map(|value| ArchivedDate { field, value })
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn complaint(value: Value) -> Complaint {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn no_complaint_resolves_to_none() {
        assert_eq!(resolve_archived_date(None), None);
    }

    #[test]
    fn complaint_without_date_fields_resolves_to_none() {
        let c = complaint(json!({ "id": 1, "titulo": "Ruido nocturno" }));
        assert_eq!(resolve_archived_date(Some(&c)), None);
    }

    #[test]
    fn only_created_at_reaches_end_of_chain() {
        let c = complaint(json!({ "createdAt": "2024-01-10T08:00:00Z" }));
        let resolved = resolve_archived_date(Some(&c)).unwrap();
        assert_eq!(resolved.field, "createdAt");
        assert_eq!(resolved.value, &json!("2024-01-10T08:00:00Z"));
    }

    #[test]
    fn archival_field_outranks_updated_at() {
        let c = complaint(json!({
            "updatedAt": "2024-05-01T00:00:00Z",
            "fechaArchivamiento": "2024-04-20T00:00:00Z",
        }));
        let resolved = resolve_archived_date(Some(&c)).unwrap();
        assert_eq!(resolved.field, "fechaArchivamiento");
        assert_eq!(resolved.value, &json!("2024-04-20T00:00:00Z"));
    }

    #[test]
    fn snake_case_archival_field_outranks_update_fields() {
        let c = complaint(json!({
            "fecha_archivamiento": "2024-04-21",
            "fechaActualizacion": "2024-04-22",
            "createdAt": "2024-01-01",
        }));
        assert_eq!(
            resolve_archived_date(Some(&c)).unwrap().field,
            "fecha_archivamiento"
        );
    }

    #[test]
    fn falsy_values_fall_through_to_next_field() {
        let c = complaint(json!({
            "fechaArchivamiento": null,
            "fecha_archivamiento": "",
            "fechaActualizacion": 0,
            "updatedAt": "2024-06-30T12:00:00Z",
            "createdAt": "2024-01-01T00:00:00Z",
        }));
        assert_eq!(resolve_archived_date(Some(&c)).unwrap().field, "updatedAt");
    }

    #[test]
    fn truthiness_matches_loose_rules() {
        assert!(!is_truthy(&json!(null)));
        assert!(!is_truthy(&json!(false)));
        assert!(!is_truthy(&json!("")));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!(0.0)));
        assert!(is_truthy(&json!(true)));
        assert!(is_truthy(&json!(" ")));
        assert!(is_truthy(&json!(1_700_000_000_000_i64)));
        assert!(is_truthy(&json!([])));
        assert!(is_truthy(&json!({})));
    }

    #[test]
    fn accessor_order_is_fixed() {
        let names: Vec<&str> = ARCHIVED_DATE_ACCESSORS.iter().map(|(n, _)| *n).collect();
        assert_eq!(
            names,
            [
                "fechaArchivamiento",
                "fecha_archivamiento",
                "fechaActualizacion",
                "updatedAt",
                "createdAt",
            ]
        );
    }
}
