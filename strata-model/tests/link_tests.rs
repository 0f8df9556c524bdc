use strata_model::Link;

use serde_json::json;

#[test]
fn decodes_link_envelope() {
    let link: Link = serde_json::from_value(json!({
        "sys": {"type": "Link", "linkType": "User", "id": "u42"}
    }))
    .unwrap();
    assert_eq!(link.link_type, "User");
    assert_eq!(link.id, "u42");
}

#[test]
fn rejects_non_link_envelope() {
    let result: Result<Link, _> = serde_json::from_value(json!({
        "sys": {"type": "Entry", "linkType": "User", "id": "u42"}
    }));
    let err = result.unwrap_err().to_string();
    assert!(err.contains("expected a Link"), "unexpected error: {err}");
}

#[test]
fn encodes_back_to_envelope() {
    let link = Link::new("Space", "s9");
    let encoded = serde_json::to_value(&link).unwrap();
    assert_eq!(
        encoded,
        json!({"sys": {"type": "Link", "linkType": "Space", "id": "s9"}})
    );
}

#[test]
fn link_roundtrip() {
    let original = Link::new("User", "u1");
    let encoded = serde_json::to_string(&original).unwrap();
    let decoded: Link = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded, original);
}
