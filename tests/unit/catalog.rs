use super::*;

#[test]
fn parse_product_response_full() {
    let body = r#"{
        "product_id": 17,
        "product_images": [
            {
                "assignment": "one-sash-door",
                "image_url": "https://cdn.example/door.svg",
                "created_at": "2024-03-01T10:00:00Z"
            }
        ]
    }"#;
    let parsed = parse_product_response(body).unwrap();
    assert_eq!(parsed.product_id, 17);
    assert_eq!(parsed.product_images.len(), 1);
    assert_eq!(parsed.product_images[0].assignment, "one-sash-door");
    assert_eq!(
        parsed.product_images[0].image_url,
        "https://cdn.example/door.svg"
    );
}

#[test]
fn missing_image_list_means_empty() {
    let parsed = parse_product_response(r#"{"product_id": 3}"#).unwrap();
    assert_eq!(parsed.product_id, 3);
    assert!(parsed.product_images.is_empty());
}

#[test]
fn missing_created_at_defaults() {
    let body = r#"{
        "product_id": 1,
        "product_images": [
            {"assignment": "two-sash-frame", "image_url": "https://x/f.svg"}
        ]
    }"#;
    let parsed = parse_product_response(body).unwrap();
    assert_eq!(parsed.product_images[0].created_at, "");
}

#[test]
fn malformed_body_is_a_serde_error() {
    let err = parse_product_response("{not json").unwrap_err();
    assert!(matches!(err, crate::Door2dError::Serde(_)));
}
