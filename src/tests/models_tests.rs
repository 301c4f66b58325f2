use chrono::Utc;
use mongodb::bson::{self, Bson};

use crate::models::{CreateOrder, Lesson, Order, OrderResponse, UpdateLesson};

fn sample_lesson() -> Lesson {
    Lesson {
        id: 1,
        subject: "Math".to_string(),
        location: "Hendon".to_string(),
        price: 100.0,
        spaces: 5,
        image: "math.png".to_string(),
    }
}

#[test]
fn lesson_deserializes_from_stored_document() {
    // Stored documents carry Mongo's _id alongside the lesson fields;
    // it must not break deserialization.
    let json = r#"{
        "_id": {"$oid": "65f2a0c4e1b2c3d4e5f60718"},
        "id": 3,
        "subject": "Science",
        "location": "Brent Cross",
        "price": 90.0,
        "spaces": 5,
        "image": "science.png"
    }"#;

    let lesson: Lesson = serde_json::from_str(json).unwrap();
    assert_eq!(lesson.id, 3);
    assert_eq!(lesson.subject, "Science");
    assert_eq!(lesson.spaces, 5);
}

#[test]
fn lesson_serializes_without_internal_id() {
    let value = serde_json::to_value(sample_lesson()).unwrap();
    assert!(value.get("_id").is_none());
    assert_eq!(value["subject"], "Math");
    assert_eq!(value["price"], 100.0);
}

#[test]
fn empty_update_produces_no_set_document() {
    let update = UpdateLesson {
        subject: None,
        location: None,
        price: None,
        spaces: None,
        image: None,
    };
    assert!(update.into_set_document().is_none());
}

#[test]
fn partial_update_sets_only_supplied_fields() {
    let update = UpdateLesson {
        subject: None,
        location: None,
        price: None,
        spaces: Some(2),
        image: None,
    };

    let set = update.into_set_document().unwrap();
    assert_eq!(set.len(), 1);
    assert_eq!(set.get_i32("spaces").unwrap(), 2);
}

#[test]
fn order_round_trips_through_bson() {
    let order = Order::from_request(CreateOrder {
        name: "Jane Doe".to_string(),
        phone: "07123456789".to_string(),
        lesson_ids: vec![1, 2, 2],
    });

    let doc = bson::to_document(&order).unwrap();
    // _id is generated by the server, not serialized when unset
    assert!(!doc.contains_key("_id"));
    assert!(matches!(doc.get("created_at"), Some(Bson::DateTime(_))));

    let decoded: Order = bson::from_document(doc).unwrap();
    assert_eq!(decoded.lesson_ids, vec![1, 2, 2]);
    assert_eq!(decoded.spaces, 3);
}

#[test]
fn order_response_renders_hex_id_and_rfc3339_timestamp() {
    let mut order = Order::from_request(CreateOrder {
        name: "Jane".to_string(),
        phone: "0123456".to_string(),
        lesson_ids: vec![4],
    });
    let oid = mongodb::bson::oid::ObjectId::new();
    order.id = Some(oid);
    order.created_at = Utc::now();

    let response = OrderResponse::from(order);
    assert_eq!(response.id, oid.to_hex());
    assert_eq!(response.spaces, 1);

    let value = serde_json::to_value(&response).unwrap();
    assert!(value["created_at"].is_string());
}
