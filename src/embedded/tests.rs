//! Tests for the embedded relations module

use super::*;
use crate::content::{ContentItem, Field};
use crate::context::{ClickKind, ContextConfig};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

fn post_json() -> Value {
    json!({
        "id": 1,
        "title": {"rendered": "Test Post Title"},
        "content": {"rendered": "<p>Test post content paragraph.</p>"},
        "excerpt": {"rendered": "<p>Test post excerpt.</p>"},
        "date": "2024-01-15T10:30:00",
        "_embedded": {
            "author": [
                {"id": 1, "name": "John Doe", "link": "/author/john"},
                {"id": 2, "name": "Jane Smith", "link": "/author/jane"}
            ],
            "wp:featuredmedia": [
                {
                    "media_type": "image",
                    "alt_text": "Featured image alt",
                    "media_details": {
                        "sizes": {
                            "full": {"source_url": "https://example.com/image.jpg"},
                            "thumbnail": {"source_url": "https://example.com/image-thumb.jpg"}
                        }
                    }
                }
            ],
            "wp:term": [
                [
                    {"id": 10, "name": "Technology", "link": "/category/tech", "taxonomy": "category"},
                    {"id": 11, "name": "Science", "link": "/category/science", "taxonomy": "category"},
                    {"id": 20, "name": "React", "link": "/tag/react", "taxonomy": "post_tag"},
                    {"id": 21, "name": "JavaScript", "link": "/tag/js", "taxonomy": "post_tag"}
                ]
            ]
        }
    })
}

fn item(value: Value) -> ContentItem {
    serde_json::from_value(value).unwrap()
}

fn names(terms: &[&Term]) -> Vec<String> {
    terms.iter().map(|t| t.name.clone()).collect()
}

fn context() -> ContextConfig {
    ContextConfig::new("https://example.com/wp-json")
}

// ============================================================================
// Authors
// ============================================================================

#[test]
fn test_authors_in_source_order() {
    let post = item(post_json());
    let authors = post.relations().authors();

    assert_eq!(
        authors,
        &[
            Author {
                id: 1,
                name: "John Doe".to_string(),
                link: "/author/john".to_string()
            },
            Author {
                id: 2,
                name: "Jane Smith".to_string(),
                link: "/author/jane".to_string()
            },
        ]
    );
}

#[test]
fn test_authors_missing_sub_list() {
    let mut value = post_json();
    value["_embedded"]
        .as_object_mut()
        .unwrap()
        .remove("author");
    let post = item(value);

    assert!(post.relations().has_relations());
    assert!(post.relations().authors().is_empty());
}

#[test]
fn test_authors_without_embedded() {
    let post = item(json!({"id": 1}));
    assert!(!post.relations().has_relations());
    assert!(post.relations().authors().is_empty());
}

#[test]
fn test_authors_skip_error_entries() {
    let post = item(json!({
        "id": 1,
        "_embedded": {
            "author": [
                {"code": "rest_user_invalid_id", "message": "Invalid user ID.", "data": {"status": 404}},
                {"id": 3, "name": "Ada"}
            ]
        }
    }));

    let authors = post.relations().authors();
    assert_eq!(authors.len(), 1);
    assert_eq!(authors[0].name, "Ada");
    assert_eq!(authors[0].link, "");
}

// ============================================================================
// Terms
// ============================================================================

#[test]
fn test_categories_and_tags_partition() {
    let post = item(post_json());
    let relations = post.relations();

    assert_eq!(names(&relations.categories()), vec!["Technology", "Science"]);
    assert_eq!(names(&relations.tags()), vec!["React", "JavaScript"]);
    assert_eq!(names(&relations.terms("category")), vec!["Technology", "Science"]);
    assert_eq!(names(&relations.terms("post_tag")), vec!["React", "JavaScript"]);
}

#[test]
fn test_terms_flatten_groups_in_order() {
    let post = item(json!({
        "id": 1,
        "_embedded": {
            "wp:term": [
                [{"id": 1, "name": "News", "taxonomy": "category"}],
                [
                    {"id": 2, "name": "rust", "taxonomy": "post_tag"},
                    {"id": 3, "name": "Blue", "taxonomy": "color"}
                ],
                [{"id": 4, "name": "Events", "taxonomy": "category"}]
            ]
        }
    }));
    let relations = post.relations();

    let all: Vec<u64> = relations.all_terms().iter().map(|t| t.id).collect();
    assert_eq!(all, vec![1, 2, 3, 4]);
    assert_eq!(names(&relations.categories()), vec!["News", "Events"]);
    assert_eq!(names(&relations.tags()), vec!["rust"]);
    assert_eq!(names(&relations.terms("color")), vec!["Blue"]);
}

#[test]
fn test_terms_without_embedded() {
    let post = item(json!({"id": 1}));
    assert!(post.relations().all_terms().is_empty());
    assert!(post.relations().categories().is_empty());
    assert!(post.relations().terms("post_tag").is_empty());
}

#[test]
fn test_terms_ignore_malformed_groups() {
    let post = item(json!({
        "id": 1,
        "_embedded": {
            "wp:term": [
                {"code": "rest_forbidden"},
                [{"id": 1, "name": "News", "taxonomy": "category"}, "garbage"]
            ]
        }
    }));
    assert_eq!(names(&post.relations().categories()), vec!["News"]);
}

#[test]
fn test_term_click_events() {
    let post = item(post_json());
    let relations = post.relations();

    let event = relations.categories()[0].click_event().unwrap();
    assert_eq!(event.kind, ClickKind::Category);
    assert_eq!(event.values.name, "Technology");

    let event = relations.tags()[0].click_event().unwrap();
    assert_eq!(event.kind, ClickKind::Tag);
    assert_eq!(event.values.link, "/tag/react");

    let other = Term {
        id: 9,
        name: "Blue".to_string(),
        link: String::new(),
        slug: None,
        taxonomy: "color".to_string(),
    };
    assert!(other.click_event().is_none());

    let event = relations.authors()[0].click_event();
    assert_eq!(event.kind, ClickKind::Author);
    assert_eq!(event.values.id, 1);
}

// ============================================================================
// Media
// ============================================================================

#[test]
fn test_featured_media_full() {
    let post = item(post_json());
    let media = post.relations().featured_media().unwrap();

    assert_eq!(
        media,
        ResolvedMedia {
            url: "https://example.com/image.jpg",
            alt_text: "Featured image alt",
            media_type: "image",
        }
    );
}

#[test]
fn test_media_thumbnail() {
    let post = item(post_json());
    let media = post.relations().media("thumbnail").unwrap();
    assert_eq!(media.url, "https://example.com/image-thumb.jpg");
}

#[test]
fn test_media_missing_size_does_not_fall_back() {
    let post = item(post_json());
    assert!(post.relations().media("medium_large").is_none());
}

#[test]
fn test_media_without_embedded() {
    let post = item(json!({"id": 1}));
    assert!(post.relations().featured_media().is_none());
}

#[test]
fn test_media_empty_list() {
    let post = item(json!({"id": 1, "_embedded": {"wp:featuredmedia": []}}));
    assert!(post.relations().featured_media().is_none());
}

#[test]
fn test_media_details_empty_array() {
    let post = item(json!({
        "id": 1,
        "_embedded": {
            "wp:featuredmedia": [{"media_type": "file", "alt_text": "", "media_details": []}]
        }
    }));
    assert!(post.relations().featured_media().is_none());
    assert_eq!(post.embedded.as_ref().unwrap().media.len(), 1);
}

#[test]
fn test_media_uses_first_entry_only() {
    let post = item(json!({
        "id": 1,
        "_embedded": {
            "wp:featuredmedia": [
                {"media_type": "image", "media_details": {"sizes": {}}},
                {"media_type": "image", "media_details": {"sizes": {"full": {"source_url": "/second.jpg"}}}}
            ]
        }
    }));
    assert!(post.relations().featured_media().is_none());
}

// ============================================================================
// Fields and Dates
// ============================================================================

#[test]
fn test_field_present() {
    let post = item(post_json());
    let relations = post.relations();
    assert_eq!(relations.field(Field::Title), Some("Test Post Title"));
    assert_eq!(
        relations.field(Field::Content),
        Some("<p>Test post content paragraph.</p>")
    );
    assert_eq!(relations.field(Field::Excerpt), Some("<p>Test post excerpt.</p>"));
}

#[test]
fn test_field_missing_vs_empty() {
    let post = item(json!({"id": 1, "title": {"rendered": ""}}));
    assert_eq!(post.relations().field(Field::Title), Some(""));
    assert_eq!(post.relations().field(Field::Content), None);
    assert_eq!(post.relations().field(Field::Excerpt), None);
}

#[test]
fn test_formatted_date_raw() {
    let post = item(post_json());
    assert_eq!(
        post.relations().formatted_date(&context(), None),
        Some("2024-01-15T10:30:00".to_string())
    );
}

#[test]
fn test_formatted_date_global() {
    let post = item(post_json());
    let ctx = ContextConfig::builder("https://example.com/wp-json")
        .date_formatter(|raw| format!("Global: {raw}"))
        .build();
    assert_eq!(
        post.relations().formatted_date(&ctx, None),
        Some("Global: 2024-01-15T10:30:00".to_string())
    );
}

#[test]
fn test_formatted_date_local_wins() {
    let post = item(post_json());
    let ctx = ContextConfig::builder("https://example.com/wp-json")
        .date_formatter(|raw| format!("Global: {raw}"))
        .build();
    let local = |raw: &str| format!("Local: {raw}");

    assert_eq!(
        post.relations().formatted_date(&ctx, Some(&local)),
        Some("Local: 2024-01-15T10:30:00".to_string())
    );
}

#[test]
fn test_formatted_date_missing() {
    let post = item(json!({"id": 1}));
    let local = |raw: &str| format!("Local: {raw}");
    assert_eq!(post.relations().date(), None);
    assert_eq!(post.relations().formatted_date(&context(), Some(&local)), None);
}

// ============================================================================
// Serialization
// ============================================================================

#[test]
fn test_serialize_writes_wire_form() {
    let value = serde_json::to_value(item(post_json())).unwrap();
    let embedded = &value["_embedded"];

    assert_eq!(embedded["author"][1]["name"], "Jane Smith");
    assert_eq!(embedded["wp:term"][0][0]["taxonomy"], "category");
    assert_eq!(embedded["wp:term"][1][0]["name"], "React");
    assert_eq!(
        embedded["wp:featuredmedia"][0]["media_details"]["sizes"]["thumbnail"]["source_url"],
        "https://example.com/image-thumb.jpg"
    );
    assert!(embedded.get("authors").is_none());
}

#[test]
fn test_serialize_then_deserialize_keeps_relations() {
    let original = item(post_json());
    let restored: ContentItem =
        serde_json::from_value(serde_json::to_value(&original).unwrap()).unwrap();

    assert_eq!(restored.embedded, original.embedded);
    let relations = restored.relations();
    assert_eq!(relations.authors().len(), 2);
    assert_eq!(names(&relations.categories()), vec!["Technology", "Science"]);
    assert_eq!(
        relations.featured_media().unwrap().url,
        "https://example.com/image.jpg"
    );
}

#[test]
fn test_round_trip_keeps_interleaved_term_order() {
    let original = item(json!({
        "id": 3,
        "_embedded": {
            "wp:term": [[
                {"id": 1, "name": "A", "taxonomy": "category"},
                {"id": 2, "name": "B", "taxonomy": "post_tag"},
                {"id": 3, "name": "C", "taxonomy": "category"}
            ]]
        }
    }));
    let restored: ContentItem =
        serde_json::from_value(serde_json::to_value(&original).unwrap()).unwrap();

    let order: Vec<&str> = restored
        .relations()
        .all_terms()
        .iter()
        .map(|t| t.name.as_str())
        .collect();
    assert_eq!(order, vec!["A", "B", "C"]);
}

#[test]
fn test_empty_relations_serialize_to_empty_bag() {
    let value = serde_json::to_value(EmbeddedRelations::default()).unwrap();
    assert_eq!(value, json!({}));

    let media = FeaturedMedia::default();
    let restored: FeaturedMedia =
        serde_json::from_value(serde_json::to_value(&media).unwrap()).unwrap();
    assert_eq!(restored, media);
}
