//! Tests for the listing queries against a mock backend.

mod common;

use bearly_sdk::{BearlyError, FilterSpec, ListingDraft, PriceRange, SortOrder};
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ---------------------------------------------------------------------------
// search: single request
// ---------------------------------------------------------------------------

#[tokio::test]
async fn search_without_text_returns_the_result_array_verbatim() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/get-listings"))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::listings_success(vec![
            common::sample_listing(1, "Desk", 25.0),
            common::sample_listing(2, "Lamp", 10.0),
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let sdk = common::sdk_for(&server);
    let results = sdk.listings().search(&FilterSpec::default()).await.unwrap();

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].title, "Desk");
    assert_eq!(results[1].price, 10.0);
}

#[tokio::test]
async fn an_empty_result_set_is_not_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/get-listings"))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::listings_success(vec![])))
        .mount(&server)
        .await;

    let sdk = common::sdk_for(&server);
    let results = sdk.listings().search(&FilterSpec::default()).await.unwrap();
    assert!(results.is_empty());
}

#[tokio::test]
async fn search_sends_category_price_sort_and_page_parameters() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/get-listings"))
        .and(query_param("category", "Books"))
        .and(query_param("minPrice", "5"))
        .and(query_param("maxPrice", "10"))
        .and(query_param("sorter", "PRICE_ASC"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::listings_success(vec![])))
        .expect(1)
        .mount(&server)
        .await;

    let sdk = common::sdk_for(&server);
    let spec = FilterSpec {
        category: Some("Books".to_string()),
        price: Some(PriceRange::FiveToTen),
        sort: SortOrder::Ascending,
        ..FilterSpec::default()
    };
    sdk.listings().search(&spec).await.unwrap();
}

#[tokio::test]
async fn the_free_bracket_sends_zero_for_both_bounds() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/get-listings"))
        .and(query_param("minPrice", "0"))
        .and(query_param("maxPrice", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::listings_success(vec![
            common::sample_listing(1, "Giveaway chair", 0.0),
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let sdk = common::sdk_for(&server);
    let spec = FilterSpec {
        price: Some(PriceRange::Free),
        ..FilterSpec::default()
    };
    let results = sdk.listings().search(&spec).await.unwrap();
    assert_eq!(results[0].price, 0.0);
}

#[tokio::test]
async fn the_thirty_plus_bracket_sends_only_a_minimum() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/get-listings"))
        .and(query_param("minPrice", "30"))
        .and(query_param_is_missing("maxPrice"))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::listings_success(vec![])))
        .expect(1)
        .mount(&server)
        .await;

    let sdk = common::sdk_for(&server);
    let spec = FilterSpec {
        price: Some(PriceRange::ThirtyPlus),
        ..FilterSpec::default()
    };
    sdk.listings().search(&spec).await.unwrap();
}

#[tokio::test]
async fn sorted_results_pass_through_in_backend_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/get-listings"))
        .and(query_param("sorter", "PRICE_ASC"))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::listings_success(vec![
            common::sample_listing(1, "Cheap", 4.0),
            common::sample_listing(2, "Pricey", 10.0),
        ])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/get-listings"))
        .and(query_param("sorter", "PRICE_DESC"))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::listings_success(vec![
            common::sample_listing(2, "Pricey", 10.0),
            common::sample_listing(1, "Cheap", 4.0),
        ])))
        .mount(&server)
        .await;

    let sdk = common::sdk_for(&server);

    let ascending = FilterSpec {
        sort: SortOrder::Ascending,
        ..FilterSpec::default()
    };
    let prices: Vec<f64> = sdk
        .listings()
        .search(&ascending)
        .await
        .unwrap()
        .iter()
        .map(|listing| listing.price)
        .collect();
    assert_eq!(prices, vec![4.0, 10.0]);

    let descending = FilterSpec {
        sort: SortOrder::Descending,
        ..FilterSpec::default()
    };
    let prices: Vec<f64> = sdk
        .listings()
        .search(&descending)
        .await
        .unwrap()
        .iter()
        .map(|listing| listing.price)
        .collect();
    assert_eq!(prices, vec![10.0, 4.0]);
}

#[tokio::test]
async fn search_surfaces_a_backend_rejection() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/get-listings"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(common::error_body("database offline")),
        )
        .mount(&server)
        .await;

    let sdk = common::sdk_for(&server);
    let err = sdk
        .listings()
        .search(&FilterSpec::default())
        .await
        .unwrap_err();
    match err {
        BearlyError::Rejected(reason) => assert!(reason.contains("database offline")),
        other => panic!("expected rejection, got {other:?}"),
    }
}

// ---------------------------------------------------------------------------
// search: dual-field text search
// ---------------------------------------------------------------------------

#[tokio::test]
async fn text_search_merges_title_matches_first_and_dedups_by_id() {
    let server = MockServer::start().await;

    let mut dup_from_tags = common::sample_listing(2, "SHOULD NOT WIN", 10.0);
    dup_from_tags["tags"] = serde_json::json!(["mug"]);

    Mock::given(method("GET"))
        .and(path("/get-listings"))
        .and(query_param("title", "mug"))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::listings_success(vec![
            common::sample_listing(1, "Camping mug", 6.0),
            common::sample_listing(2, "Mug, barely used", 4.0),
        ])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/get-listings"))
        .and(query_param("tags", "mug"))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::listings_success(vec![
            dup_from_tags,
            common::sample_listing(3, "Tea set", 12.0),
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let sdk = common::sdk_for(&server);
    let spec = FilterSpec {
        search_text: Some("mug".to_string()),
        ..FilterSpec::default()
    };
    let results = sdk.listings().search(&spec).await.unwrap();

    let ids: Vec<i64> = results.iter().map(|listing| listing.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
    // the by-title copy of id 2 wins over the by-tag copy
    assert_eq!(results[1].title, "Mug, barely used");
}

#[tokio::test]
async fn text_search_fails_when_one_branch_returns_an_http_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/get-listings"))
        .and(query_param("title", "mug"))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::listings_success(vec![
            common::sample_listing(1, "Camping mug", 6.0),
        ])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/get-listings"))
        .and(query_param("tags", "mug"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let sdk = common::sdk_for(&server);
    let spec = FilterSpec {
        search_text: Some("mug".to_string()),
        ..FilterSpec::default()
    };
    let err = sdk.listings().search(&spec).await.unwrap_err();
    assert!(matches!(err, BearlyError::Rejected(_)), "got {err:?}");
}

#[tokio::test]
async fn text_search_fails_when_one_branch_is_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/get-listings"))
        .and(query_param("title", "mug"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(common::error_body("bad title query")),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/get-listings"))
        .and(query_param("tags", "mug"))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::listings_success(vec![])))
        .mount(&server)
        .await;

    let sdk = common::sdk_for(&server);
    let spec = FilterSpec {
        search_text: Some("mug".to_string()),
        ..FilterSpec::default()
    };
    assert!(sdk.listings().search(&spec).await.is_err());
}

// ---------------------------------------------------------------------------
// get_by_id / by_seller
// ---------------------------------------------------------------------------

#[tokio::test]
async fn get_by_id_returns_the_wrapped_listing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/get-listing-by-id"))
        .and(query_param("listing_id", "42"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(common::listing_success(common::sample_listing(42, "Desk", 25.0))),
        )
        .mount(&server)
        .await;

    let sdk = common::sdk_for(&server);
    let listing = sdk.listings().get_by_id(42).await.unwrap();
    assert_eq!(listing.id, 42);
    assert_eq!(listing.title, "Desk");
}

#[tokio::test]
async fn get_by_id_surfaces_a_rejection_for_unknown_ids() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/get-listing-by-id"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(common::error_body("listing not found")),
        )
        .mount(&server)
        .await;

    let sdk = common::sdk_for(&server);
    assert!(sdk.listings().get_by_id(999).await.is_err());
}

#[tokio::test]
async fn by_seller_includes_sold_listings() {
    let server = MockServer::start().await;
    let mut sold = common::sample_listing(2, "Sold lamp", 10.0);
    sold["available"] = serde_json::json!(false);

    Mock::given(method("GET"))
        .and(path("/get-user-listings"))
        .and(query_param("seller_id", "user_abc123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "listings": [common::sample_listing(1, "Desk", 25.0), sold],
        })))
        .mount(&server)
        .await;

    let sdk = common::sdk_for(&server);
    let listings = sdk.listings().by_seller("user_abc123").await.unwrap();
    assert_eq!(listings.len(), 2);
    assert!(!listings[1].available);
}

#[tokio::test]
async fn by_seller_treats_a_missing_listings_key_as_empty() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/get-user-listings"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .mount(&server)
        .await;

    let sdk = common::sdk_for(&server);
    let listings = sdk.listings().by_seller("user_abc123").await.unwrap();
    assert!(listings.is_empty());
}

// ---------------------------------------------------------------------------
// Mutations
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_sends_every_field_with_comma_joined_tags() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/add-listing"))
        .and(query_param("seller_id", "user_abc123"))
        .and(query_param("title", "Mug, barely used"))
        .and(query_param("available", "true"))
        .and(query_param("price", "4.00"))
        .and(query_param("category", "Other"))
        .and(query_param("condition", "Good"))
        .and(query_param("image_url", ""))
        .and(query_param("tags", "t1,t2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::mutation_success()))
        .expect(1)
        .mount(&server)
        .await;

    let sdk = common::sdk_for(&server);
    let draft = ListingDraft {
        seller_id: "user_abc123".to_string(),
        title: "Mug, barely used".to_string(),
        description: "Holds coffee".to_string(),
        price: "4.00".to_string(),
        category: "Other".to_string(),
        condition: "Good".to_string(),
        image_url: String::new(),
        tags: vec!["t1".to_string(), "t2".to_string()],
        available: true,
    };
    sdk.listings().create(&draft).await.unwrap();
}

#[tokio::test]
async fn update_adds_the_listing_id_to_the_same_fields() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/update-listing"))
        .and(query_param("listing_id", "7"))
        .and(query_param("title", "Desk"))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::mutation_success()))
        .expect(1)
        .mount(&server)
        .await;

    let sdk = common::sdk_for(&server);
    let draft = ListingDraft {
        seller_id: "user_abc123".to_string(),
        title: "Desk".to_string(),
        description: "Sturdy".to_string(),
        price: "25".to_string(),
        category: "Furniture".to_string(),
        condition: "Good".to_string(),
        available: true,
        ..ListingDraft::default()
    };
    sdk.listings().update(7, &draft).await.unwrap();
}

#[tokio::test]
async fn set_available_sends_only_the_id_and_the_flag() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/update-listing"))
        .and(query_param("listing_id", "7"))
        .and(query_param("available", "false"))
        .and(query_param_is_missing("title"))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::mutation_success()))
        .expect(1)
        .mount(&server)
        .await;

    let sdk = common::sdk_for(&server);
    sdk.listings().set_available(7, false).await.unwrap();
}

#[tokio::test]
async fn deleting_a_missing_listing_surfaces_the_failure_without_panicking() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/delete-listing"))
        .and(query_param("listing_id", "404"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(common::error_body("listing not found")),
        )
        .mount(&server)
        .await;

    let sdk = common::sdk_for(&server);
    let err = sdk.listings().delete(404).await.unwrap_err();
    match err {
        BearlyError::Rejected(reason) => assert!(reason.contains("listing not found")),
        other => panic!("expected rejection, got {other:?}"),
    }
}

// ---------------------------------------------------------------------------
// Publish-then-search flow
// ---------------------------------------------------------------------------

#[tokio::test]
async fn a_published_listing_comes_back_by_unique_title_exactly_once() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/add-listing"))
        .and(query_param("price", "4.00"))
        .and(query_param("category", "Other"))
        .and(query_param("tags", "t1,t2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::mutation_success()))
        .expect(1)
        .mount(&server)
        .await;

    let mut published = common::sample_listing(99, "Bearly used unicycle xyzzy", 4.00);
    published["tags"] = serde_json::json!(["t1", "t2"]);
    Mock::given(method("GET"))
        .and(path("/get-listings"))
        .and(query_param("title", "Bearly used unicycle xyzzy"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(common::listings_success(vec![published.clone()])),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/get-listings"))
        .and(query_param("tags", "Bearly used unicycle xyzzy"))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::listings_success(vec![])))
        .mount(&server)
        .await;

    let sdk = common::sdk_for(&server);
    let draft = ListingDraft {
        seller_id: "user_abc123".to_string(),
        title: "Bearly used unicycle xyzzy".to_string(),
        description: "One wheel, twice the fun".to_string(),
        price: "4.00".to_string(),
        category: "Other".to_string(),
        condition: "Good".to_string(),
        tags: vec!["t1".to_string(), "t2".to_string()],
        available: true,
        ..ListingDraft::default()
    };
    sdk.listings().create(&draft).await.unwrap();

    let spec = FilterSpec {
        search_text: Some("Bearly used unicycle xyzzy".to_string()),
        ..FilterSpec::default()
    };
    let results = sdk.listings().search(&spec).await.unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].price, 4.0);
    assert_eq!(results[0].tags, vec!["t1", "t2"]);
}
