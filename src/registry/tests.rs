//! Unit tests for the registry client

use super::*;

use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn search_fixture() -> serde_json::Value {
    serde_json::json!({
        "objects": [
            {
                "package": {
                    "name": "serde",
                    "description": "A serialization framework",
                    "version": "1.0.0",
                    "author": { "name": "Jane Doe" },
                    "date": "2023-01-15T12:00:00.000Z",
                    "links": {
                        "npm": "https://www.npmjs.com/package/serde",
                        "homepage": "https://serde.example"
                    },
                    "publisher": { "username": "janedoe" },
                    "keywords": ["serialization", "json"]
                }
            },
            {
                "package": {
                    "name": "serde-tools",
                    "version": "0.3.2",
                    "author": "John Roe <john@example.com>",
                    "date": "2022-11-02T08:30:00.000Z",
                    "links": { "npm": "https://www.npmjs.com/package/serde-tools" },
                    "publisher": { "username": "johnroe" }
                }
            }
        ],
        "total": 2
    })
}

fn package_fixture() -> serde_json::Value {
    serde_json::json!({
        "name": "left-pad",
        "description": "String left pad",
        "dist-tags": { "latest": "1.3.0" },
        "versions": {
            "1.0.0": { "version": "1.0.0" },
            "1.3.0": {
                "version": "1.3.0",
                "dependencies": { "pad-core": "^2.0.0" }
            }
        },
        "time": {
            "created": "2014-03-21T00:00:00.000Z",
            "modified": "2018-04-10T00:00:00.000Z",
            "1.0.0": "2014-03-21T00:00:00.000Z",
            "1.3.0": "2018-04-10T00:00:00.000Z"
        },
        "author": { "name": "Azer", "email": "azer@example.com" },
        "maintainers": [
            { "name": "azer", "email": "azer@example.com" },
            { "name": "stevemao" }
        ],
        "homepage": "https://github.com/stevemao/left-pad",
        "repository": { "type": "git", "url": "git+https://github.com/stevemao/left-pad.git" },
        "bugs": { "url": "https://github.com/stevemao/left-pad/issues" },
        "license": "WTFPL",
        "keywords": ["leftpad", "pad"]
    })
}

#[tokio::test]
async fn search_returns_summaries() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/-/v1/search"))
        .and(query_param("text", "serde"))
        .and(query_param("size", "20"))
        .respond_with(ResponseTemplate::new(200).set_body_json(search_fixture()))
        .mount(&server)
        .await;

    let client = RegistryClient::new(server.uri());
    let packages = client.search("serde", 20).await.unwrap();

    assert_eq!(packages.len(), 2);
    assert_eq!(packages[0].name, "serde");
    assert_eq!(packages[0].version, "1.0.0");
    assert_eq!(packages[0].author.as_ref().unwrap().name(), "Jane Doe");
    assert_eq!(packages[0].publisher.as_ref().unwrap().username, "janedoe");
    // Combined string form on the second record
    assert_eq!(packages[1].author.as_ref().unwrap().name(), "John Roe");
    assert!(packages[1].description.is_none());
}

#[tokio::test]
async fn search_with_zero_results_is_empty_not_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/-/v1/search"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "objects": [], "total": 0 })),
        )
        .mount(&server)
        .await;

    let client = RegistryClient::new(server.uri());
    let packages = client.search("noresultsforthis", 20).await.unwrap();
    assert!(packages.is_empty());
}

#[tokio::test]
async fn search_server_error_maps_to_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/-/v1/search"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = RegistryClient::new(server.uri());
    let result = client.search("serde", 20).await;

    match result.unwrap_err() {
        RegistryError::Status(status) => assert_eq!(status.as_u16(), 503),
        other => panic!("Expected Status error, got {other:?}"),
    }
}

#[tokio::test]
async fn search_malformed_body_is_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/-/v1/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = RegistryClient::new(server.uri());
    assert!(matches!(
        client.search("serde", 20).await,
        Err(RegistryError::Http(_))
    ));
}

#[tokio::test]
async fn fetch_package_returns_metadata_fields() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/left-pad"))
        .respond_with(ResponseTemplate::new(200).set_body_json(package_fixture()))
        .mount(&server)
        .await;

    let client = RegistryClient::new(server.uri());
    let pkg = client.fetch_package("left-pad").await.unwrap();

    assert_eq!(pkg.name, "left-pad");
    assert_eq!(pkg.latest_version(), Some("1.3.0"));
    assert_eq!(pkg.author.as_ref().unwrap().name(), "Azer");
    assert_eq!(pkg.maintainers.len(), 2);
    assert_eq!(pkg.maintainers[1].email(), None);
    assert_eq!(pkg.license.as_deref(), Some("WTFPL"));
    assert_eq!(
        pkg.repository.as_ref().unwrap().url(),
        Some("git+https://github.com/stevemao/left-pad.git")
    );
    assert_eq!(
        pkg.bugs.as_ref().unwrap().url(),
        Some("https://github.com/stevemao/left-pad/issues")
    );
    assert_eq!(pkg.created(), Some("2014-03-21T00:00:00.000Z"));

    let deps = pkg.latest_dependencies().unwrap();
    assert_eq!(deps.get("pad-core").map(String::as_str), Some("^2.0.0"));

    let recent: Vec<&str> = pkg.recent_versions().iter().map(|(v, _)| *v).collect();
    assert_eq!(recent, vec!["1.3.0", "1.0.0"]);
}

#[tokio::test]
async fn fetch_package_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/nonexistent-package"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = RegistryClient::new(server.uri());
    let result = client.fetch_package("nonexistent-package").await;

    match result.unwrap_err() {
        RegistryError::NotFound(name) => assert_eq!(name, "nonexistent-package"),
        other => panic!("Expected NotFound error, got {other:?}"),
    }
}

#[tokio::test]
async fn scoped_package_name_is_encoded() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/@types%2fnode"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "name": "@types/node",
            "dist-tags": { "latest": "20.0.0" },
            "versions": {},
            "time": {}
        })))
        .mount(&server)
        .await;

    let client = RegistryClient::new(server.uri());
    let pkg = client.fetch_package("@types/node").await.unwrap();
    assert_eq!(pkg.name, "@types/node");
}

#[test]
fn encode_package_name_handles_scopes() {
    assert_eq!(encode_package_name("lodash"), "lodash");
    assert_eq!(encode_package_name("@types/node"), "@types%2fnode");
}
