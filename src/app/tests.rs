//! View-state tests for the search and details fetch flows

use std::time::Duration;

use wiremock::matchers::{any, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::details::{DetailsView, DETAILS_ERROR};
use super::fetch::FetchState;
use super::search::{SearchView, SEARCH_ERROR};
use crate::registry::RegistryClient;
use crate::types::PackageSummary;

fn search_body(names: &[&str]) -> serde_json::Value {
    let objects: Vec<serde_json::Value> = names
        .iter()
        .map(|name| {
            serde_json::json!({
                "package": {
                    "name": name,
                    "version": "1.0.0",
                    "date": "2023-01-01T00:00:00.000Z",
                    "links": {},
                    "publisher": { "username": "someone" }
                }
            })
        })
        .collect();
    serde_json::json!({ "objects": objects, "total": names.len() })
}

fn wait_for_search(view: &mut SearchView) {
    for _ in 0..200 {
        view.poll();
        if !matches!(view.state, FetchState::Loading) {
            return;
        }
        std::thread::sleep(Duration::from_millis(25));
    }
    panic!("search request did not settle");
}

fn wait_for_details(view: &mut DetailsView) {
    for _ in 0..200 {
        view.poll();
        if !matches!(view.state, FetchState::Loading) {
            return;
        }
        std::thread::sleep(Duration::from_millis(25));
    }
    panic!("details request did not settle");
}

#[test]
fn empty_query_never_triggers_a_request() {
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let ctx = egui::Context::default();
    let server = runtime.block_on(MockServer::start());
    runtime.block_on(
        Mock::given(any())
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server),
    );

    let client = RegistryClient::new(server.uri());

    // Stale error from an earlier query must be cleared as well
    let mut view = SearchView {
        state: FetchState::Failed(SEARCH_ERROR.to_string()),
        ..SearchView::default()
    };
    view.start("   ", &client, &runtime, &ctx);

    assert!(matches!(view.state, FetchState::Idle));
    assert!(view.inflight.is_none());
    runtime.block_on(server.verify());
}

#[test]
fn successful_search_replaces_prior_error() {
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let ctx = egui::Context::default();
    let server = runtime.block_on(MockServer::start());
    runtime.block_on(
        Mock::given(method("GET"))
            .and(path("/-/v1/search"))
            .respond_with(ResponseTemplate::new(200).set_body_json(search_body(&["serde"])))
            .mount(&server),
    );

    let client = RegistryClient::new(server.uri());
    let mut view = SearchView {
        state: FetchState::Failed(SEARCH_ERROR.to_string()),
        ..SearchView::default()
    };

    view.start("serde", &client, &runtime, &ctx);
    assert!(matches!(view.state, FetchState::Loading));

    wait_for_search(&mut view);
    match &view.state {
        FetchState::Loaded(packages) => {
            assert_eq!(packages.len(), 1);
            assert_eq!(packages[0].name, "serde");
        }
        _ => panic!("Expected Loaded state"),
    }
}

#[test]
fn failed_search_clears_stale_results() {
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let ctx = egui::Context::default();
    let server = runtime.block_on(MockServer::start());
    runtime.block_on(
        Mock::given(method("GET"))
            .and(path("/-/v1/search"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server),
    );

    let client = RegistryClient::new(server.uri());
    let stale: PackageSummary = serde_json::from_value(serde_json::json!({
        "name": "old-result",
        "version": "1.0.0"
    }))
    .unwrap();
    let mut view = SearchView {
        state: FetchState::Loaded(vec![stale]),
        ..SearchView::default()
    };

    view.start("serde", &client, &runtime, &ctx);
    // Stale results are gone as soon as the new request starts
    assert!(matches!(view.state, FetchState::Loading));

    wait_for_search(&mut view);
    match &view.state {
        FetchState::Failed(msg) => assert_eq!(msg, SEARCH_ERROR),
        _ => panic!("Expected Failed state"),
    }
}

#[test]
fn zero_results_land_as_loaded_empty() {
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let ctx = egui::Context::default();
    let server = runtime.block_on(MockServer::start());
    runtime.block_on(
        Mock::given(method("GET"))
            .and(path("/-/v1/search"))
            .respond_with(ResponseTemplate::new(200).set_body_json(search_body(&[])))
            .mount(&server),
    );

    let client = RegistryClient::new(server.uri());
    let mut view = SearchView::default();
    view.start("noresultsforthis", &client, &runtime, &ctx);
    wait_for_search(&mut view);

    // The render branch keys "No packages found" off exactly this state
    match &view.state {
        FetchState::Loaded(packages) => assert!(packages.is_empty()),
        _ => panic!("Expected Loaded state"),
    }
}

#[test]
fn details_fixture_populates_the_view() {
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let ctx = egui::Context::default();
    let server = runtime.block_on(MockServer::start());
    runtime.block_on(
        Mock::given(method("GET"))
            .and(path("/left-pad"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "name": "left-pad",
                "description": "String left pad",
                "dist-tags": { "latest": "1.3.0" },
                "versions": { "1.3.0": { "version": "1.3.0" } },
                "time": {
                    "created": "2014-03-21T00:00:00.000Z",
                    "1.3.0": "2018-04-10T00:00:00.000Z"
                }
            })))
            .mount(&server),
    );

    let client = RegistryClient::new(server.uri());
    let mut view = DetailsView::default();
    view.start("left-pad", &client, &runtime, &ctx);
    assert!(matches!(view.state, FetchState::Loading));

    wait_for_details(&mut view);
    match &view.state {
        FetchState::Loaded(pkg) => {
            assert_eq!(pkg.name, "left-pad");
            assert_eq!(pkg.latest_version(), Some("1.3.0"));
        }
        _ => panic!("Expected Loaded state"),
    }
}

#[test]
fn details_lookup_failure_shows_the_generic_error() {
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let ctx = egui::Context::default();
    let server = runtime.block_on(MockServer::start());
    runtime.block_on(
        Mock::given(method("GET"))
            .and(path("/ghost-package"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server),
    );

    let client = RegistryClient::new(server.uri());
    let mut view = DetailsView::default();
    view.start("ghost-package", &client, &runtime, &ctx);
    wait_for_details(&mut view);

    match &view.state {
        FetchState::Failed(msg) => assert_eq!(msg, DETAILS_ERROR),
        _ => panic!("Expected Failed state"),
    }
}
