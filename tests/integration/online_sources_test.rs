// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use predatory_journals::config::settings::{HttpSettings, SourceSettings};
use predatory_journals::engines::reqwest_engine::ReqwestFetcher;
use predatory_journals::utils::errors::ConfigurationError;
use predatory_journals::{JournalRecord, PredatoryJournalLoader, SourceRegistry};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const JOURNALS_CSV: &str = "url,name,abbr\nhttp://pub.example,Pub Name,PN\n\"http://q.example\",\"Quarterly, Inc\",\n";

const BEALLS_HTML: &str = r#"<html><body>
<ul>
<li><a href="http://alpha.example">Alpha Publishing (AP)</a></li>
<li><a href="https://beta.example/">Beta Press</a></li>
<li>Gamma Group (no website)</li>
</ul>
</body></html>"#;

const HIJACKED_HTML: &str = r#"<table>
<tr><th>Hijacked</th><th>Original</th></tr>
<tr><td><a href="http://hijack.example">Journal of Stuff (JoS)</a></td><td><a href="http://original.example">Journal of Stuff</a></td></tr>
</table>"#;

async fn serve(server: &MockServer, route: &str, body: &str) {
    Mock::given(method("HEAD"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(server)
        .await;
}

fn source(server: &MockServer, route: &str, element_pattern: Option<&str>) -> SourceSettings {
    SourceSettings {
        location: format!("{}{}", server.uri(), route),
        element_pattern: element_pattern.map(str::to_string),
    }
}

fn http_settings() -> HttpSettings {
    HttpSettings {
        user_agent: "predatory-journals-test".to_string(),
        timeout_secs: Some(10),
    }
}

#[tokio::test]
async fn test_load_from_online_sources() {
    let server = MockServer::start().await;
    serve(&server, "/_data/journals.csv", JOURNALS_CSV).await;
    serve(&server, "/", BEALLS_HTML).await;
    serve(&server, "/hijacked-journals/", HIJACKED_HTML).await;
    Mock::given(method("HEAD"))
        .and(path("/_data/publishers.csv"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let registry = SourceRegistry::from_settings(&[
        source(&server, "/_data/journals.csv", None),
        source(&server, "/_data/publishers.csv", None),
        source(&server, "/", Some("<li>.*?</li>")),
        source(&server, "/hijacked-journals/", Some("<tr>.*?</tr>")),
    ])
    .unwrap();
    let loader = PredatoryJournalLoader::new(registry, ReqwestFetcher::new(&http_settings()).unwrap());

    let records = loader.run().await;

    assert_eq!(
        records,
        vec![
            JournalRecord::new("name", "abbr", "url"),
            JournalRecord::new("Pub Name", "PN", "http://pub.example"),
            JournalRecord::new("Quarterly, Inc", "", "http://q.example"),
            JournalRecord::new("Alpha Publishing (AP)", "AP", "http://alpha.example"),
            JournalRecord::new("Beta Press", "", "https://beta.example/"),
            JournalRecord::new("Journal of Stuff (JoS)", "JoS", "http://hijack.example"),
        ]
    );
}

#[tokio::test]
async fn test_server_error_on_download_is_isolated() {
    let server = MockServer::start().await;
    Mock::given(method("HEAD"))
        .and(path("/broken.csv"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/broken.csv"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    serve(&server, "/standalone-journals/", BEALLS_HTML).await;

    let registry = SourceRegistry::from_settings(&[
        source(&server, "/broken.csv", None),
        source(&server, "/standalone-journals/", Some("<li>.*?</li>")),
    ])
    .unwrap();
    let loader = PredatoryJournalLoader::new(registry, ReqwestFetcher::new(&http_settings()).unwrap());

    let records = loader.run().await;

    let names: Vec<_> = records.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Alpha Publishing (AP)", "Beta Press"]);
}

#[tokio::test]
async fn test_single_csv_row_end_to_end() {
    let server = MockServer::start().await;
    serve(&server, "/publishers.csv", "http://pub.example,Pub Name,PN\n").await;

    let registry =
        SourceRegistry::from_settings(&[source(&server, "/publishers.csv", None)]).unwrap();
    let loader = PredatoryJournalLoader::new(registry, ReqwestFetcher::new(&http_settings()).unwrap());

    let records = loader.run().await;

    assert_eq!(
        records,
        vec![JournalRecord::new("Pub Name", "PN", "http://pub.example")]
    );
}

#[test]
fn test_invalid_configured_pattern_aborts_startup() {
    let result = SourceRegistry::from_settings(&[SourceSettings {
        location: "https://beallslist.net/".to_string(),
        element_pattern: Some("<li>(.*?</li>".to_string()),
    }]);

    assert!(matches!(
        result,
        Err(ConfigurationError::InvalidPattern { .. })
    ));
}
