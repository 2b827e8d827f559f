// Copyright (c) 2026 - present Shipprep Contributors
// SPDX-License-Identifier: MIT

//! Integration tests for the GitHub client against a loopback HTTP stub
//!
//! A minimal single-threaded HTTP server on 127.0.0.1 serves canned JSON
//! per request path, so the pagination and profile-lookup behavior of the
//! client can be exercised without network access.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::{Arc, Mutex};
use std::thread;

use shipprep_contributors::{GitHubClient, GitHubConfig, RevisionRange};

/// A loopback HTTP server answering each request via the given router
struct StubServer {
    base_url: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl StubServer {
    fn start(router: fn(&str) -> String) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind loopback");
        let base_url = format!("http://{}", listener.local_addr().expect("local addr"));
        let requests = Arc::new(Mutex::new(Vec::new()));
        let log = Arc::clone(&requests);

        thread::spawn(move || {
            for stream in listener.incoming() {
                let Ok(mut stream) = stream else { continue };

                // Read the request head; GET requests carry no body
                let mut head = Vec::new();
                let mut buf = [0u8; 4096];
                loop {
                    match stream.read(&mut buf) {
                        Ok(0) | Err(_) => break,
                        Ok(n) => head.extend_from_slice(&buf[..n]),
                    }
                    if head.windows(4).any(|w| w == b"\r\n\r\n") {
                        break;
                    }
                }

                let request = String::from_utf8_lossy(&head);
                let path = request
                    .lines()
                    .next()
                    .and_then(|line| line.split_whitespace().nth(1))
                    .unwrap_or("/")
                    .to_string();
                log.lock().expect("request log").push(path.clone());

                let body = router(&path);
                let response = format!(
                    "HTTP/1.1 200 OK\r\n\
                     content-type: application/json\r\n\
                     content-length: {}\r\n\
                     connection: close\r\n\r\n{}",
                    body.len(),
                    body
                );
                let _ = stream.write_all(response.as_bytes());
            }
        });

        Self { base_url, requests }
    }

    fn requests(&self) -> Vec<String> {
        self.requests.lock().expect("request log").clone()
    }
}

/// Contributors pages: an exactly-full page 1 (100 records), a short page 2
fn contributors_page(page: usize) -> String {
    let records: Vec<String> = match page {
        1 => (0..100)
            .map(|i| format!(r#"{{"login":"user{i:03}","contributions":{}}}"#, 100 - i))
            .collect(),
        2 => vec![r#"{"login":"straggler","contributions":1}"#.to_string()],
        _ => Vec::new(),
    };
    format!("[{}]", records.join(","))
}

fn route(path: &str) -> String {
    if path.starts_with("/repos/owner/repo/contributors") {
        // The client always emits `?per_page=...&page=...`
        let page = path
            .split("&page=")
            .nth(1)
            .and_then(|p| p.split('&').next())
            .and_then(|p| p.parse().ok())
            .unwrap_or(1);
        contributors_page(page)
    } else if let Some(login) = path.strip_prefix("/users/") {
        // user000 has no public display name; the client must fall back to
        // the login
        if login == "user000" {
            format!(r#"{{"login":"{login}","name":null}}"#)
        } else {
            format!(r#"{{"login":"{login}","name":"Name {login}"}}"#)
        }
    } else if path.starts_with("/repos/owner/repo/compare/") {
        r#"{
            "status": "ahead",
            "commits": [
                {
                    "sha": "1945ab9c752534e733c38ba0109dc3b741f0a6eb",
                    "commit": {"author": {"name": "Alice", "email": "a@example.com"}},
                    "author": {"login": "alice123"}
                },
                {
                    "sha": "c460aeb7fb2d109c17e43de0ce681faec0b7374d",
                    "commit": {"author": {"name": "Mystery", "email": "m@example.com"}},
                    "author": null
                }
            ]
        }"#
        .to_string()
    } else {
        "[]".to_string()
    }
}

fn client_for(server: &StubServer) -> GitHubClient {
    let config = GitHubConfig::new("owner/repo").with_api_url(server.base_url.as_str());
    GitHubClient::new(config).expect("build client")
}

#[tokio::test]
async fn test_all_contributors_pages_until_short_page() {
    let server = StubServer::start(route);
    let client = client_for(&server);

    let snapshot = client.all_contributors().await.expect("fetch snapshot");

    // 100 records on page 1 plus the straggler on page 2
    assert_eq!(snapshot.len(), 101);
    assert_eq!(snapshot.get("straggler").expect("page 2 record").contributions, 1);

    let requests = server.requests();
    assert!(requests.iter().any(|p| p.contains("per_page=100") && p.contains("&page=1")));
    assert!(requests.iter().any(|p| p.contains("&page=2")));
    // The short page 2 ends pagination
    assert!(!requests.iter().any(|p| p.contains("&page=3")));
}

#[tokio::test]
async fn test_all_contributors_falls_back_to_login_for_unnamed_profile() {
    let server = StubServer::start(route);
    let client = client_for(&server);

    let snapshot = client.all_contributors().await.expect("fetch snapshot");

    let unnamed = snapshot.get("user000").expect("unnamed profile present");
    assert_eq!(unnamed.name, "user000");

    let named = snapshot.get("user001").expect("named profile present");
    assert_eq!(named.name, "Name user001");
}

#[tokio::test]
async fn test_commit_author_index_skips_unmapped_authors() {
    let server = StubServer::start(route);
    let client = client_for(&server);

    let range = RevisionRange::new("v1.0.0", "HEAD");
    let index = client.commit_author_index(&range).await.expect("fetch index");

    assert_eq!(index.len(), 1);
    assert_eq!(index.lookup("Alice"), Some("alice123"));
    // "Mystery" has no platform account in the compare payload
    assert!(index.lookup("Mystery").is_none());
}
