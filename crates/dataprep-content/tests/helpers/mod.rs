//! Shared helpers for content service tests against a mocked browser binding.

#![allow(dead_code)]

use std::sync::Arc;

use serde_json::{Value, json};
use wiremock::matchers::{basic_auth, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use dataprep_cmis::BrowserSessionProvider;
use dataprep_content::ContentService;

pub const USER: &str = "admin";
pub const PASSWORD: &str = "admin";
pub const SITE: &str = "alpha";
pub const LIBRARY_ID: &str = "lib-alpha";

const SERVICE_PATH: &str = "/alfresco/cmis/browser";
const ROOT_PATH: &str = "/alfresco/cmis/browser/root";

/// A mocked repository with one site, `alpha`.
pub struct TestRepo {
    /// The mock server.
    pub server: MockServer,
}

impl TestRepo {
    /// Start a server that accepts `admin`/`admin` and serves the `alpha`
    /// document library.
    pub async fn new() -> Self {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path(SERVICE_PATH))
            .and(basic_auth(USER, PASSWORD))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "-default-": {
                    "repositoryId": "-default-",
                    "repositoryName": "Main Repository",
                    "productName": "Alfresco Community",
                    "productVersion": "23.2.0",
                    "cmisVersionSupported": "1.1",
                    "rootFolderId": "root-id",
                    "rootFolderUrl": format!("{}{ROOT_PATH}", server.uri()),
                    "repositoryUrl": format!("{}{SERVICE_PATH}", server.uri())
                }
            })))
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path(SERVICE_PATH))
            .respond_with(ResponseTemplate::new(401))
            .with_priority(10)
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path(format!("{ROOT_PATH}/Sites/{SITE}/documentLibrary")))
            .and(query_param("cmisselector", "object"))
            .respond_with(ResponseTemplate::new(200).set_body_json(folder_json(
                LIBRARY_ID,
                "documentLibrary",
                &format!("/Sites/{SITE}/documentLibrary"),
            )))
            .mount(&server)
            .await;

        Self { server }
    }

    /// A content service bound to this repository.
    pub fn service(&self) -> ContentService {
        let provider =
            BrowserSessionProvider::with_url(format!("{}{SERVICE_PATH}", self.server.uri()), "-default-");
        ContentService::new(Arc::new(provider))
    }

    /// Serve `children` as the whole content of the `alpha` document library.
    pub async fn library_children(&self, children: Vec<Value>) {
        self.children_of(LIBRARY_ID, children).await;
    }

    /// Serve `children` as the whole content of folder `folder_id`.
    pub async fn children_of(&self, folder_id: &str, children: Vec<Value>) {
        let objects: Vec<Value> = children
            .into_iter()
            .map(|c| json!({ "object": c }))
            .collect();
        let count = objects.len();
        Mock::given(method("GET"))
            .and(path(ROOT_PATH))
            .and(query_param("objectId", folder_id))
            .and(query_param("cmisselector", "children"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "objects": objects,
                "hasMoreItems": false,
                "numItems": count
            })))
            .mount(&self.server)
            .await;
    }

    /// Serve one page of folder `folder_id`'s children starting at `skip_count`.
    pub async fn children_page(
        &self,
        folder_id: &str,
        skip_count: u64,
        children: Vec<Value>,
        has_more_items: bool,
    ) {
        let objects: Vec<Value> = children
            .into_iter()
            .map(|c| json!({ "object": c }))
            .collect();
        Mock::given(method("GET"))
            .and(path(ROOT_PATH))
            .and(query_param("objectId", folder_id))
            .and(query_param("cmisselector", "children"))
            .and(query_param("skipCount", skip_count.to_string()))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "objects": objects,
                "hasMoreItems": has_more_items
            })))
            .mount(&self.server)
            .await;
    }

    /// Number of children listings the server has answered.
    pub async fn children_requests(&self) -> usize {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .filter(|r| {
                r.url
                    .query_pairs()
                    .any(|(k, v)| k == "cmisselector" && v == "children")
            })
            .count()
    }

    /// Serve `object` for `cmisselector=object&objectId=id`.
    pub async fn object(&self, id: &str, object: Value) {
        Mock::given(method("GET"))
            .and(path(ROOT_PATH))
            .and(query_param("objectId", id))
            .and(query_param("cmisselector", "object"))
            .respond_with(ResponseTemplate::new(200).set_body_json(object))
            .mount(&self.server)
            .await;
    }

    /// Answer POSTs against `object_id` with `response`.
    pub async fn on_post(&self, object_id: &str, response: ResponseTemplate) {
        Mock::given(method("POST"))
            .and(path(ROOT_PATH))
            .and(query_param("objectId", object_id))
            .respond_with(response)
            .mount(&self.server)
            .await;
    }

    /// Every POST the server has received, as body text.
    pub async fn posted_bodies(&self) -> Vec<String> {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .into_iter()
            .filter(|r| r.method.as_str() == "POST")
            .map(|r| String::from_utf8_lossy(&r.body).into_owned())
            .collect()
    }
}

/// Succinct JSON of a folder.
pub fn folder_json(id: &str, name: &str, path: &str) -> Value {
    json!({
        "succinctProperties": {
            "cmis:objectId": id,
            "cmis:name": name,
            "cmis:baseTypeId": "cmis:folder",
            "cmis:objectTypeId": "cmis:folder",
            "cmis:path": path,
            "cmis:creationDate": 1_700_000_000_000i64
        }
    })
}

/// Succinct JSON of a document.
pub fn document_json(id: &str, name: &str, mime_type: &str, length: u64) -> Value {
    json!({
        "succinctProperties": {
            "cmis:objectId": id,
            "cmis:name": name,
            "cmis:baseTypeId": "cmis:document",
            "cmis:objectTypeId": "cmis:document",
            "cmis:contentStreamMimeType": mime_type,
            "cmis:contentStreamLength": length,
            "cmis:versionLabel": "1.0"
        }
    })
}

/// A browser binding error response.
pub fn cmis_error(status: u16, exception: &str, message: &str) -> ResponseTemplate {
    ResponseTemplate::new(status).set_body_json(json!({
        "exception": exception,
        "message": message
    }))
}
