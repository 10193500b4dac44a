//! Content service tests against a mocked CMIS browser binding.

mod helpers;

use dataprep_core::error::ErrorKind;
use dataprep_core::exception::CmisExceptionKind;
use dataprep_core::types::DocumentType;
use wiremock::ResponseTemplate;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer};

use helpers::{
    LIBRARY_ID, PASSWORD, SITE, TestRepo, USER, cmis_error, document_json, folder_json,
};

#[tokio::test]
async fn test_create_folder() {
    let repo = TestRepo::new().await;
    repo.on_post(
        LIBRARY_ID,
        ResponseTemplate::new(201).set_body_json(folder_json(
            "f-reports",
            "Reports",
            "/Sites/alpha/documentLibrary/Reports",
        )),
    )
    .await;

    let folder = repo
        .service()
        .create_folder(USER, PASSWORD, "Reports", SITE)
        .await
        .unwrap();

    assert_eq!(folder.id(), "f-reports");
    assert_eq!(folder.name(), "Reports");

    let bodies = repo.posted_bodies().await;
    assert_eq!(bodies.len(), 1);
    assert!(bodies[0].contains("cmisaction=createFolder"));
    assert!(bodies[0].contains("cmis%3Afolder"));
    assert!(bodies[0].contains("=Reports"));
}

#[tokio::test]
async fn test_create_folder_missing_parameter() {
    let repo = TestRepo::new().await;
    let service = repo.service();

    for (user, pass, folder, site) in [
        ("", PASSWORD, "Reports", SITE),
        (USER, "", "Reports", SITE),
        (USER, PASSWORD, "", SITE),
        (USER, PASSWORD, "Reports", ""),
    ] {
        let err = service.create_folder(user, pass, folder, site).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::IllegalArgument);
        assert_eq!(err.message, "Parameter missing");
    }

    // Validation happens before any request is made.
    assert!(repo.server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_create_folder_invalid_site() {
    let repo = TestRepo::new().await;

    let err = repo
        .service()
        .create_folder(USER, PASSWORD, "Reports", "no-such-site")
        .await
        .unwrap_err();

    assert_eq!(err.kind, ErrorKind::CmisRuntime);
    assert_eq!(err.message, "Invalid Site no-such-site");
    assert_eq!(err.cmis_kind(), Some(CmisExceptionKind::ObjectNotFound));
}

#[tokio::test]
async fn test_create_folder_already_exists() {
    let repo = TestRepo::new().await;
    repo.on_post(
        LIBRARY_ID,
        cmis_error(409, "contentAlreadyExists", "Duplicate child name not allowed"),
    )
    .await;

    let err = repo
        .service()
        .create_folder(USER, PASSWORD, "Reports", SITE)
        .await
        .unwrap_err();

    assert_eq!(err.kind, ErrorKind::CmisRuntime);
    assert_eq!(err.message, "Folder already exists Reports");
}

#[tokio::test]
async fn test_bad_credentials_are_not_translated() {
    let repo = TestRepo::new().await;

    let err = repo
        .service()
        .create_folder(USER, "wrong", "Reports", SITE)
        .await
        .unwrap_err();

    assert_eq!(err.kind, ErrorKind::Cmis);
    assert_eq!(err.cmis_kind(), Some(CmisExceptionKind::Unauthorized));
}

#[tokio::test]
async fn test_delete_folder() {
    let repo = TestRepo::new().await;
    repo.library_children(vec![folder_json(
        "f-reports",
        "Reports",
        "/Sites/alpha/documentLibrary/Reports",
    )])
    .await;
    repo.object(
        "f-reports",
        folder_json("f-reports", "Reports", "/Sites/alpha/documentLibrary/Reports"),
    )
    .await;
    repo.on_post("f-reports", ResponseTemplate::new(200)).await;

    repo.service()
        .delete_folder(USER, PASSWORD, SITE, "Reports")
        .await
        .unwrap();

    let bodies = repo.posted_bodies().await;
    assert_eq!(bodies.len(), 1);
    assert!(bodies[0].contains("cmisaction=delete"));
    assert!(bodies[0].contains("allVersions=true"));
}

#[tokio::test]
async fn test_delete_unknown_folder_is_invalid() {
    let repo = TestRepo::new().await;
    repo.library_children(vec![]).await;

    let err = repo
        .service()
        .delete_folder(USER, PASSWORD, SITE, "Missing")
        .await
        .unwrap_err();

    assert_eq!(err.kind, ErrorKind::CmisRuntime);
    assert_eq!(err.message, "Invalid folder Missing");
    assert!(repo.posted_bodies().await.is_empty());
}

#[tokio::test]
async fn test_delete_folder_with_children() {
    let repo = TestRepo::new().await;
    repo.library_children(vec![folder_json("f-full", "Full", "/Sites/alpha/documentLibrary/Full")])
        .await;
    repo.object("f-full", folder_json("f-full", "Full", "/Sites/alpha/documentLibrary/Full"))
        .await;
    repo.on_post("f-full", cmis_error(409, "constraint", "Folder is not empty"))
        .await;

    let err = repo
        .service()
        .delete_folder(USER, PASSWORD, SITE, "Full")
        .await
        .unwrap_err();

    assert_eq!(err.kind, ErrorKind::CmisRuntime);
    assert_eq!(err.message, "Cannot delete folder with at least one child");
    assert_eq!(err.cmis_kind(), Some(CmisExceptionKind::Constraint));
}

#[tokio::test]
async fn test_create_document() {
    let repo = TestRepo::new().await;
    repo.on_post(
        LIBRARY_ID,
        ResponseTemplate::new(201).set_body_json(document_json(
            "d-notes;1.0",
            "notes.txt",
            "text/plain",
            11,
        )),
    )
    .await;

    let document = repo
        .service()
        .create_document(USER, PASSWORD, SITE, DocumentType::TextPlain, "notes.txt", "hello world")
        .await
        .unwrap();

    assert_eq!(document.id(), "d-notes;1.0");
    assert_eq!(document.content_stream_length, Some(11));

    let bodies = repo.posted_bodies().await;
    assert_eq!(bodies.len(), 1);
    let body = &bodies[0];
    assert!(body.contains("createDocument"));
    assert!(body.contains("major"));
    assert!(body.contains("text/plain"));
    assert!(body.contains("hello world"));
}

#[tokio::test]
async fn test_create_document_invalid_site() {
    let repo = TestRepo::new().await;

    let err = repo
        .service()
        .create_document(USER, PASSWORD, "gone", DocumentType::Pdf, "a.pdf", "x")
        .await
        .unwrap_err();

    assert_eq!(err.kind, ErrorKind::CmisRuntime);
    assert_eq!(err.message, "Invalid Site gone");
}

#[tokio::test]
async fn test_create_document_already_exists() {
    let repo = TestRepo::new().await;
    repo.on_post(LIBRARY_ID, cmis_error(409, "contentAlreadyExists", "duplicate"))
        .await;

    let err = repo
        .service()
        .create_document(USER, PASSWORD, SITE, DocumentType::Xml, "a.xml", "<a/>")
        .await
        .unwrap_err();

    assert_eq!(err.kind, ErrorKind::CmisRuntime);
    assert_eq!(err.message, "Document already exists a.xml");
}

#[tokio::test]
async fn test_create_document_in_folder() {
    let repo = TestRepo::new().await;
    repo.library_children(vec![folder_json("f-reports", "Reports", "/x/Reports")])
        .await;
    repo.object("f-reports", folder_json("f-reports", "Reports", "/x/Reports"))
        .await;
    repo.on_post(
        "f-reports",
        ResponseTemplate::new(201).set_body_json(document_json(
            "d-q1;1.0",
            "q1.docx",
            DocumentType::WordOoxml.mime_type(),
            5,
        )),
    )
    .await;

    let document = repo
        .service()
        .create_document_in_folder(
            USER,
            PASSWORD,
            SITE,
            "Reports",
            DocumentType::WordOoxml,
            "q1.docx",
            "draft",
        )
        .await
        .unwrap()
        .expect("document created");

    assert_eq!(document.name(), "q1.docx");
}

#[tokio::test]
async fn test_create_document_in_non_folder() {
    let repo = TestRepo::new().await;
    repo.library_children(vec![document_json("d-a;1.0", "a.txt", "text/plain", 1)])
        .await;
    repo.object("d-a", document_json("d-a;1.0", "a.txt", "text/plain", 1))
        .await;

    let created = repo
        .service()
        .create_document_in_folder(USER, PASSWORD, SITE, "a.txt", DocumentType::TextPlain, "b.txt", "b")
        .await
        .unwrap();

    assert!(created.is_none());
    assert!(repo.posted_bodies().await.is_empty());
}

#[tokio::test]
async fn test_create_document_in_missing_folder() {
    let repo = TestRepo::new().await;
    repo.library_children(vec![]).await;

    let err = repo
        .service()
        .create_document_in_folder(USER, PASSWORD, SITE, "Nope", DocumentType::TextPlain, "b.txt", "b")
        .await
        .unwrap_err();

    assert_eq!(err.kind, ErrorKind::CmisRuntime);
    assert_eq!(err.message, "Invalid folder Nope");
}

#[tokio::test]
async fn test_delete_document() {
    let repo = TestRepo::new().await;
    repo.library_children(vec![document_json("d-a;1.0", "a.txt", "text/plain", 1)])
        .await;
    repo.object("d-a", document_json("d-a;1.0", "a.txt", "text/plain", 1))
        .await;
    repo.on_post("d-a;1.0", ResponseTemplate::new(200)).await;

    repo.service()
        .delete_document(USER, PASSWORD, SITE, "a.txt")
        .await
        .unwrap();

    assert_eq!(repo.posted_bodies().await.len(), 1);
}

#[tokio::test]
async fn test_delete_document_invalid_site() {
    let repo = TestRepo::new().await;

    let err = repo
        .service()
        .delete_document(USER, PASSWORD, "gone", "a.txt")
        .await
        .unwrap_err();

    assert_eq!(err.kind, ErrorKind::CmisRuntime);
    assert_eq!(err.message, "Invalid site gone");
}

#[tokio::test]
async fn test_delete_tree() {
    let repo = TestRepo::new().await;
    repo.library_children(vec![folder_json("f-big", "Big", "/x/Big")]).await;
    repo.object("f-big", folder_json("f-big", "Big", "/x/Big")).await;
    repo.on_post("f-big", ResponseTemplate::new(200)).await;

    let failed = repo
        .service()
        .delete_tree(USER, PASSWORD, SITE, "Big")
        .await
        .unwrap();

    assert!(failed.is_empty());
    let bodies = repo.posted_bodies().await;
    assert!(bodies[0].contains("cmisaction=deleteTree"));
    assert!(bodies[0].contains("unfileObjects=delete"));
    assert!(bodies[0].contains("continueOnFailure=true"));
}

#[tokio::test]
async fn test_delete_tree_reports_failures() {
    let repo = TestRepo::new().await;
    repo.library_children(vec![folder_json("f-big", "Big", "/x/Big")]).await;
    repo.object("f-big", folder_json("f-big", "Big", "/x/Big")).await;
    repo.on_post(
        "f-big",
        ResponseTemplate::new(500).set_body_json(serde_json::json!({"ids": ["locked-1"]})),
    )
    .await;

    let failed = repo
        .service()
        .delete_tree(USER, PASSWORD, SITE, "Big")
        .await
        .unwrap();

    assert_eq!(failed, vec!["locked-1".to_string()]);
}

#[tokio::test]
async fn test_delete_tree_of_document() {
    let repo = TestRepo::new().await;
    repo.library_children(vec![document_json("d-a;1.0", "a.txt", "text/plain", 1)])
        .await;
    repo.object("d-a", document_json("d-a;1.0", "a.txt", "text/plain", 1))
        .await;

    let err = repo
        .service()
        .delete_tree(USER, PASSWORD, SITE, "a.txt")
        .await
        .unwrap_err();

    assert_eq!(err.kind, ErrorKind::IllegalArgument);
    assert_eq!(err.message, "Object does not exist or is not a folder");
}

#[tokio::test]
async fn test_delete_tree_of_missing_folder() {
    let repo = TestRepo::new().await;
    repo.library_children(vec![]).await;

    let err = repo
        .service()
        .delete_tree(USER, PASSWORD, SITE, "Nope")
        .await
        .unwrap_err();

    assert_eq!(err.kind, ErrorKind::CmisRuntime);
    assert_eq!(err.message, "Invalid folder Nope");
}

#[tokio::test]
async fn test_get_node_ref_strips_version() {
    let repo = TestRepo::new().await;
    repo.library_children(vec![
        folder_json("f-reports", "Reports", "/x/Reports"),
        document_json("d-a;1.0", "a.txt", "text/plain", 1),
    ])
    .await;

    let service = repo.service();
    assert_eq!(
        service.get_node_ref(USER, PASSWORD, SITE, "a.txt").await.unwrap(),
        "d-a"
    );
    assert_eq!(
        service.get_node_ref(USER, PASSWORD, SITE, "Reports").await.unwrap(),
        "f-reports"
    );
    assert_eq!(
        service.get_node_ref(USER, PASSWORD, SITE, "missing").await.unwrap(),
        ""
    );
}

#[tokio::test]
async fn test_get_node_ref_scans_later_pages() {
    let repo = TestRepo::new().await;
    repo.children_page(
        LIBRARY_ID,
        0,
        vec![folder_json("f1", "One", "/x/One")],
        true,
    )
    .await;
    repo.children_page(
        LIBRARY_ID,
        1,
        vec![folder_json("f2;1.0", "Two", "/x/Two")],
        false,
    )
    .await;

    let node_ref = repo
        .service()
        .get_node_ref(USER, PASSWORD, SITE, "Two")
        .await
        .unwrap();

    assert_eq!(node_ref, "f2");
    assert_eq!(repo.children_requests().await, 2);
}

#[tokio::test]
async fn test_get_node_ref_stops_on_empty_page() {
    let repo = TestRepo::new().await;
    // A repository claiming more items while sending none must not loop.
    repo.children_page(LIBRARY_ID, 0, vec![], true).await;

    let node_ref = repo
        .service()
        .get_node_ref(USER, PASSWORD, SITE, "Two")
        .await
        .unwrap();

    assert_eq!(node_ref, "");
    assert_eq!(repo.children_requests().await, 1);
}

#[tokio::test]
async fn test_unreachable_repository() {
    // Nothing listens on port 1.
    let provider =
        dataprep_cmis::BrowserSessionProvider::with_url("http://127.0.0.1:1/cmis", "-default-");
    let service = dataprep_content::ContentService::new(std::sync::Arc::new(provider));

    let err = service
        .create_folder(USER, PASSWORD, "Reports", SITE)
        .await
        .unwrap_err();

    assert_eq!(err.kind, ErrorKind::Cmis);
    assert_eq!(err.cmis_kind(), Some(CmisExceptionKind::Connection));
}

#[tokio::test]
async fn test_html_error_page_falls_back_to_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/cmis"))
        .respond_with(ResponseTemplate::new(503).set_body_string("<html>down</html>"))
        .mount(&server)
        .await;
    let provider =
        dataprep_cmis::BrowserSessionProvider::with_url(format!("{}/cmis", server.uri()), "-default-");
    let service = dataprep_content::ContentService::new(std::sync::Arc::new(provider));

    let err = service
        .delete_tree(USER, PASSWORD, SITE, "Big")
        .await
        .unwrap_err();

    assert_eq!(err.kind, ErrorKind::Cmis);
    assert_eq!(err.cmis_kind(), Some(CmisExceptionKind::Runtime));
}
