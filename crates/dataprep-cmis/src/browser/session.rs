//! Browser binding session.

use std::fmt;

use async_trait::async_trait;
use reqwest::multipart::Part;
use reqwest::{Body, Client, RequestBuilder, Url};
use tracing::{debug, info};

use dataprep_core::exception::CmisError;
use dataprep_core::result::CmisResult;
use dataprep_core::traits::session::CmisSession;
use dataprep_core::types::{
    ChildrenPage, CmisObject, ContentStream, Document, Folder, Properties, RepositoryInfo,
    UnfileObject, VersioningState,
};

use super::form::ActionForm;
use super::response;
use super::wire::{ChildrenResponse, ObjectEnvelope};

/// A session bound to one repository and one set of credentials.
#[derive(Clone)]
pub struct BrowserSession {
    client: Client,
    repository: RepositoryInfo,
    /// Root folder URL; objects are addressed relative to it.
    root_url: Url,
    user_name: String,
    password: String,
}

impl fmt::Debug for BrowserSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BrowserSession")
            .field("repository", &self.repository.repository_id)
            .field("root_url", &self.root_url.as_str())
            .field("user_name", &self.user_name)
            .finish_non_exhaustive()
    }
}

impl BrowserSession {
    /// Create a session. Use [`BrowserSessionProvider`](super::provider::BrowserSessionProvider)
    /// to open one against a live repository.
    pub fn new(
        client: Client,
        repository: RepositoryInfo,
        root_url: Url,
        user_name: &str,
        password: &str,
    ) -> Self {
        Self {
            client,
            repository,
            root_url,
            user_name: user_name.to_string(),
            password: password.to_string(),
        }
    }

    fn authed(&self, builder: RequestBuilder) -> RequestBuilder {
        builder.basic_auth(&self.user_name, Some(&self.password))
    }

    /// URL of the object at `path`, each segment percent-encoded.
    fn path_url(&self, path: &str) -> CmisResult<Url> {
        let mut url = self.root_url.clone();
        url.path_segments_mut()
            .map_err(|_| CmisError::runtime(format!("Cannot address paths below {}", self.root_url)))?
            .pop_if_empty()
            .extend(path.split('/').filter(|s| !s.is_empty()));
        Ok(url)
    }

    async fn get_selector(
        &self,
        url: Url,
        query: &[(&str, String)],
    ) -> CmisResult<reqwest::Response> {
        debug!(url = %url, ?query, "CMIS GET");
        let resp = self
            .authed(self.client.get(url))
            .query(query)
            .send()
            .await
            .map_err(response::transport)?;
        response::check(resp).await
    }

    /// Post an action and return the response whatever its status.
    async fn send_action(&self, object_id: &str, form: ActionForm) -> CmisResult<reqwest::Response> {
        debug!(object_id, fields = ?form.fields(), "CMIS POST");
        self.authed(self.client.post(self.root_url.clone()))
            .query(&[("objectId", object_id)])
            .form(form.fields())
            .send()
            .await
            .map_err(response::transport)
    }

    async fn post_action(&self, object_id: &str, form: ActionForm) -> CmisResult<reqwest::Response> {
        let resp = self.send_action(object_id, form).await?;
        response::check(resp).await
    }
}

fn require_id(object_id: &str) -> CmisResult<()> {
    if object_id.trim().is_empty() {
        return Err(CmisError::invalid_argument("Object Id must be set"));
    }
    Ok(())
}

#[async_trait]
impl CmisSession for BrowserSession {
    fn repository_info(&self) -> &RepositoryInfo {
        &self.repository
    }

    async fn get_object(&self, object_id: &str) -> CmisResult<CmisObject> {
        require_id(object_id)?;
        let resp = self
            .get_selector(
                self.root_url.clone(),
                &[
                    ("objectId", object_id.to_string()),
                    ("cmisselector", "object".to_string()),
                    ("succinct", "true".to_string()),
                ],
            )
            .await?;
        response::json::<ObjectEnvelope>(resp).await?.into_object()
    }

    async fn get_object_by_path(&self, path: &str) -> CmisResult<CmisObject> {
        if !path.starts_with('/') {
            return Err(CmisError::invalid_argument(format!(
                "Path must be absolute: {path}"
            )));
        }
        let url = self.path_url(path)?;
        let resp = self
            .get_selector(
                url,
                &[
                    ("cmisselector", "object".to_string()),
                    ("succinct", "true".to_string()),
                ],
            )
            .await?;
        response::json::<ObjectEnvelope>(resp).await?.into_object()
    }

    async fn get_children(
        &self,
        folder_id: &str,
        max_items: u32,
        skip_count: u64,
    ) -> CmisResult<ChildrenPage> {
        require_id(folder_id)?;
        let resp = self
            .get_selector(
                self.root_url.clone(),
                &[
                    ("objectId", folder_id.to_string()),
                    ("cmisselector", "children".to_string()),
                    ("succinct", "true".to_string()),
                    ("maxItems", max_items.to_string()),
                    ("skipCount", skip_count.to_string()),
                ],
            )
            .await?;
        response::json::<ChildrenResponse>(resp).await?.into_page()
    }

    async fn create_folder(&self, parent_id: &str, properties: &Properties) -> CmisResult<Folder> {
        require_id(parent_id)?;
        let mut form = ActionForm::new("createFolder");
        form.properties(properties).succinct();

        let resp = self.post_action(parent_id, form).await?;
        let folder = response::json::<ObjectEnvelope>(resp)
            .await?
            .into_object()?
            .into_folder()
            .ok_or_else(|| CmisError::runtime("createFolder did not return a folder"))?;

        info!(id = folder.id(), name = folder.name(), "Created folder");
        Ok(folder)
    }

    async fn create_document(
        &self,
        parent_id: &str,
        properties: &Properties,
        content: ContentStream,
        versioning_state: VersioningState,
    ) -> CmisResult<Document> {
        require_id(parent_id)?;
        let mut form = ActionForm::new("createDocument");
        form.properties(properties)
            .push("versioningState", versioning_state.as_str())
            .succinct();

        let part = Part::stream_with_length(Body::from(content.data), content.length)
            .file_name(content.file_name)
            .mime_str(&content.mime_type)
            .map_err(|e| CmisError::invalid_argument(format!("Invalid MIME type: {e}")))?;
        let multipart = form.into_multipart().part("content", part);

        debug!(parent_id, "CMIS POST createDocument");
        let resp = self
            .authed(self.client.post(self.root_url.clone()))
            .query(&[("objectId", parent_id)])
            .multipart(multipart)
            .send()
            .await
            .map_err(response::transport)?;
        let resp = response::check(resp).await?;

        let document = response::json::<ObjectEnvelope>(resp)
            .await?
            .into_object()?
            .into_document()
            .ok_or_else(|| CmisError::runtime("createDocument did not return a document"))?;

        info!(id = document.id(), name = document.name(), "Created document");
        Ok(document)
    }

    async fn delete(&self, object_id: &str, all_versions: bool) -> CmisResult<()> {
        require_id(object_id)?;
        let mut form = ActionForm::new("delete");
        form.flag("allVersions", all_versions);

        self.post_action(object_id, form).await?;
        info!(object_id, "Deleted object");
        Ok(())
    }

    async fn delete_tree(
        &self,
        folder_id: &str,
        all_versions: bool,
        unfile: UnfileObject,
        continue_on_failure: bool,
    ) -> CmisResult<Vec<String>> {
        require_id(folder_id)?;
        let mut form = ActionForm::new("deleteTree");
        form.flag("allVersions", all_versions)
            .push("unfileObjects", unfile.as_str())
            .flag("continueOnFailure", continue_on_failure);

        let resp = self.send_action(folder_id, form).await?;
        let status = resp.status().as_u16();
        let body = resp.text().await.map_err(response::transport)?;
        let failed = response::failed_to_delete(status, &body)?;

        info!(folder_id, status, failed = failed.len(), "Deleted tree");
        Ok(failed)
    }
}
