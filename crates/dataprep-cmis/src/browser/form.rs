//! Form fields of browser binding `cmisaction` posts.

use reqwest::multipart;

use dataprep_core::types::Properties;

/// Ordered form fields for one action.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionForm {
    fields: Vec<(String, String)>,
}

impl ActionForm {
    /// Start a form for `cmisaction`.
    pub fn new(action: &str) -> Self {
        let mut form = Self::default();
        form.push("cmisaction", action);
        form
    }

    /// Append one field.
    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.fields.push((name.into(), value.into()));
        self
    }

    /// Append a boolean field.
    pub fn flag(&mut self, name: &str, value: bool) -> &mut Self {
        self.push(name, if value { "true" } else { "false" })
    }

    /// Append properties as `propertyId[i]` / `propertyValue[i]` pairs.
    pub fn properties(&mut self, properties: &Properties) -> &mut Self {
        for (i, (id, value)) in properties.iter().enumerate() {
            self.push(format!("propertyId[{i}]"), id.clone());
            self.push(format!("propertyValue[{i}]"), value.clone());
        }
        self
    }

    /// Ask for succinct properties in the response.
    pub fn succinct(&mut self) -> &mut Self {
        self.flag("succinct", true)
    }

    /// The fields, in insertion order.
    pub fn fields(&self) -> &[(String, String)] {
        &self.fields
    }

    /// Convert into a multipart form; content parts are appended by the caller.
    pub fn into_multipart(self) -> multipart::Form {
        self.fields
            .into_iter()
            .fold(multipart::Form::new(), |form, (name, value)| form.text(name, value))
    }
}
