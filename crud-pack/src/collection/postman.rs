//! Postman v2.1 request items

use serde::Serialize;
use serde_json::json;

/// Collection schema URL
pub const SCHEMA_URL: &str = "https://schema.getpostman.com/json/collection/v2.1.0/collection.json";

/// `description` marking folders this tool owns
pub const OWNERSHIP_MARKER: &str = "generated-by-crud-pack";

/// Collection variable holding the server origin
pub const BASE_URL_VAR: &str = "{{base_url}}";

/// Collection variable holding the API prefix
pub const API_PREFIX_VAR: &str = "{{api_prefix}}";

/// Generated folder for one resource
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Folder {
    /// Resource class name
    pub name: String,
    /// Always [`OWNERSHIP_MARKER`]
    pub description: String,
    /// Requests, list endpoint first
    pub item: Vec<RequestItem>,
}

/// Named request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RequestItem {
    /// `GetAllWidget`, `StoreWidget`, ...
    pub name: String,
    /// The HTTP request
    pub request: Request,
}

/// HTTP request definition
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Request {
    /// Upper-case HTTP verb
    pub method: &'static str,
    /// Request headers
    pub header: Vec<KeyValue>,
    /// Target URL
    pub url: Url,
    /// JSON body for create, update and bulk requests
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<Body>,
}

/// Header, query parameter or path variable
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeyValue {
    /// Name
    pub key: String,
    /// Value
    pub value: String,
    /// Disabled entries are shown but not sent
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub disabled: bool,
}

impl KeyValue {
    fn new(key: &str, value: &str) -> Self {
        Self {
            key: key.to_string(),
            value: value.to_string(),
            disabled: false,
        }
    }
}

/// Structured request URL
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Url {
    /// Full URL text
    pub raw: String,
    /// `["{{base_url}}"]`
    pub host: Vec<String>,
    /// Segments after the host, starting with `{{api_prefix}}`
    pub path: Vec<String>,
    /// Query parameters
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub query: Vec<KeyValue>,
    /// Path variables such as `id`
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub variable: Vec<KeyValue>,
}

impl Url {
    /// URL for `path` below `{{base_url}}/{{api_prefix}}`
    ///
    /// `:id` segments become path variables.
    #[must_use]
    pub fn api(path: &str) -> Self {
        let segments: Vec<String> = path
            .trim_matches('/')
            .split('/')
            .filter(|s| !s.is_empty())
            .map(ToString::to_string)
            .collect();

        let variable = segments
            .iter()
            .filter_map(|s| s.strip_prefix(':'))
            .map(|key| KeyValue::new(key, "1"))
            .collect();

        let mut path = vec![API_PREFIX_VAR.to_string()];
        path.extend(segments);

        Self {
            raw: format!("{BASE_URL_VAR}/{}", path.join("/")),
            host: vec![BASE_URL_VAR.to_string()],
            path,
            query: Vec::new(),
            variable,
        }
    }

    /// Add the disabled `page` parameter list endpoints carry
    #[must_use]
    pub fn paginated(mut self) -> Self {
        self.query.push(KeyValue {
            key: "page".to_string(),
            value: "1".to_string(),
            disabled: true,
        });
        self
    }
}

/// Raw JSON body
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Body {
    /// Always `raw`
    pub mode: &'static str,
    /// Pretty-printed JSON text
    pub raw: String,
    /// Marks the raw body as JSON
    pub options: serde_json::Value,
}

impl Body {
    fn json(value: &serde_json::Value) -> Self {
        Self {
            mode: "raw",
            raw: serde_json::to_string_pretty(value).unwrap_or_default(),
            options: json!({ "raw": { "language": "json" } }),
        }
    }

    /// `{"ids": [1, 2, 3]}`
    #[must_use]
    pub fn ids() -> Self {
        Self::json(&json!({ "ids": [1, 2, 3] }))
    }

    /// `{"name": "Example"}`
    #[must_use]
    pub fn record() -> Self {
        Self::json(&json!({ "name": "Example" }))
    }
}

fn request(name: String, method: &'static str, url: Url, body: Option<Body>) -> RequestItem {
    let mut header = vec![KeyValue::new("Accept", "application/json")];
    if body.is_some() {
        header.push(KeyValue::new("Content-Type", "application/json"));
    }
    RequestItem {
        name,
        request: Request {
            method,
            header,
            url,
            body,
        },
    }
}

/// Requests for one resource mounted at `uri`
#[must_use]
pub fn resource_folder(name: &str, uri: &str, soft_deletes: bool) -> Folder {
    let mut item = vec![
        request(format!("GetAll{name}"), "GET", Url::api(uri).paginated(), None),
        request(format!("Get{name}"), "GET", Url::api(&format!("{uri}/:id")), None),
        request(format!("Store{name}"), "POST", Url::api(uri), Some(Body::record())),
        request(format!("Update{name}"), "PUT", Url::api(&format!("{uri}/:id")), Some(Body::record())),
        request(format!("Destroy{name}"), "DELETE", Url::api(&format!("{uri}/:id")), None),
        request(format!("Destroy{name}Bulk"), "DELETE", Url::api(&format!("{uri}/bulk")), Some(Body::ids())),
    ];

    if soft_deletes {
        item.extend([
            request(format!("Trash{name}"), "GET", Url::api(&format!("{uri}/trash")).paginated(), None),
            request(format!("Restore{name}"), "POST", Url::api(&format!("{uri}/:id/restore")), None),
            request(format!("Restore{name}Bulk"), "POST", Url::api(&format!("{uri}/restore-bulk")), Some(Body::ids())),
            request(format!("ForceDelete{name}"), "DELETE", Url::api(&format!("{uri}/:id/force")), None),
            request(
                format!("ForceDelete{name}Bulk"),
                "DELETE",
                Url::api(&format!("{uri}/force-bulk")),
                Some(Body::ids()),
            ),
        ]);
    }

    Folder {
        name: name.to_string(),
        description: OWNERSHIP_MARKER.to_string(),
        item,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_is_structured() {
        let url = Url::api("widgets/:id/restore");

        assert_eq!(url.raw, "{{base_url}}/{{api_prefix}}/widgets/:id/restore");
        assert_eq!(url.host, vec!["{{base_url}}"]);
        assert_eq!(url.path, vec!["{{api_prefix}}", "widgets", ":id", "restore"]);
        assert_eq!(url.variable, vec![KeyValue::new("id", "1")]);
        assert!(url.query.is_empty());
    }

    #[test]
    fn test_list_endpoint_has_disabled_page() {
        let value = serde_json::to_value(Url::api("widgets").paginated()).unwrap();
        assert_eq!(value["query"][0]["key"], "page");
        assert_eq!(value["query"][0]["disabled"], true);
        assert!(value.get("variable").is_none());
    }

    #[test]
    fn test_folder_without_soft_deletes() {
        let folder = resource_folder("Widget", "widgets", false);
        let names: Vec<&str> = folder.item.iter().map(|i| i.name.as_str()).collect();

        assert_eq!(
            names,
            ["GetAllWidget", "GetWidget", "StoreWidget", "UpdateWidget", "DestroyWidget", "DestroyWidgetBulk"]
        );
        assert_eq!(folder.description, OWNERSHIP_MARKER);
    }

    #[test]
    fn test_folder_with_soft_deletes() {
        let folder = resource_folder("Widget", "widgets", true);
        assert_eq!(folder.item.len(), 11);

        let force_bulk = folder.item.last().unwrap();
        assert_eq!(force_bulk.name, "ForceDeleteWidgetBulk");
        assert_eq!(force_bulk.request.method, "DELETE");
        assert_eq!(force_bulk.request.url.raw, "{{base_url}}/{{api_prefix}}/widgets/force-bulk");
    }

    #[test]
    fn test_bodies_and_headers() {
        let folder = resource_folder("Widget", "widgets", false);
        let store = &folder.item[2].request;
        let bulk = &folder.item[5].request;
        let show = &folder.item[1].request;

        let record: serde_json::Value = serde_json::from_str(&store.body.as_ref().unwrap().raw).unwrap();
        assert_eq!(record, json!({ "name": "Example" }));

        let ids: serde_json::Value = serde_json::from_str(&bulk.body.as_ref().unwrap().raw).unwrap();
        assert_eq!(ids, json!({ "ids": [1, 2, 3] }));

        assert_eq!(store.header.len(), 2);
        assert_eq!(show.header, vec![KeyValue::new("Accept", "application/json")]);
        assert!(show.body.is_none());
    }
}
