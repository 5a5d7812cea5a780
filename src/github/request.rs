use serde_json::Value;

/// HTTP verbs used against the GitHub REST API
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
    Patch,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Patch => "PATCH",
        }
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Delete => reqwest::Method::DELETE,
            HttpMethod::Patch => reqwest::Method::PATCH,
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Everything needed to issue one GitHub API call.
///
/// `path` is either relative to the configured base URL (`/repos/o/r`) or an
/// absolute `http(s)://` URL, which is used as-is.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestDescriptor {
    pub method: HttpMethod,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl RequestDescriptor {
    pub fn new<T: Into<String>>(method: HttpMethod, path: T) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    pub fn get<T: Into<String>>(path: T) -> Self {
        Self::new(HttpMethod::Get, path)
    }

    pub fn post<T: Into<String>>(path: T) -> Self {
        Self::new(HttpMethod::Post, path)
    }

    pub fn put<T: Into<String>>(path: T) -> Self {
        Self::new(HttpMethod::Put, path)
    }

    pub fn delete<T: Into<String>>(path: T) -> Self {
        Self::new(HttpMethod::Delete, path)
    }

    pub fn patch<T: Into<String>>(path: T) -> Self {
        Self::new(HttpMethod::Patch, path)
    }

    /// Appends a query parameter, keeping insertion order.
    pub fn with_query<K: Into<String>, V: ToString>(mut self, key: K, value: V) -> Self {
        self.query.push((key.into(), value.to_string()));
        self
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Resolves the target URL against `api_base_url`.
    pub fn url(&self, api_base_url: &str) -> String {
        if self.path.starts_with("http://") || self.path.starts_with("https://") {
            return self.path.clone();
        }

        let base = api_base_url.trim_end_matches('/');
        if self.path.starts_with('/') {
            format!("{}{}", base, self.path)
        } else {
            format!("{}/{}", base, self.path)
        }
    }
}

/// `/repos/{owner}/{repo}` with each segment percent-encoded.
pub fn repo_path(owner: &str, repo: &str) -> String {
    format!(
        "/repos/{}/{}",
        urlencoding::encode(owner),
        urlencoding::encode(repo)
    )
}

/// Percent-encodes every segment of a slash-separated path while keeping the slashes.
///
/// Used for file paths and branch names such as `feature/login`.
pub fn encode_path_segments(path: &str) -> String {
    path.trim_matches('/')
        .split('/')
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect::<Vec<_>>()
        .join("/")
}
