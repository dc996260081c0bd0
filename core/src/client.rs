//! Stateless request builder and envelope normalizer for the Printful API.
//!
//! # Design
//! `PrintfulClient` holds only a base URL and an optional bearer token. A
//! `Call` names one `Route` plus its arguments; `build` turns it into an
//! `HttpRequest`, and `parse` turns the matching `HttpResponse` into a
//! `Normalized` result. The network round-trip happens elsewhere, so both
//! halves stay deterministic.

use serde::Serialize;

use crate::envelope::{self, Envelope, Normalized};
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::query::Query;
use crate::routes::Route;
use crate::types::{Paging, ResourceId};

pub const DEFAULT_BASE_URL: &str = "https://api.printful.com";

/// One invocation of a route: path arguments, query, body and the paging the
/// caller asked for.
#[derive(Debug, Clone)]
pub struct Call {
    pub route: &'static Route,
    params: Vec<(&'static str, String)>,
    query: Query,
    body: Option<String>,
    paging: Option<Paging>,
}

impl Call {
    pub fn new(route: &'static Route) -> Self {
        Self {
            route,
            params: Vec::new(),
            query: Query::new(),
            body: None,
            paging: None,
        }
    }

    /// Fill the `{id}` placeholder.
    pub fn id(self, id: impl Into<ResourceId>) -> Self {
        self.param("id", id.into())
    }

    pub fn param(mut self, name: &'static str, value: impl ToString) -> Self {
        self.params.push((name, value.to_string()));
        self
    }

    pub fn query(mut self, query: Query) -> Self {
        self.query = query;
        self
    }

    /// Send `offset`/`limit` and remember them for the failure case.
    pub fn paging(mut self, offset: u64, limit: u64) -> Self {
        self.query = self.query.push("offset", offset).push("limit", limit);
        self.paging = Some(Paging::requested(offset, limit));
        self
    }

    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self, ApiError> {
        let body = serde_json::to_string(body).map_err(|e| ApiError::Serialization(e.to_string()))?;
        self.body = Some(body);
        Ok(self)
    }

    pub fn requested_paging(&self) -> Option<Paging> {
        self.paging
    }

    fn path(&self) -> Result<String, ApiError> {
        let mut path = self.route.path.to_string();
        for (name, value) in &self.params {
            path = path.replace(&format!("{{{name}}}"), value);
        }
        if let Some(missing) = self.route.placeholders().find(|p| path.contains(&format!("{{{p}}}"))) {
            return Err(ApiError::InvalidRequest {
                route: self.route.name,
                reason: format!("missing path parameter `{missing}`"),
            });
        }
        Ok(path)
    }
}

/// Synchronous, stateless client for the Printful API.
#[derive(Debug, Clone)]
pub struct PrintfulClient {
    base_url: String,
    token: Option<String>,
}

impl PrintfulClient {
    pub fn new(token: Option<&str>) -> Self {
        Self::with_base_url(DEFAULT_BASE_URL, token)
    }

    pub fn with_base_url(base_url: &str, token: Option<&str>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.map(str::to_string),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `Bearer <token>`; an absent token still yields `Bearer `.
    pub fn authorization(&self) -> String {
        format!("Bearer {}", self.token.as_deref().unwrap_or(""))
    }

    pub fn build(&self, call: &Call) -> Result<HttpRequest, ApiError> {
        let mut url = format!("{}{}", self.base_url, call.path()?);
        if !call.query.is_empty() {
            url.push('?');
            url.push_str(&call.query.encode());
        }

        let mut headers = vec![("authorization".to_string(), self.authorization())];
        if call.body.is_some() {
            headers.push(("content-type".to_string(), "application/json".to_string()));
        }

        Ok(HttpRequest {
            method: call.route.method,
            url,
            headers,
            body: call.body.clone(),
        })
    }

    /// Normalize the response to `call`. Fails only if the body is not a
    /// JSON envelope; remote failures come back as `Normalized::error`.
    pub fn parse(&self, call: &Call, response: HttpResponse) -> Result<Normalized, ApiError> {
        let envelope = Envelope::from_json(&response.body)?;
        Ok(envelope::normalize(
            call.route,
            response.status,
            envelope,
            call.requested_paging(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::http::HttpMethod;
    use crate::routes::{countries, mockups, orders, products};

    fn client() -> PrintfulClient {
        PrintfulClient::with_base_url("https://api.printful.com", Some("secret"))
    }

    fn response(status: u16, body: serde_json::Value) -> HttpResponse {
        HttpResponse {
            status,
            headers: Vec::new(),
            body: body.to_string(),
        }
    }

    #[test]
    fn build_get_without_query() {
        let req = client().build(&Call::new(&countries::GET_COUNTRIES)).unwrap();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.url, "https://api.printful.com/countries");
        assert_eq!(req.header("authorization"), Some("Bearer secret"));
        assert!(req.body.is_none());
        assert!(req.header("content-type").is_none());
    }

    #[test]
    fn build_paged_list() {
        let call = Call::new(&products::GET_SYNC_PRODUCTS).paging(0, 20);
        let req = client().build(&call).unwrap();
        assert_eq!(req.url, "https://api.printful.com/store/products?offset=0&limit=20");
    }

    #[test]
    fn build_create_order_with_flags() {
        let order = json!({"recipient": {"name": "Jane"}, "items": [{"variant_id": 1, "quantity": 1}]});
        let call = Call::new(&orders::CREATE_ORDER)
            .query(Query::new().push("confirm", true).push("update_existing", false))
            .json(&order)
            .unwrap();
        let req = client().build(&call).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(
            req.url,
            "https://api.printful.com/orders?confirm=true&update_existing=false"
        );
        assert_eq!(req.header("content-type"), Some("application/json"));
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body, order);
    }

    #[test]
    fn external_id_is_forwarded_verbatim() {
        let call = Call::new(&products::GET_SYNC_PRODUCT).id("@shirt-01");
        let req = client().build(&call).unwrap();
        assert_eq!(req.url, "https://api.printful.com/store/products/@shirt-01");
    }

    #[test]
    fn missing_placeholder_is_rejected() {
        let err = client().build(&Call::new(&mockups::GET_PRINTFILES)).unwrap_err();
        assert!(matches!(err, ApiError::InvalidRequest { route: "getPrintfiles", .. }));
    }

    #[test]
    fn missing_token_still_sends_bearer_prefix() {
        let c = PrintfulClient::new(None);
        let req = c.build(&Call::new(&countries::GET_COUNTRIES)).unwrap();
        assert_eq!(req.header("authorization"), Some("Bearer "));
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let c = PrintfulClient::with_base_url("http://localhost:3000/", None);
        let req = c.build(&Call::new(&countries::GET_COUNTRIES)).unwrap();
        assert_eq!(req.url, "http://localhost:3000/countries");
    }

    #[test]
    fn parse_sync_product_not_found() {
        let call = Call::new(&products::GET_SYNC_PRODUCT).id(999u64);
        let n = client()
            .parse(&call, response(404, json!({"code": 404, "error": {"message": "not found"}})))
            .unwrap();
        assert_eq!(
            n.to_value(),
            json!({"sync_product": {}, "sync_variants": [], "error": {"message": "not found"}})
        );
    }

    #[test]
    fn parse_bad_json_is_an_error() {
        let call = Call::new(&countries::GET_COUNTRIES);
        let resp = HttpResponse {
            status: 200,
            headers: Vec::new(),
            body: "not json".to_string(),
        };
        let err = client().parse(&call, resp).unwrap_err();
        assert!(matches!(err, ApiError::Deserialization(_)));
    }

    #[test]
    fn parse_is_idempotent() {
        let call = Call::new(&products::GET_SYNC_PRODUCTS).paging(0, 20);
        let body = json!({
            "code": 200,
            "result": [{"id": 1}],
            "paging": {"offset": 0, "limit": 20, "total": 1}
        });
        let first = client().parse(&call, response(200, body.clone())).unwrap();
        let second = client().parse(&call, response(200, body)).unwrap();
        assert_eq!(first, second);
    }
}
