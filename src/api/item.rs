//! Item Calls
//!
//! Typed wrappers for the `/api/items` endpoints.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use super::{ApiError, ApiRequest, Method, Transport};
use crate::models::{CreateItem, Item, ItemId, ItemList};

/// Same reserved set as `encodeURIComponent`
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

const ITEMS_PATH: &str = "/api/items";

/// `/api/items`, with `?q=` only when the trimmed query is non-empty
pub fn items_path(query: &str) -> String {
    let q = query.trim();
    if q.is_empty() {
        ITEMS_PATH.to_string()
    } else {
        format!("{}?q={}", ITEMS_PATH, utf8_percent_encode(q, COMPONENT))
    }
}

fn item_path(id: &ItemId) -> String {
    format!("{}/{}", ITEMS_PATH, utf8_percent_encode(&id.to_string(), COMPONENT))
}

pub struct TodoApi<T> {
    transport: T,
}

impl<T: Transport> TodoApi<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub async fn list_items(&self, query: &str) -> Result<Vec<Item>, ApiError> {
        let response = self
            .transport
            .send(ApiRequest::new(Method::Get, items_path(query)))
            .await?;
        let list: Option<ItemList> = response.into_json()?;
        Ok(list.unwrap_or_default().items)
    }

    pub async fn create_item(&self, title: &str) -> Result<Option<Item>, ApiError> {
        let body = serde_json::to_string(&CreateItem { title }).map_err(|e| ApiError::Decode(e.to_string()))?;
        let request = ApiRequest::new(Method::Post, ITEMS_PATH).with_body(body);
        self.transport.send(request).await?.into_json()
    }

    pub async fn toggle_item(&self, id: &ItemId) -> Result<Option<Item>, ApiError> {
        let path = format!("{}/toggle", item_path(id));
        self.transport
            .send(ApiRequest::new(Method::Post, path))
            .await?
            .into_json()
    }

    pub async fn delete_item(&self, id: &ItemId) -> Result<(), ApiError> {
        let response = self
            .transport
            .send(ApiRequest::new(Method::Delete, item_path(id)))
            .await?;
        // Body, if any, is ignored
        response.into_json::<serde_json::Value>()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingTransport;
    use futures::executor::block_on;

    #[test]
    fn test_items_path_query() {
        assert_eq!(items_path(""), "/api/items");
        assert_eq!(items_path("   "), "/api/items");
        assert_eq!(items_path(" milk "), "/api/items?q=milk");
        assert_eq!(items_path("a&b c"), "/api/items?q=a%26b%20c");
        assert_eq!(items_path("café"), "/api/items?q=caf%C3%A9");
    }

    #[test]
    fn test_item_path_encodes_text_ids() {
        assert_eq!(item_path(&ItemId::Number(7)), "/api/items/7");
        assert_eq!(item_path(&ItemId::Text("a/b".to_string())), "/api/items/a%2Fb");
    }

    #[test]
    fn test_list_items_decodes_collection() {
        let transport = RecordingTransport::new();
        transport.push_json(200, r#"{"items":[{"id":1,"title":"A","done":false}]}"#);
        let api = TodoApi::new(transport.clone());

        let items = block_on(api.list_items("a")).unwrap();

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].title, "A");
        assert_eq!(transport.requests()[0], ApiRequest::new(Method::Get, "/api/items?q=a"));
    }

    #[test]
    fn test_create_item_posts_title() {
        let transport = RecordingTransport::new();
        transport.push_json(201, r#"{"id":1,"title":"Buy milk","done":false}"#);
        let api = TodoApi::new(transport.clone());

        let created = block_on(api.create_item("Buy milk")).unwrap().unwrap();

        assert_eq!(created.id, ItemId::Number(1));
        let request = &transport.requests()[0];
        assert_eq!(request.method, Method::Post);
        assert_eq!(request.path, "/api/items");
        assert_eq!(request.body.as_deref(), Some(r#"{"title":"Buy milk"}"#));
    }

    #[test]
    fn test_toggle_accepts_no_content() {
        let transport = RecordingTransport::new();
        transport.push_json(204, "");
        let api = TodoApi::new(transport.clone());

        assert_eq!(block_on(api.toggle_item(&ItemId::Number(2))).unwrap(), None);
        assert_eq!(transport.requests()[0].path, "/api/items/2/toggle");
    }

    #[test]
    fn test_delete_surfaces_detail() {
        let transport = RecordingTransport::new();
        transport.push_json(404, r#"{"detail":"not found"}"#);
        let api = TodoApi::new(transport.clone());

        let err = block_on(api.delete_item(&ItemId::Number(9))).unwrap_err();

        assert_eq!(err.to_string(), "not found");
        assert_eq!(transport.requests()[0].method, Method::Delete);
    }
}
