//! Page types for the paginated message list.

use serde::Serialize;

use crate::message::Message;

/// One page of messages plus pagination metadata.
///
/// Wire shape: `{page, limit, total, totalPages, messages}` with messages
/// ordered newest first.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessagePage {
    pub page: u64,
    pub limit: u64,
    /// Total messages in the collection, not just this page.
    pub total: u64,
    /// `ceil(total / limit)`; 0 when the collection is empty.
    pub total_pages: u64,
    pub messages: Vec<Message>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_wire_shape() {
        let page = MessagePage {
            page: 2,
            limit: 10,
            total: 15,
            total_pages: 2,
            messages: vec![],
        };

        let value = serde_json::to_value(&page).unwrap();
        assert_eq!(value["page"], 2);
        assert_eq!(value["totalPages"], 2);
        assert!(value.get("total_pages").is_none());
        assert!(value["messages"].as_array().unwrap().is_empty());
    }
}
