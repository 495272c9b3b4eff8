//! Wire types for the Bot API getUpdates response

use serde::Deserialize;

#[allow(dead_code)]
#[derive(Debug, Deserialize)]
pub struct UpdateResponse {
    pub ok: bool,
    pub result: Vec<Update>,
}

#[derive(Debug, Deserialize)]
pub struct Update {
    // present on every update, unused: we never advance the offset
    #[allow(dead_code)]
    pub update_id: u64,
    pub message: Option<Message>,
}

#[derive(Debug, Deserialize)]
pub struct Message {
    pub chat: Chat,
    pub from: Option<User>,
}

#[derive(Debug, Deserialize)]
pub struct Chat {
    pub id: i64,
}

#[derive(Debug, Deserialize)]
pub struct User {
    pub first_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_empty_result() {
        let resp: UpdateResponse = serde_json::from_str(r#"{"ok":true,"result":[]}"#).unwrap();
        assert!(resp.ok);
        assert!(resp.result.is_empty());
    }

    #[test]
    fn decodes_update_without_message() {
        let resp: UpdateResponse = serde_json::from_str(
            r#"{"ok":true,"result":[{"update_id":7,"edited_message":{"message_id":3}}]}"#,
        )
        .unwrap();
        assert_eq!(resp.result.len(), 1);
        assert!(resp.result[0].message.is_none());
    }

    #[test]
    fn decodes_message_without_sender() {
        let resp: UpdateResponse = serde_json::from_str(
            r#"{"ok":true,"result":[{"update_id":8,"message":{"message_id":4,"date":0,"chat":{"id":42,"type":"private"}}}]}"#,
        )
        .unwrap();
        let msg = resp.result[0].message.as_ref().unwrap();
        assert_eq!(msg.chat.id, 42);
        assert!(msg.from.is_none());
    }

    #[test]
    fn decodes_full_message() {
        let resp: UpdateResponse = serde_json::from_str(
            r#"{"ok":true,"result":[{"update_id":9,"message":{"message_id":5,"date":0,"chat":{"id":7741980082,"type":"private"},"from":{"id":1,"is_bot":false,"first_name":"Ada"},"text":"/start"}}]}"#,
        )
        .unwrap();
        let msg = resp.result[0].message.as_ref().unwrap();
        assert_eq!(msg.chat.id, 7741980082);
        assert_eq!(msg.from.as_ref().unwrap().first_name.as_deref(), Some("Ada"));
    }
}
