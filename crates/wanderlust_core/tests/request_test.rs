use wanderlust_core::{GenerateRequest, Message, Role};

#[test]
fn builder_defaults_everything_optional() {
    let request = GenerateRequest::builder().build().unwrap();
    assert!(request.messages.is_empty());
    assert_eq!(request.max_tokens, None);
    assert_eq!(request.temperature, None);
    assert_eq!(request, GenerateRequest::default());
}

#[test]
fn builder_keeps_message_order() {
    let request = GenerateRequest::builder()
        .messages(vec![Message::system("You are a guide"), Message::user("Plan my day")])
        .model(Some("mistral-small-latest".to_string()))
        .build()
        .unwrap();

    assert_eq!(request.messages[0].role, Role::System);
    assert_eq!(request.messages[1].role, Role::User);
    assert_eq!(request.model.as_deref(), Some("mistral-small-latest"));
}

#[test]
fn messages_serialize_in_chat_shape() {
    let json = serde_json::to_value(Message::user("hi")).unwrap();
    assert_eq!(json["role"], "user");
    assert_eq!(json["content"], "hi");
}
