use jexla_contact::ContactSubmission;
use jexla_shared::Error;

mod helpers;

use helpers::{jane, setup_store};

#[tokio::test]
async fn create_returns_stored_message() -> anyhow::Result<()> {
    let store = setup_store().await?;

    let message = store.create(jane()).await?;

    assert_eq!(message.id.len(), 26);
    assert_eq!(message.name, "Jane Doe");
    assert_eq!(message.phone, "555-0100");
    assert!(message.timestamp.ends_with('Z'));

    let found = store.find(&message.id).await?;
    assert_eq!(found, Some(message));

    Ok(())
}

#[tokio::test]
async fn invalid_submission_is_rejected() -> anyhow::Result<()> {
    let store = setup_store().await?;

    let result = store
        .create(ContactSubmission::new("Jane Doe", "jane-at-example", "555-0100", "Hello"))
        .await;

    match result {
        Err(Error::Validate(errors)) => assert!(errors.field_errors().contains_key("email")),
        other => panic!("expected validation error, got {other:?}"),
    }
    assert!(store.list(10).await?.is_empty());

    Ok(())
}

#[tokio::test]
async fn list_is_newest_first_and_limited() -> anyhow::Result<()> {
    let store = setup_store().await?;

    let mut ids = vec![];
    for name in ["first", "second", "third"] {
        let mut input = jane();
        input.name = name.to_owned();
        ids.push(store.create(input).await?.id);
        tokio::time::sleep(std::time::Duration::from_millis(2)).await;
    }

    let messages = store.list(1000).await?;
    let names = messages.iter().map(|m| m.name.as_str()).collect::<Vec<_>>();
    assert_eq!(names, vec!["third", "second", "first"]);

    let limited = store.list(2).await?;
    assert_eq!(limited.len(), 2);
    assert_eq!(limited[0].id, ids[2]);

    Ok(())
}

#[tokio::test]
async fn list_caps_oversized_limit() -> anyhow::Result<()> {
    let store = setup_store().await?;
    store.create(jane()).await?;

    let messages = store.list(u64::MAX).await?;
    assert_eq!(messages.len(), 1);

    Ok(())
}

#[tokio::test]
async fn find_unknown_is_none() -> anyhow::Result<()> {
    let store = setup_store().await?;

    assert_eq!(store.find("01HZZZZZZZZZZZZZZZZZZZZZZZ").await?, None);

    Ok(())
}
