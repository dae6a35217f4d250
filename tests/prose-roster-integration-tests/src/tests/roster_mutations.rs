// prose-core-client/prose-roster-integration-tests
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use pretty_assertions::assert_eq;

use prose_roster::dtos::{
    ErrorSignal, OperationFailure, RosterError, RosterOperation, SessionError, SubscriptionType,
};
use prose_roster::test::{InMemorySession, SessionRequest};
use prose_roster::{account_id, address};

use crate::tests::async_test;
use crate::tests::helpers::TestClient;

fn bob_session() -> InMemorySession {
    InMemorySession::loaded().with_entry(
        address!("bob@prose.org"),
        Some("Robert"),
        SubscriptionType::Both,
        &[],
    )
}

#[async_test]
async fn test_set_name_trims_and_resyncs() -> Result<()> {
    let me = account_id!("me@prose.org");
    let client = TestClient::new(&[me.clone()]);
    let session = client.connect(&me, bob_session());

    client
        .client
        .roster
        .set_name(&me, &address!("bob@prose.org"), "  Bob  ")
        .await?;

    assert_eq!(
        session.requests(),
        vec![SessionRequest::SetEntryName {
            address: address!("bob@prose.org"),
            name: "Bob".to_string(),
        }]
    );
    assert_eq!(
        client
            .client
            .roster
            .get_display_name(&me, &address!("bob@prose.org")),
        "Bob"
    );

    Ok(())
}

#[async_test]
async fn test_creates_contact() -> Result<()> {
    let me = account_id!("me@prose.org");
    let client = TestClient::new(&[me.clone()]);
    client.connect(&me, InMemorySession::loaded());

    client
        .client
        .roster
        .create_contact(
            &me,
            &address!("carol@prose.org"),
            "Carol",
            vec!["Friends".to_string()],
        )
        .await?;

    let entry = client
        .client
        .roster
        .get_contact(&me, &address!("carol@prose.org"))
        .expect("Carol should be in the roster");
    assert_eq!(entry.name, "Carol");
    assert!(!entry.subscribed);
    assert_eq!(
        client
            .client
            .roster
            .get_groups_for_contact(&me, &address!("carol@prose.org")),
        vec!["Friends".to_string()]
    );

    Ok(())
}

#[async_test]
async fn test_mutating_unknown_contact_is_a_no_op() -> Result<()> {
    let me = account_id!("me@prose.org");
    let client = TestClient::new(&[me.clone()]);
    let session = client.connect(&me, InMemorySession::loaded());

    let roster = &client.client.roster;
    roster.remove_contact(&me, &address!("ghost@prose.org")).await?;
    roster
        .set_name(&me, &address!("ghost@prose.org"), "Ghost")
        .await?;
    roster
        .set_groups(&me, &address!("ghost@prose.org"), vec![])
        .await?;
    roster
        .remove_contact(&account_id!("unknown@prose.org"), &address!("bob@prose.org"))
        .await?;

    assert!(session
        .requests()
        .iter()
        .all(|request| *request == SessionRequest::Reload));
    client.client.flush_events().await;
    assert!(client.listener.failures().is_empty());

    Ok(())
}

#[async_test]
async fn test_renaming_empty_group_files_unfiled_contacts() -> Result<()> {
    let me = account_id!("me@prose.org");
    let client = TestClient::new(&[me.clone()]);
    client.connect(
        &me,
        InMemorySession::loaded()
            .with_entry(
                address!("a@prose.org"),
                None,
                SubscriptionType::Both,
                &[],
            )
            .with_entry(
                address!("b@prose.org"),
                None,
                SubscriptionType::Both,
                &["Work"],
            ),
    );

    client.client.roster.rename_group(&me, "", "Friends").await?;

    let roster = &client.client.roster;
    assert_eq!(
        roster.get_groups_for_contact(&me, &address!("a@prose.org")),
        vec!["Friends".to_string()]
    );
    assert_eq!(
        roster.get_groups_for_contact(&me, &address!("b@prose.org")),
        vec!["Work".to_string()]
    );

    Ok(())
}

#[async_test]
async fn test_renames_group() -> Result<()> {
    let me = account_id!("me@prose.org");
    let client = TestClient::new(&[me.clone()]);
    client.connect(
        &me,
        InMemorySession::loaded().with_entry(
            address!("a@prose.org"),
            None,
            SubscriptionType::Both,
            &["Friends"],
        ),
    );

    client
        .client
        .roster
        .rename_group(&me, "Friends", "Buddies")
        .await?;

    assert_eq!(
        client.client.roster.get_groups_for_account(&me),
        vec!["Buddies".to_string()]
    );

    Ok(())
}

#[async_test]
async fn test_remove_group_attempts_all_members() -> Result<()> {
    let me = account_id!("me@prose.org");
    let client = TestClient::new(&[me.clone()]);
    let session = client.connect(
        &me,
        InMemorySession::loaded()
            .with_entry(
                address!("a@prose.org"),
                None,
                SubscriptionType::Both,
                &["Friends"],
            )
            .with_entry(
                address!("b@prose.org"),
                None,
                SubscriptionType::Both,
                &["Friends"],
            )
            .with_entry(
                address!("c@prose.org"),
                None,
                SubscriptionType::Both,
                &["Friends"],
            ),
    );
    session.fail_requests_for(address!("b@prose.org"), SessionError::NoResponse);

    let result = client.client.roster.remove_group(&me, "Friends").await;
    assert_eq!(
        result,
        Err(RosterError::PartialFailure {
            failed: 1,
            attempted: 3
        })
    );

    client.client.flush_events().await;
    assert_eq!(
        client.listener.failures(),
        vec![OperationFailure {
            account: me.clone(),
            operation: RosterOperation::RemoveGroup,
            signal: ErrorSignal::ConnectionFailed,
        }]
    );

    // The removals the server applied are visible without another resync.
    let roster = &client.client.roster;
    assert!(roster
        .get_groups_for_contact(&me, &address!("a@prose.org"))
        .is_empty());
    assert_eq!(
        roster.get_groups_for_contact(&me, &address!("b@prose.org")),
        vec!["Friends".to_string()]
    );
    assert!(roster
        .get_groups_for_contact(&me, &address!("c@prose.org"))
        .is_empty());

    Ok(())
}

#[async_test]
async fn test_signals_failures_per_operation() -> Result<()> {
    let me = account_id!("me@prose.org");
    let client = TestClient::new(&[me.clone()]);
    let session = client.connect(&me, bob_session());
    session.fail_all_requests(SessionError::NotLoggedIn);

    let roster = &client.client.roster;
    assert_eq!(
        roster
            .create_contact(&me, &address!("carol@prose.org"), "Carol", vec![])
            .await,
        Err(RosterError::NotAuthenticated)
    );
    assert_eq!(
        roster.remove_contact(&me, &address!("bob@prose.org")).await,
        Err(RosterError::NotAuthenticated)
    );
    assert_eq!(
        roster
            .set_groups(&me, &address!("bob@prose.org"), vec!["Work".to_string()])
            .await,
        Err(RosterError::NotAuthenticated)
    );

    client.client.flush_events().await;
    assert_eq!(
        client
            .listener
            .failures()
            .into_iter()
            .map(|failure| (failure.operation, failure.signal))
            .collect::<Vec<_>>(),
        vec![
            (RosterOperation::CreateContact, ErrorSignal::NotAuthenticated),
            (RosterOperation::RemoveContact, ErrorSignal::NotConnected),
            (RosterOperation::SetGroups, ErrorSignal::NetworkError),
        ]
    );

    Ok(())
}

#[async_test]
async fn test_interruptions_are_not_signalled() -> Result<()> {
    let me = account_id!("me@prose.org");
    let client = TestClient::new(&[me.clone()]);
    let session = client.connect(&me, bob_session());
    session.fail_all_requests(SessionError::Interrupted);

    let result = client
        .client
        .roster
        .set_name(&me, &address!("bob@prose.org"), "Bob")
        .await;

    assert_eq!(result, Err(RosterError::LocalInterruption));
    client.client.flush_events().await;
    assert!(client.listener.failures().is_empty());

    Ok(())
}

#[async_test]
async fn test_group_changes_apply_to_all_accounts() -> Result<()> {
    let me = account_id!("me@prose.org");
    let work = account_id!("me@work.org");
    let offline = account_id!("me@offline.org");

    let client = TestClient::new(&[me.clone(), work.clone(), offline.clone()]);
    for account in [&me, &work] {
        client.connect(
            account,
            InMemorySession::loaded().with_entry(
                address!("alice@prose.org"),
                None,
                SubscriptionType::Both,
                &["Friends"],
            ),
        );
    }

    client
        .client
        .roster
        .rename_group_in_all_accounts("Friends", "Buddies")
        .await;

    let roster = &client.client.roster;
    assert_eq!(roster.get_groups_for_account(&me), vec!["Buddies".to_string()]);
    assert_eq!(
        roster.get_groups_for_account(&work),
        vec!["Buddies".to_string()]
    );

    client
        .client
        .roster
        .remove_group_from_all_accounts("Buddies")
        .await;

    let roster = &client.client.roster;
    assert!(roster.get_groups_for_account(&me).is_empty());
    assert!(roster.get_groups_for_account(&work).is_empty());
    assert_eq!(roster.get_all_contacts().await.len(), 2);

    Ok(())
}
