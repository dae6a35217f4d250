// prose-core-client/prose-roster-integration-tests
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use pretty_assertions::assert_eq;

use prose_roster::dtos::{
    AccountId, Availability, ContactAddress, ContactId, GroupReference, Presence,
    SubscriptionType,
};
use prose_roster::test::{InMemorySession, SessionRequest};
use prose_roster::{account_id, address, AppConfig};

use crate::tests::async_test;
use crate::tests::helpers::TestClient;

#[async_test]
async fn test_builds_contact_list_from_session() -> Result<()> {
    let client = TestClient::new(&[account_id!("me@prose.org")]);
    client.connect(
        &account_id!("me@prose.org"),
        InMemorySession::loaded().with_entry(
            address!("alice@prose.org"),
            Some("Alice"),
            SubscriptionType::Both,
            &["Friends"],
        ),
    );

    let changed_ids = client.client.roster.resync().await?;
    let alice = ContactId::new(account_id!("me@prose.org"), address!("alice@prose.org"));
    assert_eq!(changed_ids, vec![alice.clone()]);

    let contacts = client.client.roster.get_all_contacts().await;
    assert_eq!(contacts.len(), 1);

    let entry = contacts
        .get(&account_id!("me@prose.org"), &address!("alice@prose.org"))
        .expect("Alice should be in the roster");
    assert_eq!(entry.name, "Alice");
    assert!(entry.subscribed);
    assert!(entry.connected);
    assert!(entry.enabled);
    assert_eq!(
        entry.group_references(),
        vec![GroupReference {
            account: account_id!("me@prose.org"),
            name: "Friends".to_string(),
        }]
    );

    client.client.flush_events().await;
    assert_eq!(client.listener.changes(), vec![vec![alice]]);

    Ok(())
}

#[async_test]
async fn test_resync_without_changes_is_silent() -> Result<()> {
    let client = TestClient::new(&[account_id!("me@prose.org")]);
    client.connect(
        &account_id!("me@prose.org"),
        InMemorySession::loaded().with_entry(
            address!("alice@prose.org"),
            None,
            SubscriptionType::From,
            &[],
        ),
    );

    client.client.roster.resync().await?;
    let changed_ids = client.client.roster.resync().await?;

    assert!(changed_ids.is_empty());
    client.client.flush_events().await;
    assert_eq!(client.listener.changes().len(), 1);

    let entry = client
        .client
        .roster
        .get_contact(&account_id!("me@prose.org"), &address!("alice@prose.org"))
        .expect("Alice should be in the roster");
    assert_eq!(entry.name, "alice@prose.org");
    assert!(!entry.subscribed);

    Ok(())
}

#[async_test]
async fn test_loads_rosters_lazily() -> Result<()> {
    let client = TestClient::new(&[account_id!("me@prose.org")]);
    let session = client.connect(
        &account_id!("me@prose.org"),
        InMemorySession::default().with_entry(
            address!("alice@prose.org"),
            Some("Alice"),
            SubscriptionType::To,
            &[],
        ),
    );

    assert!(!client
        .client
        .roster
        .is_roster_loaded(&account_id!("me@prose.org")));

    let contacts = client.client.roster.get_all_contacts().await;

    assert_eq!(contacts.len(), 1);
    assert_eq!(session.requests(), vec![SessionRequest::Reload]);
    assert!(client
        .client
        .roster
        .is_roster_loaded(&account_id!("me@prose.org")));

    // The roster is loaded now, reading it again does not hit the session.
    client.client.roster.get_all_contacts().await;
    assert_eq!(session.requests().len(), 1);

    Ok(())
}

#[async_test]
async fn test_keeps_accounts_apart() -> Result<()> {
    let me = account_id!("me@prose.org");
    let work = account_id!("me@work.org");

    let client = TestClient::new(&[me.clone(), work.clone()]);
    client.connect(
        &me,
        InMemorySession::loaded()
            .with_entry(
                address!("alice@prose.org"),
                Some("Alice"),
                SubscriptionType::Both,
                &["Friends"],
            )
            .with_entry(
                address!("bob@prose.org"),
                Some("Bob"),
                SubscriptionType::Both,
                &["Family"],
            ),
    );
    client.connect(
        &work,
        InMemorySession::loaded().with_entry(
            address!("alice@prose.org"),
            Some("Alice (Work)"),
            SubscriptionType::Both,
            &["Colleagues"],
        ),
    );

    client.client.roster.resync().await?;
    let roster = &client.client.roster;

    assert_eq!(roster.get_all_contacts().await.len(), 3);
    assert_eq!(
        roster.get_groups_for_account(&me),
        vec!["Family".to_string(), "Friends".to_string()]
    );
    assert_eq!(
        roster.get_groups_for_account(&work),
        vec!["Colleagues".to_string()]
    );
    assert_eq!(
        roster.get_groups_for_contact(&work, &address!("alice@prose.org")),
        vec!["Colleagues".to_string()]
    );
    assert_eq!(
        roster.get_display_name(&work, &address!("alice@prose.org")),
        "Alice (Work)"
    );
    assert_eq!(
        roster.get_display_name(&work, &address!("bob@prose.org")),
        "bob@prose.org"
    );

    Ok(())
}

#[async_test]
async fn test_drops_contacts_of_disconnected_accounts() -> Result<()> {
    let me = account_id!("me@prose.org");
    let client = TestClient::new(&[me.clone()]);
    client.connect(
        &me,
        InMemorySession::loaded().with_entry(
            address!("alice@prose.org"),
            None,
            SubscriptionType::Both,
            &[],
        ),
    );

    client.client.roster.resync().await?;
    client.sessions.remove(&me);
    let changed_ids = client.client.roster.resync().await?;

    assert_eq!(
        changed_ids,
        vec![ContactId::new(me.clone(), address!("alice@prose.org"))]
    );
    assert!(client.client.roster.get_all_contacts().await.is_empty());

    Ok(())
}

#[async_test]
async fn test_retains_contacts_of_disconnected_accounts() -> Result<()> {
    let me = account_id!("me@prose.org");
    let client = TestClient::with_config(
        &[me.clone()],
        AppConfig {
            retain_offline_contacts: true,
            ..Default::default()
        },
    );
    client.connect(
        &me,
        InMemorySession::loaded().with_entry(
            address!("alice@prose.org"),
            None,
            SubscriptionType::Both,
            &[],
        ),
    );

    client.client.roster.resync().await?;
    client.sessions.remove(&me);
    client.client.roster.resync().await?;

    let entry = client
        .client
        .roster
        .get_contact(&me, &address!("alice@prose.org"))
        .expect("Alice should be retained");
    assert!(!entry.connected);

    Ok(())
}

#[async_test]
async fn test_returns_presences_of_live_sessions() -> Result<()> {
    let me: AccountId = account_id!("me@prose.org");
    let alice: ContactAddress = address!("alice@prose.org");

    let client = TestClient::new(&[me.clone()]);
    client.connect(
        &me,
        InMemorySession::loaded()
            .with_presence(
                alice.clone(),
                Presence {
                    resource: Some("phone".to_string()),
                    availability: Availability::Away,
                    priority: 0,
                    status: None,
                },
            )
            .with_presence(
                alice.clone(),
                Presence {
                    resource: Some("desktop".to_string()),
                    availability: Availability::Available,
                    priority: 5,
                    status: Some("Working".to_string()),
                },
            ),
    );

    let roster = &client.client.roster;
    assert_eq!(
        roster
            .get_presence(&me, &alice)
            .map(|presence| presence.availability),
        Some(Availability::Available)
    );
    assert_eq!(roster.get_presences(&me, &alice).len(), 2);
    assert_eq!(
        roster.get_presence(&account_id!("other@prose.org"), &alice),
        None
    );

    Ok(())
}
