mod common;

use std::sync::Arc;

use recipebox_core::error::ErrorKind;
use recipebox_core::types::{InviteLinkId, RecipeId};
use recipebox_service::{AcceptOutcome, RequestContext};

use common::{Harness, uid};

#[tokio::test]
async fn create_or_get_is_idempotent_per_recipe() {
    let h = Harness::new();
    let alice = h.user("alice").await;
    let recipe = h.recipe(&alice, "Phở bò").await;

    let (first, created) = h.registry.create_or_get(&alice, recipe.id).await.unwrap();
    let (second, created_again) = h.registry.create_or_get(&alice, recipe.id).await.unwrap();

    assert!(created);
    assert!(!created_again);
    assert_eq!(first.id, second.id);
    assert_eq!(first.created_by, uid("alice"));
    assert!(first.invited_users.is_empty());
}

#[tokio::test]
async fn only_the_owner_of_an_existing_recipe_can_create_a_link() {
    let h = Harness::new();
    let alice = h.user("alice").await;
    let bob = h.user("bob").await;
    let recipe = h.recipe(&alice, "Bún chả").await;

    let err = h.registry.create_or_get(&bob, recipe.id).await.unwrap_err();
    assert!(err.is(ErrorKind::Forbidden));

    let err = h
        .registry
        .create_or_get(&alice, RecipeId::new())
        .await
        .unwrap_err();
    assert!(err.is(ErrorKind::NotFound));
}

#[tokio::test]
async fn accepting_twice_keeps_one_roster_entry() {
    let h = Harness::new();
    let alice = h.user("alice").await;
    let bob = h.user("bob").await;
    let recipe = h.recipe(&alice, "Gỏi cuốn").await;
    let (link, _) = h.registry.create_or_get(&alice, recipe.id).await.unwrap();

    assert_eq!(
        h.registry.accept(&bob, link.id).await.unwrap(),
        AcceptOutcome::Joined
    );
    assert_eq!(
        h.registry.accept(&bob, link.id).await.unwrap(),
        AcceptOutcome::AlreadyMember
    );

    let stored = h.registry.get(&alice, link.id).await.unwrap();
    assert_eq!(stored.invited_users.len(), 1);
    let entry = &stored.invited_users[0];
    assert_eq!(entry.user_id, uid("bob"));
    assert!(entry.invited);
    assert!(!entry.access_revoked);
}

#[tokio::test]
async fn owner_accepting_own_link_is_a_no_op() {
    let h = Harness::new();
    let alice = h.user("alice").await;
    let recipe = h.recipe(&alice, "Chè").await;
    let (link, _) = h.registry.create_or_get(&alice, recipe.id).await.unwrap();

    assert_eq!(
        h.registry.accept(&alice, link.id).await.unwrap(),
        AcceptOutcome::Owner
    );
    let stored = h.registry.get(&alice, link.id).await.unwrap();
    assert!(stored.invited_users.is_empty());
}

#[tokio::test]
async fn accepting_a_missing_link_is_not_found() {
    let h = Harness::new();
    let bob = h.user("bob").await;

    let err = h
        .registry
        .accept(&bob, InviteLinkId::new())
        .await
        .unwrap_err();
    assert!(err.is(ErrorKind::NotFound));
}

#[tokio::test]
async fn revoke_then_restore_round_trips_the_entry() {
    let h = Harness::new();
    let alice = h.user("alice").await;
    let bob = h.user("bob").await;
    let recipe = h.recipe(&alice, "Bánh xèo").await;
    let (link, _) = h.registry.create_or_get(&alice, recipe.id).await.unwrap();
    h.registry.accept(&bob, link.id).await.unwrap();
    let before = h.registry.get(&alice, link.id).await.unwrap().invited_users;

    h.registry.revoke(&alice, link.id, &uid("bob")).await.unwrap();
    let revoked = h.registry.get(&alice, link.id).await.unwrap().invited_users;
    assert!(revoked[0].access_revoked);
    assert_eq!(revoked[0].user_id, before[0].user_id);

    h.registry.restore(&alice, link.id, &uid("bob")).await.unwrap();
    let after = h.registry.get(&alice, link.id).await.unwrap().invited_users;
    assert_eq!(after, before);
}

#[tokio::test]
async fn revoked_users_cannot_re_accept() {
    let h = Harness::new();
    let alice = h.user("alice").await;
    let bob = h.user("bob").await;
    let recipe = h.recipe(&alice, "Cơm tấm").await;
    let (link, _) = h.registry.create_or_get(&alice, recipe.id).await.unwrap();
    h.registry.accept(&bob, link.id).await.unwrap();
    h.registry.revoke(&alice, link.id, &uid("bob")).await.unwrap();

    let err = h.registry.accept(&bob, link.id).await.unwrap_err();
    assert!(err.is(ErrorKind::AccessRevoked));

    let roster = h.registry.get(&alice, link.id).await.unwrap().invited_users;
    assert_eq!(roster.len(), 1);
    assert!(roster[0].access_revoked);
}

#[tokio::test]
async fn only_the_owner_can_revoke_or_restore() {
    let h = Harness::new();
    let alice = h.user("alice").await;
    let bob = h.user("bob").await;
    let carol = h.user("carol").await;
    let recipe = h.recipe(&alice, "Canh chua").await;
    let (link, _) = h.registry.create_or_get(&alice, recipe.id).await.unwrap();
    h.registry.accept(&bob, link.id).await.unwrap();
    h.registry.accept(&carol, link.id).await.unwrap();

    let err = h
        .registry
        .revoke(&carol, link.id, &uid("bob"))
        .await
        .unwrap_err();
    assert!(err.is(ErrorKind::Forbidden));
    let err = h
        .registry
        .restore(&bob, link.id, &uid("bob"))
        .await
        .unwrap_err();
    assert!(err.is(ErrorKind::Forbidden));
}

#[tokio::test]
async fn revoking_unknown_targets_is_not_found() {
    let h = Harness::new();
    let alice = h.user("alice").await;
    let recipe = h.recipe(&alice, "Xôi").await;
    let (link, _) = h.registry.create_or_get(&alice, recipe.id).await.unwrap();

    let err = h
        .registry
        .revoke(&alice, link.id, &uid("nobody"))
        .await
        .unwrap_err();
    assert!(err.is(ErrorKind::NotFound));

    let err = h
        .registry
        .restore(&alice, InviteLinkId::new(), &uid("nobody"))
        .await
        .unwrap_err();
    assert!(err.is(ErrorKind::NotFound));

    let err = h.registry.revoke(&alice, link.id, &uid("")).await.unwrap_err();
    assert!(err.is(ErrorKind::Validation));
}

#[tokio::test]
async fn shared_links_list_active_entries_with_creator_profile() {
    let h = Harness::new();
    let alice = h.user("alice").await;
    let bob = h.user("bob").await;
    let first = h.recipe(&alice, "Nem rán").await;
    let second = h.recipe(&alice, "Bò kho").await;
    let (kept, _) = h.registry.create_or_get(&alice, first.id).await.unwrap();
    let (dropped, _) = h.registry.create_or_get(&alice, second.id).await.unwrap();
    h.registry.accept(&bob, kept.id).await.unwrap();
    h.registry.accept(&bob, dropped.id).await.unwrap();
    h.registry.revoke(&alice, dropped.id, &uid("bob")).await.unwrap();

    let shared = h.registry.list_shared_with(&bob, &uid("bob")).await.unwrap();
    assert_eq!(shared.len(), 1);
    assert_eq!(shared[0].link.id, kept.id);
    assert_eq!(shared[0].creator.first_name, "ALICE");
    assert_eq!(shared[0].creator.email, "alice@example.com");
}

#[tokio::test]
async fn shared_links_require_matching_caller_and_resolvable_creators() {
    let h = Harness::new();
    let bob = h.user("bob").await;
    // ghost owns a recipe but never stored a profile
    let ghost = RequestContext::new("ghost");
    let recipe = h.recipe(&ghost, "Mì Quảng").await;
    let (link, _) = h.registry.create_or_get(&ghost, recipe.id).await.unwrap();
    h.registry.accept(&bob, link.id).await.unwrap();

    let err = h
        .registry
        .list_shared_with(&bob, &uid("alice"))
        .await
        .unwrap_err();
    assert!(err.is(ErrorKind::Forbidden));

    let err = h
        .registry
        .list_shared_with(&bob, &uid(""))
        .await
        .unwrap_err();
    assert!(err.is(ErrorKind::Validation));

    let err = h
        .registry
        .list_shared_with(&bob, &uid("bob"))
        .await
        .unwrap_err();
    assert!(err.is(ErrorKind::DataIntegrity));
}

#[tokio::test]
async fn non_owners_only_see_their_own_roster_entry() {
    let h = Harness::new();
    let alice = h.user("alice").await;
    let bob = h.user("bob").await;
    let carol = h.user("carol").await;
    let recipe = h.recipe(&alice, "Hủ tiếu").await;
    let (link, _) = h.registry.create_or_get(&alice, recipe.id).await.unwrap();
    h.registry.accept(&bob, link.id).await.unwrap();
    h.registry.accept(&carol, link.id).await.unwrap();

    let seen_by_bob = h.registry.get(&bob, link.id).await.unwrap();
    assert_eq!(seen_by_bob.invited_users.len(), 1);
    assert_eq!(seen_by_bob.invited_users[0].user_id, uid("bob"));

    let seen_by_alice = h.registry.get(&alice, link.id).await.unwrap();
    assert_eq!(seen_by_alice.invited_users.len(), 2);
    assert_eq!(h.registry.list_mine(&alice).await.unwrap().len(), 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_creators_converge_on_one_link() {
    let h = Harness::new();
    let alice = h.user("alice").await;
    let recipe = h.recipe(&alice, "Lẩu").await;

    let tasks: Vec<_> = (0..16)
        .map(|_| {
            let registry = Arc::clone(&h.registry);
            let ctx = alice.clone();
            tokio::spawn(async move { registry.create_or_get(&ctx, recipe.id).await.unwrap() })
        })
        .collect();
    let results = futures::future::join_all(tasks).await;

    let ids: Vec<_> = results.iter().map(|r| r.as_ref().unwrap().0.id).collect();
    assert!(ids.iter().all(|id| *id == ids[0]));
    let created = results.iter().filter(|r| r.as_ref().unwrap().1).count();
    assert_eq!(created, 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_accepts_are_not_lost() {
    let h = Harness::new();
    let alice = h.user("alice").await;
    let recipe = h.recipe(&alice, "Bánh cuốn").await;
    let (link, _) = h.registry.create_or_get(&alice, recipe.id).await.unwrap();

    let tasks: Vec<_> = (0..32)
        .map(|i| {
            let registry = Arc::clone(&h.registry);
            tokio::spawn(async move {
                let ctx = RequestContext::new(format!("guest-{i}"));
                registry.accept(&ctx, link.id).await.unwrap()
            })
        })
        .collect();
    for result in futures::future::join_all(tasks).await {
        assert_eq!(result.unwrap(), AcceptOutcome::Joined);
    }

    let roster = h.registry.get(&alice, link.id).await.unwrap().invited_users;
    assert_eq!(roster.len(), 32);
}
