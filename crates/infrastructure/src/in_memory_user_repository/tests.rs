use chrono::Utc;
use presyohan_application::UserRepository;
use presyohan_domain::{EmailAddress, User, UserId};

use super::InMemoryUserRepository;

fn user(email: &str) -> User {
    let email = EmailAddress::new(email).unwrap_or_else(|_| panic!("invalid test email"));
    User::new(UserId::new(), email, Utc::now())
}

#[tokio::test]
async fn empty_repository_lists_nothing() {
    let repository = InMemoryUserRepository::new();

    assert!(matches!(repository.find_all().await, Ok(ref users) if users.is_empty()));
    assert!(matches!(repository.find_by_email("a@x.com").await, Ok(None)));
}

#[tokio::test]
async fn find_all_is_sorted_by_email() {
    let repository =
        InMemoryUserRepository::with_users(vec![user("b@x.com"), user("c@x.com"), user("a@x.com")]);

    let emails: Vec<String> = repository
        .find_all()
        .await
        .unwrap_or_else(|error| panic!("find_all failed: {error}"))
        .into_iter()
        .map(|user| user.email)
        .collect();

    assert_eq!(emails, vec!["a@x.com", "b@x.com", "c@x.com"]);
}

#[tokio::test]
async fn find_by_email_is_exact() {
    let first = user("a@x.com");
    let repository = InMemoryUserRepository::with_users(vec![first.clone(), user("b@x.com")]);

    assert_eq!(
        repository
            .find_by_email("a@x.com")
            .await
            .unwrap_or_else(|error| panic!("find_by_email failed: {error}")),
        Some(first)
    );
    assert!(matches!(repository.find_by_email("A@X.COM").await, Ok(None)));
    assert!(matches!(repository.find_by_email("c@x.com").await, Ok(None)));
}

#[tokio::test]
async fn duplicate_email_keeps_last_seeded_user() {
    let earlier = user("a@x.com");
    let later = user("a@x.com");
    let repository = InMemoryUserRepository::with_users(vec![earlier, later.clone()]);

    assert!(matches!(repository.find_all().await, Ok(ref users) if users.len() == 1));
    assert!(matches!(repository.find_by_email("a@x.com").await, Ok(Some(ref found)) if found.id == later.id));
}
