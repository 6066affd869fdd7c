//! Tests for the users API.

use footbase_test_utils::prelude::*;
use serde_json::json;

use crate::{util::session_with, TestSetupExt};

/// Tests reading the logged-in user's profile.
///
/// Expected: Ok(Some) with the display name and counters decoded
#[tokio::test]
async fn reads_own_profile() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_endpoint(
            MockEndpoint::new(
                "GET",
                "/users/me",
                200,
                MockBody::Json(json!({
                    "displayName": "Ayşe",
                    "email": TEST_EMAIL,
                    "followersCount": 12,
                })),
            )
            .with_bearer(Some(TEST_TOKEN)),
        )
        .build()
        .await?;
    let client = test.client_with_session(session_with(TEST_TOKEN, Some("USER")));

    let result = client.users().me().await;

    let profile = result.unwrap().unwrap();
    assert_eq!(profile.display_name.as_deref(), Some("Ayşe"));
    assert_eq!(profile.followers_count, 12);
    assert_eq!(profile.following_count, 0);
    test.assert_mocks().await;

    Ok(())
}

/// Tests a profile endpoint answering without content.
///
/// Expected: Ok(None)
#[tokio::test]
async fn own_profile_no_content() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_empty_endpoint("GET", "/users/me", 204)
        .build()
        .await?;
    let client = test.client_with_session(session_with(TEST_TOKEN, Some("USER")));

    let result = client.users().me().await;

    assert!(result.unwrap().is_none());
    test.assert_mocks().await;

    Ok(())
}

/// Tests following and unfollowing a user.
///
/// Expected: POST then DELETE on `/users/21/follow`
#[tokio::test]
async fn follows_and_unfollows() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_json_endpoint("POST", "/users/21/follow", 200, json!({ "takipEdiliyor": true }))
        .with_empty_endpoint("DELETE", "/users/21/follow", 204)
        .build()
        .await?;
    let client = test.client_with_session(session_with(TEST_TOKEN, Some("USER")));

    let followed = client.users().follow(21).await;
    let unfollowed = client.users().unfollow(21).await;

    assert_eq!(followed.unwrap()["takipEdiliyor"], true);
    assert!(unfollowed.unwrap().is_null());
    test.assert_mocks().await;

    Ok(())
}
