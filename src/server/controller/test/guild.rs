use super::*;

/// Tests the member listing returns the guild's users keyed by ID.
///
/// Expected: 200 with both members and total_members == 2
#[tokio::test]
async fn lists_guild_users() {
    let app = app(StubDirectory::ready().with_guild(
        987654321,
        "My Server",
        vec![
            MemberFactory::new(111111111, "alice").nick("Alice").build(),
            create_test_member(222222222, "bob"),
        ],
    ));

    let (status, body): (_, GuildUsersDto) = get_json(app, "/guild/987654321/users").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.guild_id, 987654321);
    assert_eq!(body.guild_name, "My Server");
    assert_eq!(body.total_members, 2);
    assert_eq!(body.users["111111111"].display_name, "Alice");
    assert_eq!(body.users["222222222"].id, 222222222);
    assert_eq!(
        body.users["222222222"].joined_at.as_deref(),
        Some("2023-01-15T10:30:00Z")
    );
}

/// Tests a non-numeric guild ID is a bad request.
///
/// Expected: 400 with kind "invalid_input"
#[tokio::test]
async fn rejects_invalid_guild_id() {
    let app = app(StubDirectory::ready());

    let (status, body): (_, ErrorDto) = get_json(app, "/guild/not-a-number/users").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body.kind.as_deref(), Some("invalid_input"));
}

/// Tests an unknown guild is not found.
///
/// Expected: 404 with kind "guild_not_found"
#[tokio::test]
async fn reports_unknown_guild() {
    let app = app(StubDirectory::ready());

    let (status, body): (_, ErrorDto) = get_json(app, "/guild/123/users").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body.kind.as_deref(), Some("guild_not_found"));
    assert_eq!(body.error, "Guild 123 not found");
}

/// Tests lookups before the session is ready are unavailable.
///
/// Expected: 503 with kind "client_not_ready"
#[tokio::test]
async fn reports_client_not_ready() {
    let app = app(StubDirectory::not_ready());

    let (status, body): (_, ErrorDto) = get_json(app, "/guild/123/users").await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body.kind.as_deref(), Some("client_not_ready"));
}

/// Tests upstream failures map to their status codes.
///
/// Expected: 403 for permission denial, 502 for rate limits and other failures
#[tokio::test]
async fn maps_upstream_failures() {
    let cases = [
        (StubFetch::Reject(403), StatusCode::FORBIDDEN, "permission_denied"),
        (StubFetch::Reject(429), StatusCode::BAD_GATEWAY, "rate_limited"),
        (StubFetch::Transport, StatusCode::BAD_GATEWAY, "upstream_unavailable"),
    ];

    for (fetch, expected_status, expected_kind) in cases {
        let app = app(StubDirectory::ready().with_failing_guild(42, "Guild", fetch));

        let (status, body): (_, ErrorDto) = get_json(app, "/guild/42/users").await;

        assert_eq!(status, expected_status);
        assert_eq!(body.kind.as_deref(), Some(expected_kind));
    }
}
