//! Referrer-Policy end to end.

use header_guard::security::{HeaderPolicy, ReferrerPolicy};
use header_guard::HeadersSpec;

mod common;

#[tokio::test]
async fn test_default_declaration_writes_no_referrer() {
    let server = common::start_with_headers(HeadersSpec::new().referrer_policy(|_| {})).await;

    let res = common::client().get(server.url("/")).send().await.unwrap();

    assert_eq!(res.status(), 200);
    assert_eq!(res.headers()["referrer-policy"], "no-referrer");
}

#[tokio::test]
async fn test_explicit_no_referrer() {
    let server = common::start_with_headers(
        HeadersSpec::new().referrer_policy(|r| r.policy = Some(ReferrerPolicy::NoReferrer)),
    )
    .await;

    let res = common::client().get(server.url("/")).send().await.unwrap();

    assert_eq!(res.headers()["referrer-policy"], "no-referrer");
}

#[tokio::test]
async fn test_custom_policy_same_origin() {
    let server = common::start_with_headers(
        HeadersSpec::new().referrer_policy(|r| r.policy = Some(ReferrerPolicy::SameOrigin)),
    )
    .await;

    let res = common::client().get(server.url("/")).send().await.unwrap();

    assert_eq!(res.headers()["referrer-policy"], "same-origin");
}

#[tokio::test]
async fn test_every_policy_yields_exactly_one_entry() {
    let client = common::client();
    for policy in ReferrerPolicy::ALL {
        let policy = *policy;
        let server =
            common::start_with_headers(HeadersSpec::new().referrer_policy(|r| r.policy = Some(policy)))
                .await;

        let res = client.get(server.url("/")).send().await.unwrap();
        let values: Vec<_> = res.headers().get_all("referrer-policy").iter().collect();
        assert_eq!(values, vec![policy.as_str()], "policy {policy}");
    }
}

#[tokio::test]
async fn test_undeclared_header_is_absent() {
    let server = common::start_with_headers(HeadersSpec::new()).await;

    let res = common::client().get(server.url("/")).send().await.unwrap();

    assert!(res.headers().get("referrer-policy").is_none());
}
