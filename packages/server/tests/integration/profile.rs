use crate::common::{TestApp, routes};

#[tokio::test]
async fn profile_is_served_verbatim() {
    let app = TestApp::spawn().await;

    let res = app.get(routes::PROFILE).await;

    assert_eq!(res.status, 200);
    assert_eq!(res.body["name"], "Test Author");
    assert_eq!(res.body["email"], "author@example.com");
    assert_eq!(res.body["skills"][0]["name"], "Programming Languages");
    assert_eq!(res.body["skills"][0]["skills"][0]["name"], "Rust");
    assert_eq!(res.body["education"]["degree"], "BSc in Computer Science");
    assert_eq!(res.body["social_links"][0]["name"], "github");
}
