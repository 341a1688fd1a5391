use placeholder::*;
use std::collections::HashMap;

fn setup() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn env<'a, I>(pairs: I) -> EnvSource
    where I: IntoIterator<Item = (&'a str, &'a str)>
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect::<HashMap<_, _>>()
        .into()
}

fn full_env() -> EnvSource {
    env([
        ("FIREBASE_API_KEY", "AIzaSyExample"),
        ("FIREBASE_AUTH_DOMAIN", "demo.firebaseapp.com"),
        ("FIREBASE_PROJECT_ID", "demo"),
        ("FIREBASE_STORAGE_BUCKET", "demo.appspot.com"),
        ("FIREBASE_MESSAGING_SENDER_ID", "1234567890"),
        ("FIREBASE_APP_ID", "1:1234567890:web:abcdef"),
        ("FIREBASE_MEASUREMENT_ID", "G-XYZ"),
    ])
}

const CONFIG_SNIPPET: &str = r#"<script>
const firebaseConfig = {
  apiKey: "$FIREBASE_API_KEY",
  authDomain: "$FIREBASE_AUTH_DOMAIN",
  projectId: "$FIREBASE_PROJECT_ID",
  storageBucket: "$FIREBASE_STORAGE_BUCKET",
  messagingSenderId: "$FIREBASE_MESSAGING_SENDER_ID",
  appId: "$FIREBASE_APP_ID",
  measurementId: "$FIREBASE_MEASUREMENT_ID"
};
</script>"#;

#[test]
fn api_key_scenario() {
    setup();
    let table = PlaceholderTable::from_source(&env([("FIREBASE_API_KEY", "abc123")]));
    let out = table.substitute(r#"<script>var k="$FIREBASE_API_KEY";</script>"#);
    assert_eq!(out.content, br#"<script>var k="abc123";</script>"#);
}

#[test]
fn all_keys_present() {
    setup();
    let table = PlaceholderTable::from_source(&full_env());
    let out = table.substitute(CONFIG_SNIPPET);
    assert_eq!(
        out.content,
        br#"<script>
const firebaseConfig = {
  apiKey: "AIzaSyExample",
  authDomain: "demo.firebaseapp.com",
  projectId: "demo",
  storageBucket: "demo.appspot.com",
  messagingSenderId: "1234567890",
  appId: "1:1234567890:web:abcdef",
  measurementId: "G-XYZ"
};
</script>"#
    );
    assert!(out.counts.iter().all(|(_, n)| *n == 1));
}

#[test]
fn absent_key_becomes_undefined() {
    setup();
    let table = PlaceholderTable::from_source(&HashMap::<String, String>::new());
    let out = table.substitute("appId: \"$FIREBASE_APP_ID\"");
    assert_eq!(out.content, b"appId: \"undefined\"");
}

#[test]
fn no_tokens_is_identity() {
    setup();
    let table = PlaceholderTable::from_source(&full_env());
    let doc = "<html><body>$HOME costs $5 and $FIREBASE alone</body></html>\n";
    let out = table.substitute(doc);
    assert_eq!(out.content, doc.as_bytes());
    assert_eq!(out.total(), 0);
}

#[test]
fn second_run_changes_nothing() {
    setup();
    let table = PlaceholderTable::from_source(&full_env());
    let once = table.substitute(CONFIG_SNIPPET);
    let twice = table.substitute(once.content.clone());
    assert_eq!(twice.content, once.content);
    assert_eq!(twice.total(), 0);
}

#[test]
fn token_has_no_end_delimiter() {
    setup();
    let table = PlaceholderTable::from_source(&env([("FIREBASE_APP_ID", "X")]));
    let out = table.substitute("$FIREBASE_APP_IDENTITY $FIREBASE_APP_I");
    assert_eq!(out.content, b"XENTITY $FIREBASE_APP_I");
}

#[test]
fn matching_is_case_sensitive() {
    setup();
    let table = PlaceholderTable::from_source(&full_env());
    let doc = "$firebase_api_key $Firebase_Api_Key";
    assert_eq!(table.substitute(doc).content, doc.as_bytes());
}

#[test]
fn values_are_inserted_literally() {
    setup();
    let table = PlaceholderTable::from_source(&env([("FIREBASE_API_KEY", "a$1b${0}c$$")]));
    let out = table.substitute("k=$FIREBASE_API_KEY");
    assert_eq!(out.content, b"k=a$1b${0}c$$");
}

#[test]
fn later_pass_sees_earlier_insertions() {
    setup();
    // API_KEY runs before APP_ID, so the inserted token is picked up
    let table = PlaceholderTable::from_source(&env([
        ("FIREBASE_API_KEY", "<$FIREBASE_APP_ID>"),
        ("FIREBASE_APP_ID", "app"),
    ]));
    let out = table.substitute("$FIREBASE_API_KEY");
    assert_eq!(out.content, b"<app>");
}

#[test]
fn earlier_pass_does_not_see_later_insertions() {
    setup();
    // APP_ID runs after API_KEY, so its inserted token survives
    let table = PlaceholderTable::from_source(&env([
        ("FIREBASE_API_KEY", "key"),
        ("FIREBASE_APP_ID", "<$FIREBASE_API_KEY>"),
    ]));
    let out = table.substitute("$FIREBASE_APP_ID");
    assert_eq!(out.content, b"<$FIREBASE_API_KEY>");
}
